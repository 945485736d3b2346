//! Dual positional/named parameter storage.
//!
//! One ordered sequence of values plus a name → index lookup kept consistent
//! with it. Every named value is also reachable by position; the two views
//! are never mutated independently.

use std::collections::HashMap;

/// One input entry for [`Parameters::set`]. Entries are re-indexed
/// sequentially regardless of how the caller keyed them; a named entry
/// additionally registers its value under the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamEntry {
    Positional(String),
    Named(String, String),
}

impl ParamEntry {
    pub fn positional(value: impl Into<String>) -> Self {
        ParamEntry::Positional(value.into())
    }

    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        ParamEntry::Named(name.into(), value.into())
    }
}

/// Bound parameter values for a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: Vec<String>,
    names: HashMap<String, usize>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from entries in order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ParamEntry>,
    {
        let mut params = Self::new();
        params.set(entries);
        params
    }

    /// Replace all parameter state. Each entry gets the next sequential
    /// positional index starting at 0; named entries also register their
    /// name against that index.
    pub fn set<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = ParamEntry>,
    {
        self.values.clear();
        self.names.clear();

        for entry in entries {
            let index = self.values.len();
            match entry {
                ParamEntry::Positional(value) => self.values.push(value),
                ParamEntry::Named(name, value) => {
                    self.values.push(value);
                    self.names.insert(name, index);
                }
            }
        }
    }

    /// Positional lookup. `None` means "not bound", not an error.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Named lookup. `None` means "not bound", not an error.
    pub fn get_named(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(|&index| self.values[index].as_str())
    }

    /// All values in positional order.
    pub fn positional(&self) -> &[String] {
        &self.values
    }

    /// Name/value pairs, unordered.
    pub fn named(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(|(name, &index)| (name.as_str(), self.values[index].as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
