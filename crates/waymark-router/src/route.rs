//! The route entity: a pattern, the HTTP methods it answers to, an opaque
//! action, and its parameter storage.

use crate::params::{ParamEntry, Parameters};

/// A registered route. `T` is the caller's action type; this crate stores
/// and returns it without ever inspecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<T> {
    pattern: String,
    methods: Vec<String>,
    action: Option<T>,
    parameters: Parameters,
}

impl<T> Route<T> {
    /// Create a route for a pattern, with no methods, action, or parameters.
    pub fn new(pattern: impl Into<String>) -> Self {
        Route {
            pattern: pattern.into(),
            methods: Vec::new(),
            action: None,
            parameters: Parameters::new(),
        }
    }

    /// Consuming constructor: set the method list.
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_methods(methods);
        self
    }

    /// Consuming constructor: set the action.
    pub fn with_action(mut self, action: T) -> Self {
        self.action = Some(action);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    /// Methods exactly as stored; no normalization happens here. The match
    /// engine compares case-insensitively.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn set_methods<I, S>(&mut self, methods: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
    }

    /// True when the method set contains `method`, compared
    /// case-insensitively. An empty set allows nothing.
    pub fn allows_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    pub fn action(&self) -> Option<&T> {
        self.action.as_ref()
    }

    pub fn set_action(&mut self, action: T) {
        self.action = Some(action);
    }

    /// Replace parameter state from ordered entries (see
    /// [`Parameters::set`] for the re-indexing rules). Builder-style.
    pub fn set_parameters<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = ParamEntry>,
    {
        self.parameters.set(entries);
        self
    }

    pub fn parameter(&self, index: usize) -> Option<&str> {
        self.parameters.get(index)
    }

    pub fn named_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get_named(name)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
