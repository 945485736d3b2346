//! Compiled form of a pattern: an anchored, case-insensitive regex plus the
//! parameter map needed to bind target segments.

use crate::params::{ParamEntry, Parameters};
use crate::pattern;
use regex::Regex;
use std::collections::HashMap;

/// A pattern ready for matching. Built once per pattern text and reused
/// across match calls (the router memoizes these).
#[derive(Debug)]
pub struct PatternMatcher {
    regex: Regex,
    parameter_map: HashMap<usize, String>,
}

impl PatternMatcher {
    /// Compile `pattern` into a matcher. The expression is anchored at both
    /// ends and evaluated case-insensitively. Fails when the compiled
    /// expression is not a valid regex (e.g. an unbalanced bracket left by
    /// an unrecognized rule token).
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let compiled = pattern::compile(pattern);
        let regex = Regex::new(&format!("(?i)^{}$", compiled.expression))?;
        Ok(PatternMatcher {
            regex,
            parameter_map: compiled.parameter_map,
        })
    }

    pub fn is_match(&self, target: &str) -> bool {
        self.regex.is_match(target)
    }

    /// Bind a matched target's segment values. Segments whose index appears
    /// in the parameter map become named entries; the rest stay positional.
    pub fn bind(&self, target: &str) -> Parameters {
        let trimmed = target.strip_prefix('/').unwrap_or(target);
        if trimmed.is_empty() {
            return Parameters::new();
        }

        Parameters::from_entries(trimmed.split('/').enumerate().map(|(index, value)| {
            match self.parameter_map.get(&index) {
                Some(name) => ParamEntry::named(name, value),
                None => ParamEntry::positional(value),
            }
        }))
    }
}
