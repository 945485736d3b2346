//! Pattern compilation: turns a human-authored path pattern into an
//! expression string plus a map of which segments bind named parameters.
//!
//! Compilation is a pure function. The parameter map belongs to the returned
//! value, never to shared state, so concurrent compilations cannot interfere.

use crate::rules;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Trailing named-parameter marker: `:identifier` anchored at segment end.
static PARAM_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z][A-Za-z0-9]*)$").expect("marker regex is valid"));

/// Result of compiling one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    /// Expression text, segments rejoined with `/`. Not yet anchored; the
    /// matcher layer wraps it `(?i)^…$` before evaluation.
    pub expression: String,
    /// Segment index → parameter name, 0-based after the leading `/`.
    pub parameter_map: HashMap<usize, String>,
}

/// Compile a path pattern.
///
/// `/` compiles to itself with no parameters. Otherwise one leading `/` is
/// stripped and each `/`-separated segment is processed: a trailing `:name`
/// marker is recorded and removed, a segment left empty becomes the `.+`
/// fallback, and any remaining text has its rule tokens substituted.
pub fn compile(pattern: &str) -> CompiledPattern {
    if pattern == "/" {
        return CompiledPattern {
            expression: "/".to_string(),
            parameter_map: HashMap::new(),
        };
    }

    let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);
    let mut parameter_map = HashMap::new();
    let mut compiled_segments = Vec::new();

    for (index, segment) in trimmed.split('/').enumerate() {
        let remainder = match PARAM_MARKER.find(segment) {
            Some(marker) => {
                parameter_map.insert(index, segment[marker.start() + 1..].to_string());
                &segment[..marker.start()]
            }
            None => segment,
        };

        if remainder.is_empty() {
            compiled_segments.push(".+".to_string());
        } else {
            compiled_segments.push(rules::substitute(remainder));
        }
    }

    CompiledPattern {
        expression: format!("/{}", compiled_segments.join("/")),
        parameter_map,
    }
}
