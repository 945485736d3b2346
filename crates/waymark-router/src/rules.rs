//! Shorthand rule table: bracket tokens that stand in for fixed
//! character-class expressions inside a pattern segment.
//!
//! The table is closed; tokens outside it pass through untranslated.

/// Rule token → expression fragment, in substitution order.
pub const RULES: [(&str, &str); 4] = [
    ("[alpha]", "[a-zA-Z]+"),
    ("[num]", "[0-9]+"),
    ("[alnum]", "[a-zA-Z0-9]+"),
    ("[slug]", r"[a-zA-Z0-9]+[a-zA-Z0-9\-]+"),
];

/// Substitute every known rule token in `segment` with its expression
/// fragment. All occurrences of every token are replaced; anything else is
/// left as-is.
pub fn substitute(segment: &str) -> String {
    let mut out = segment.to_string();
    for (token, fragment) in RULES {
        if out.contains(token) {
            out = out.replace(token, fragment);
        }
    }
    out
}
