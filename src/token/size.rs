//! Named size tokens: `large` → `1.125em`.

use super::lexer::{classify, ValueKind};

/// Named sizes and their fixed em values.
const SIZES: &[(&str, &str)] = &[
    ("xx-small", "0.625em"),
    ("x-small", "0.75em"),
    ("small", "0.875em"),
    ("medium", "1em"),
    ("large", "1.125em"),
    ("x-large", "1.25em"),
];

/// Resolve a semantic size token to a CSS length.
///
/// - Empty input resolves to `None`.
/// - Named sizes (`xx-small` through `x-large`) map to fixed em values.
/// - Raw CSS lengths (`10px`, `1.5rem`, `50%`) pass through unchanged, as
///   does any other unrecognized value.
pub fn resolve_size(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if classify(token) == ValueKind::Ident {
        if let Some((_, em)) = SIZES.iter().find(|(name, _)| *name == token) {
            return Some((*em).to_owned());
        }
    }
    Some(token.to_owned())
}
