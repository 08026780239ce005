//! Semantic color tokens: `red-600` → `var(--ui-red-600)`.

use super::lexer::{classify, ValueKind};

/// Palette families shipped by the design system.
const FAMILIES: &[&str] = &[
    "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal", "cyan", "sky", "blue",
    "indigo", "violet", "purple", "fuchsia", "pink", "rose", "gray", "slate", "zinc", "neutral",
    "stone",
];

/// Palette shades, lightest to darkest.
const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Resolve a semantic color token to a CSS value.
///
/// - Empty input resolves to `None`.
/// - A `<family>-<shade>` token from the known palette resolves to a CSS
///   variable reference: `red-600` → `var(--ui-red-600)`.
/// - Anything else (hex codes, named CSS colors, `var()` references, raw CSS)
///   passes through unchanged.
///
/// Never fails: unknown input degrades to passthrough.
pub fn resolve_color(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    // Only a bare identifier can be a palette token; hex literals, var()
    // references and compound values always pass through.
    if classify(token) == ValueKind::Ident {
        if let Some((family, shade)) = token.rsplit_once('-') {
            if FAMILIES.contains(&family) && SHADES.contains(&shade) {
                return Some(format!("var(--ui-{family}-{shade})"));
            }
        }
    }
    Some(token.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_token_resolves_to_var() {
        assert_eq!(
            resolve_color("red-600").as_deref(),
            Some("var(--ui-red-600)")
        );
        assert_eq!(
            resolve_color("sky-50").as_deref(),
            Some("var(--ui-sky-50)")
        );
        assert_eq!(
            resolve_color("neutral-950").as_deref(),
            Some("var(--ui-neutral-950)")
        );
    }

    #[test]
    fn empty_resolves_to_none() {
        assert_eq!(resolve_color(""), None);
        assert_eq!(resolve_color("   "), None);
    }

    #[test]
    fn hex_passes_through() {
        assert_eq!(resolve_color("#ef4444").as_deref(), Some("#ef4444"));
    }

    #[test]
    fn named_css_color_passes_through() {
        assert_eq!(resolve_color("rebeccapurple").as_deref(), Some("rebeccapurple"));
        assert_eq!(resolve_color("currentColor").as_deref(), Some("currentColor"));
    }

    #[test]
    fn existing_var_passes_through() {
        assert_eq!(
            resolve_color("var(--brand)").as_deref(),
            Some("var(--brand)")
        );
    }

    #[test]
    fn unknown_family_passes_through() {
        assert_eq!(resolve_color("mauve-600").as_deref(), Some("mauve-600"));
    }

    #[test]
    fn unknown_shade_passes_through() {
        assert_eq!(resolve_color("red-601").as_deref(), Some("red-601"));
        assert_eq!(resolve_color("red-1000").as_deref(), Some("red-1000"));
    }

    #[test]
    fn compound_value_passes_through() {
        assert_eq!(
            resolve_color("1px solid red-600").as_deref(),
            Some("1px solid red-600")
        );
    }

    #[test]
    fn pure_over_repeated_calls() {
        let a = resolve_color("emerald-500");
        let b = resolve_color("emerald-500");
        assert_eq!(a, b);
    }
}
