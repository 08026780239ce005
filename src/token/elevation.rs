//! Elevation tokens: levels 1-5 → layered shadow strings.

/// Layered shadows, level 1 (subtle) to level 5 (floating).
const SHADOWS: &[&str] = &[
    "0 1px 2px rgba(16, 24, 40, 0.08)",
    "0 1px 3px rgba(16, 24, 40, 0.1), 0 1px 2px rgba(16, 24, 40, 0.06)",
    "0 4px 8px -2px rgba(16, 24, 40, 0.1), 0 2px 4px -2px rgba(16, 24, 40, 0.06)",
    "0 12px 16px -4px rgba(16, 24, 40, 0.08), 0 4px 6px -2px rgba(16, 24, 40, 0.03)",
    "0 20px 24px -4px rgba(16, 24, 40, 0.08), 0 8px 8px -4px rgba(16, 24, 40, 0.03)",
];

/// Resolve an elevation level to a box-shadow value.
///
/// - Empty input resolves to `None`.
/// - `"1"` through `"5"` map to progressively larger layered shadows.
/// - Any other string (including `"0"`, `"6"`, or literal shadow CSS)
///   passes through verbatim. Passthrough is intentional, not validation:
///   widgets may hand the attribute a full shadow list.
pub fn resolve_elevation(level: &str) -> Option<String> {
    let level = level.trim();
    if level.is_empty() {
        return None;
    }
    match level {
        "1" => Some(SHADOWS[0].to_owned()),
        "2" => Some(SHADOWS[1].to_owned()),
        "3" => Some(SHADOWS[2].to_owned()),
        "4" => Some(SHADOWS[3].to_owned()),
        "5" => Some(SHADOWS[4].to_owned()),
        other => Some(other.to_owned()),
    }
}
