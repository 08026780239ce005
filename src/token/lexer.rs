//! logos-based lexer for raw CSS values.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#fff` as HexColor beats `#` falling out as an error)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `var(--ui-red-600)` matches [`ValueToken::VarRef`], not `Function`
//! - `10px` matches [`ValueToken::Dimension`], not `Number` + `Ident`
//! - `#ef4444` matches [`ValueToken::HexColor`]

use logos::Logos;

/// A token inside a raw CSS value string.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum ValueToken {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Custom-property reference: `var(--ui-red-600)`, `var(--x, fallback)`.
    #[regex(r"var\([^)]*\)")]
    VarRef,

    /// Functional value: `rgb(...)`, `rgba(...)`, `calc(...)`, `oklch(...)`.
    #[regex(r"[a-zA-Z][a-zA-Z-]*\([^)]*\)")]
    Function,

    /// CSS hex color: `#fff`, `#ef4444`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Dimension: number with a length/percentage unit, like `10px`, `1.5em`, `50%`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|em|rem|ex|ch|vw|vh|vmin|vmax|pt|pc|in|cm|mm|Q|%)")]
    Dimension,

    /// Unitless number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: keywords, color names, token names like `red-600`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,
}

/// The shape of a whole raw CSS value, as seen by the resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A single identifier (`large`, `red-600`, `currentColor`).
    Ident,
    /// A single hex color literal.
    HexColor,
    /// A single dimension (`10px`, `1.125em`, `50%`).
    Length,
    /// A single unitless number.
    Number,
    /// A single `var(...)` reference.
    VarRef,
    /// A single functional value (`rgb(...)`, `calc(...)`).
    Function,
    /// Anything else: multi-token values, shadow lists, unlexable input.
    Other,
}

/// Tokenize a raw value into `(ValueToken, slice)` pairs.
///
/// Tokens that fail to lex are skipped.
pub fn tokenize(input: &str) -> Vec<(ValueToken, String)> {
    let lexer = ValueToken::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

/// Classify a whole raw value string.
///
/// Returns the kind of a single-token value, or [`ValueKind::Other`] for
/// anything compound (e.g. `1px solid red` or a layered shadow list).
pub fn classify(input: &str) -> ValueKind {
    let mut lexer = ValueToken::lexer(input.trim());
    let first = match lexer.next() {
        Some(Ok(token)) => token,
        _ => return ValueKind::Other,
    };
    if lexer.next().is_some() {
        return ValueKind::Other;
    }
    match first {
        ValueToken::Ident => ValueKind::Ident,
        ValueToken::HexColor => ValueKind::HexColor,
        ValueToken::Dimension => ValueKind::Length,
        ValueToken::Number => ValueKind::Number,
        ValueToken::VarRef => ValueKind::VarRef,
        ValueToken::Function => ValueKind::Function,
    }
}
