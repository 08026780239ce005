//! Attribute conversion: kebab-case derivation, coercion, encoding.
//!
//! The wire format is the attribute string: kebab-case names, presence-style
//! booleans, literal text for numbers and strings. Conversion never fails:
//! a numeric attribute that does not parse leaves the previous value in
//! place, and a removed attribute restores the declared default.

use crate::property::descriptor::{PropertyDescriptor, PropertyKind, PropertyValue};

/// Derive the attribute name for a property name.
///
/// camelCase humps become `-` boundaries (`maxWidth` → `max-width`) and
/// underscores fold to `-`. Already-kebab names pass through unchanged.
pub fn attribute_name(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Coerce a raw attribute into a typed property value.
///
/// `raw` is `None` when the attribute is absent or was removed.
///
/// - Boolean: presence test; any present value (even `""` or `"false"`)
///   means `true`.
/// - Number: parsed as `f64`; a failed or non-finite parse retains
///   `previous`; removal restores the default.
/// - String: literal passthrough; removal restores the default.
pub fn coerce(
    descriptor: &PropertyDescriptor,
    raw: Option<&str>,
    previous: &PropertyValue,
) -> PropertyValue {
    match descriptor.kind {
        PropertyKind::Boolean => PropertyValue::Flag(raw.is_some()),
        PropertyKind::Number => match raw {
            None => descriptor.default.clone(),
            Some(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => PropertyValue::Num(n),
                _ => previous.clone(),
            },
        },
        PropertyKind::String => match raw {
            None => descriptor.default.clone(),
            Some(s) => PropertyValue::Str(s.to_owned()),
        },
    }
}

/// Encode a property value as its reflected attribute form.
///
/// `None` means the attribute should be absent: a `false` boolean removes
/// the attribute, a `true` one is present with an empty value. Numbers and
/// strings carry their literal textual form.
pub fn encode(value: &PropertyValue) -> Option<String> {
    match value {
        PropertyValue::Flag(true) => Some(String::new()),
        PropertyValue::Flag(false) => None,
        PropertyValue::Num(_) | PropertyValue::Str(_) => Some(value.to_string()),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
