//! Badge widget: a small status label.
//!
//! The simplest consumer of the runtime: one string property, one boolean
//! property, and a variant-to-palette mapping in `style_vars`.

use std::any::Any;

use crate::component::{Component, Props, RenderError};
use crate::property::{PropertyDescriptor, PropertyTable};
use crate::render::escape::{escape, escape_attribute};
use crate::token::resolve_color;

// ---------------------------------------------------------------------------
// Badge
// ---------------------------------------------------------------------------

/// A status badge.
///
/// Properties: `variant` (neutral, primary, success, warning, danger) and
/// `pill` (rounded ends), plus the `label` text it displays.
#[derive(Debug, Default)]
pub struct Badge;

impl Badge {
    /// Create a new badge.
    pub fn new() -> Self {
        Self
    }

    /// Palette token for a variant name.
    fn variant_token(variant: &str) -> &'static str {
        match variant {
            "primary" => "blue-600",
            "success" => "green-600",
            "warning" => "amber-500",
            "danger" => "red-600",
            _ => "gray-500",
        }
    }
}

impl Component for Badge {
    fn component_type(&self) -> &str {
        "Badge"
    }

    fn property_table(&self) -> PropertyTable {
        PropertyTable::new(vec![
            PropertyDescriptor::string("variant", "neutral"),
            PropertyDescriptor::string("label", ""),
            PropertyDescriptor::flag("pill"),
        ])
    }

    fn styles(&self) -> &str {
        ":host { display: inline-flex; }\n\
         .badge { background: var(--badge-background); border-radius: 2px; \
         color: white; font-size: 0.75em; padding: 2px 6px; }\n\
         .badge-pill { border-radius: 999px; }"
    }

    fn render(&self, props: &Props) -> Result<String, RenderError> {
        let mut classes = format!("badge badge-{}", props.string("variant"));
        if props.flag("pill") {
            classes.push_str(" badge-pill");
        }
        Ok(format!(
            "<span class=\"{}\" part=\"base\">{}</span>",
            escape_attribute(&classes),
            escape(props.string("label")),
        ))
    }

    fn style_vars(&self, props: &Props) -> Vec<(String, String)> {
        let token = Self::variant_token(props.string("variant"));
        match resolve_color(token) {
            Some(color) => vec![("--badge-background".into(), color)],
            None => Vec::new(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyValue;

    fn props_with(pairs: &[(&str, PropertyValue)]) -> Props {
        let badge = Badge::new();
        let mut props = Props::from_table(&badge.property_table());
        for (name, value) in pairs {
            props.set(name, value.clone());
        }
        props
    }

    #[test]
    fn component_type_is_badge() {
        assert_eq!(Badge::new().component_type(), "Badge");
    }

    #[test]
    fn table_declares_three_properties() {
        let table = Badge::new().property_table();
        assert_eq!(table.len(), 3);
        assert!(table.get("variant").is_some());
        assert!(table.by_attribute("pill").is_some());
    }

    #[test]
    fn render_default() {
        let badge = Badge::new();
        let props = Props::from_table(&badge.property_table());
        let markup = badge.render(&props).unwrap();
        assert_eq!(
            markup,
            "<span class=\"badge badge-neutral\" part=\"base\"></span>"
        );
    }

    #[test]
    fn render_pill_variant() {
        let badge = Badge::new();
        let props = props_with(&[
            ("variant", PropertyValue::Str("danger".into())),
            ("label", PropertyValue::Str("3".into())),
            ("pill", PropertyValue::Flag(true)),
        ]);
        let markup = badge.render(&props).unwrap();
        assert_eq!(
            markup,
            "<span class=\"badge badge-danger badge-pill\" part=\"base\">3</span>"
        );
    }

    #[test]
    fn render_escapes_label() {
        let badge = Badge::new();
        let props = props_with(&[("label", PropertyValue::Str("<b>new</b>".into()))]);
        let markup = badge.render(&props).unwrap();
        assert!(markup.contains("&lt;b&gt;new&lt;/b&gt;"));
        assert!(!markup.contains("<b>"));
    }

    #[test]
    fn style_vars_resolve_variant_color() {
        let badge = Badge::new();
        let props = props_with(&[("variant", PropertyValue::Str("danger".into()))]);
        assert_eq!(
            badge.style_vars(&props),
            vec![("--badge-background".into(), "var(--ui-red-600)".into())]
        );
    }

    #[test]
    fn unknown_variant_falls_back_to_gray() {
        let badge = Badge::new();
        let props = props_with(&[("variant", PropertyValue::Str("sparkly".into()))]);
        assert_eq!(
            badge.style_vars(&props),
            vec![("--badge-background".into(), "var(--ui-gray-500)".into())]
        );
    }
}
