//! Divider widget: a horizontal or vertical separator rule.

use std::any::Any;

use crate::component::{Component, Props, RenderError};
use crate::property::{PropertyDescriptor, PropertyTable};
use crate::token::resolve_color;

/// A separator rule.
///
/// `vertical` flips the orientation, `lineColor` accepts a palette token or
/// raw CSS color, and `width` is the rule thickness in pixels.
#[derive(Debug, Default)]
pub struct Divider;

impl Divider {
    /// Create a new divider.
    pub fn new() -> Self {
        Self
    }
}

impl Component for Divider {
    fn component_type(&self) -> &str {
        "Divider"
    }

    fn property_table(&self) -> PropertyTable {
        PropertyTable::new(vec![
            PropertyDescriptor::flag("vertical"),
            PropertyDescriptor::string("lineColor", ""),
            PropertyDescriptor::number("width", 1.0),
        ])
    }

    fn styles(&self) -> &str {
        ":host { display: block; }\n\
         .divider { background: var(--divider-color, var(--ui-gray-200)); }\n\
         .divider-horizontal { height: var(--divider-width); width: 100%; }\n\
         .divider-vertical { height: 100%; width: var(--divider-width); }"
    }

    fn render(&self, props: &Props) -> Result<String, RenderError> {
        let orientation = if props.flag("vertical") {
            "vertical"
        } else {
            "horizontal"
        };
        Ok(format!(
            "<div class=\"divider divider-{orientation}\" part=\"base\" role=\"separator\" aria-orientation=\"{orientation}\"></div>"
        ))
    }

    fn style_vars(&self, props: &Props) -> Vec<(String, String)> {
        let mut vars = vec![("--divider-width".into(), format!("{}px", props.number("width")))];
        if let Some(color) = resolve_color(props.string("lineColor")) {
            vars.push(("--divider-color".into(), color));
        }
        vars
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
