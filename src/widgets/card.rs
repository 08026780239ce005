//! Card widget: an elevated content surface.

use std::any::Any;

use crate::component::{Component, Props, RenderError};
use crate::property::{PropertyDescriptor, PropertyTable};
use crate::render::escape::escape;
use crate::token::{resolve_elevation, resolve_size};

/// A content card with a heading and a configurable shadow.
///
/// `elevation` accepts the design system's levels `"1"`-`"5"` or literal
/// shadow CSS; `maxWidth` accepts a named size or a raw CSS length.
#[derive(Debug, Default)]
pub struct Card;

impl Card {
    /// Create a new card.
    pub fn new() -> Self {
        Self
    }
}

impl Component for Card {
    fn component_type(&self) -> &str {
        "Card"
    }

    fn property_table(&self) -> PropertyTable {
        PropertyTable::new(vec![
            PropertyDescriptor::string("heading", ""),
            PropertyDescriptor::string("elevation", "1"),
            PropertyDescriptor::string("maxWidth", ""),
        ])
    }

    fn styles(&self) -> &str {
        ":host { display: block; }\n\
         .card { background: var(--ui-surface, white); border-radius: 4px; \
         box-shadow: var(--card-shadow); max-width: var(--card-max-width, none); \
         padding: 16px; }\n\
         .card-heading { font-weight: 600; margin-bottom: 8px; }"
    }

    fn render(&self, props: &Props) -> Result<String, RenderError> {
        let heading = props.string("heading");
        let heading_markup = if heading.is_empty() {
            String::new()
        } else {
            format!("<div class=\"card-heading\" part=\"heading\">{}</div>", escape(heading))
        };
        Ok(format!(
            "<div class=\"card\" part=\"base\">{heading_markup}<div class=\"card-body\" part=\"body\"><slot></slot></div></div>"
        ))
    }

    fn style_vars(&self, props: &Props) -> Vec<(String, String)> {
        let mut vars = Vec::new();
        if let Some(shadow) = resolve_elevation(props.string("elevation")) {
            vars.push(("--card-shadow".into(), shadow));
        }
        if let Some(width) = resolve_size(props.string("maxWidth")) {
            vars.push(("--card-max-width".into(), width));
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
