//! Avatar widget: initials in a sized circle.

use std::any::Any;

use crate::component::{Component, Props, RenderError};
use crate::property::{PropertyDescriptor, PropertyTable};
use crate::render::escape::{escape, escape_attribute};
use crate::token::resolve_size;

/// A round avatar displaying user initials.
#[derive(Debug, Default)]
pub struct Avatar;

impl Avatar {
    /// Create a new avatar.
    pub fn new() -> Self {
        Self
    }
}

impl Component for Avatar {
    fn component_type(&self) -> &str {
        "Avatar"
    }

    fn property_table(&self) -> PropertyTable {
        PropertyTable::new(vec![
            PropertyDescriptor::string("initials", ""),
            PropertyDescriptor::string("displayName", ""),
            PropertyDescriptor::string("size", "medium"),
        ])
    }

    fn styles(&self) -> &str {
        ":host { display: inline-block; }\n\
         .avatar { align-items: center; background: var(--ui-gray-300); \
         border-radius: 50%; display: flex; font-size: var(--avatar-size); \
         height: 2.5em; justify-content: center; width: 2.5em; }"
    }

    fn render(&self, props: &Props) -> Result<String, RenderError> {
        Ok(format!(
            "<div class=\"avatar\" part=\"base\" role=\"img\" aria-label=\"{}\">{}</div>",
            escape_attribute(props.string("displayName")),
            escape(props.string("initials")),
        ))
    }

    fn style_vars(&self, props: &Props) -> Vec<(String, String)> {
        match resolve_size(props.string("size")) {
            Some(size) => vec![("--avatar-size".into(), size)],
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

    fn props_with(pairs: &[(&str, &str)]) -> Props {
        let mut props = Props::from_table(&Avatar::new().property_table());
        for (name, value) in pairs {
            props.set(name, PropertyValue::Str((*value).into()));
        }
        props
    }

    #[test]
    fn display_name_attribute_is_kebab() {
        let table = Avatar::new().property_table();
        assert_eq!(table.get("displayName").unwrap().attribute, "display-name");
    }

    #[test]
    fn render_initials_and_label() {
        let markup = Avatar::new()
            .render(&props_with(&[
                ("initials", "KT"),
                ("displayName", "Kay Tran"),
            ]))
            .unwrap();
        assert!(markup.contains(">KT</div>"));
        assert!(markup.contains("aria-label=\"Kay Tran\""));
    }

    #[test]
    fn render_escapes_untrusted_name() {
        let markup = Avatar::new()
            .render(&props_with(&[("displayName", "\"><img>")]))
            .unwrap();
        assert!(markup.contains("&quot;&gt;&lt;img&gt;"));
        assert!(!markup.contains("\"><img>"));
    }

    #[test]
    fn default_size_is_medium_em() {
        let vars = Avatar::new().style_vars(&props_with(&[]));
        assert_eq!(vars, vec![("--avatar-size".into(), "1em".into())]);
    }

    #[test]
    fn raw_length_size_passes_through() {
        let vars = Avatar::new().style_vars(&props_with(&[("size", "32px")]));
        assert_eq!(vars, vec![("--avatar-size".into(), "32px".into())]);
    }
}
