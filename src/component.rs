//! Component trait: the contract every widget supplies to the runtime.
//!
//! A widget is a property table, a `styles()` string, and a `render()`
//! markup producer. Everything else (coercion, reflection, scheduling,
//! lifecycle) is the runtime's job. The trait is object-safe: the document
//! stores widgets as `Box<dyn Component>`.

use std::any::Any;
use std::collections::BTreeMap;

use crate::property::{PropertyTable, PropertyValue};

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// A widget's `render()` failed.
///
/// A failing render is a programmer error in the widget: it surfaces to the
/// caller (and the host's error channel) instead of being swallowed, but the
/// instance is marked clean afterwards so a broken widget cannot wedge the
/// scheduler in a retry loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("render failed for <{tag}>: {message}")]
pub struct RenderError {
    /// Tag name of the failing instance.
    pub tag: String,
    /// Widget-supplied failure description.
    pub message: String,
}

impl RenderError {
    /// Create a render error for the given tag.
    pub fn new(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Props
// ---------------------------------------------------------------------------

/// The current property values of one instance, as seen by the widget's
/// `render()` and `style_vars()` hooks.
///
/// Getters are lenient: a missing or wrong-kind read degrades to the kind's
/// zero value rather than panicking, so a widget can never crash the flush
/// by reading a property it forgot to declare.
#[derive(Debug, Clone, Default)]
pub struct Props {
    values: BTreeMap<String, PropertyValue>,
}

impl Props {
    /// Seed a value map from a table's declared defaults.
    pub fn from_table(table: &PropertyTable) -> Self {
        let values = table
            .iter()
            .map(|d| (d.name.clone(), d.default.clone()))
            .collect();
        Self { values }
    }

    /// The raw typed value, if declared.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// String property value; `""` when absent or not a string.
    pub fn string(&self, name: &str) -> &str {
        self.values
            .get(name)
            .and_then(PropertyValue::as_str)
            .unwrap_or("")
    }

    /// Number property value; `0.0` when absent or not a number.
    pub fn number(&self, name: &str) -> f64 {
        self.values
            .get(name)
            .and_then(PropertyValue::as_number)
            .unwrap_or(0.0)
    }

    /// Boolean property value; `false` when absent or not a boolean.
    pub fn flag(&self, name: &str) -> bool {
        self.values
            .get(name)
            .and_then(PropertyValue::as_flag)
            .unwrap_or(false)
    }

    /// Overwrite a value. Runtime-internal: widgets only read.
    pub(crate) fn set(&mut self, name: &str, value: PropertyValue) {
        self.values.insert(name.to_owned(), value);
    }
}

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets built on this runtime.
///
/// Only `component_type` and `render` are mandatory; a minimal widget is a
/// markup function. The runtime calls `property_table()` and `styles()` once
/// per class at registration, and the remaining hooks at lifecycle points.
pub trait Component {
    /// The class name of this widget (e.g. "Badge", "Card").
    fn component_type(&self) -> &str;

    /// Declared public properties. Called once per class at registration.
    ///
    /// Defaults to an empty table (widget with no public properties).
    fn property_table(&self) -> PropertyTable {
        PropertyTable::empty()
    }

    /// Class stylesheet, adopted into every instance's shadow scope.
    ///
    /// Called once per class at registration and cached; must be pure.
    fn styles(&self) -> &str {
        ""
    }

    /// Produce the instance markup for one flush.
    ///
    /// Any untrusted text embedded in the markup must be escaped (see
    /// [`crate::render::escape`]).
    fn render(&self, props: &Props) -> Result<String, RenderError>;

    /// Computed custom-property values applied to the shadow scope after
    /// each render, typically via the token resolvers. Style-only widgets
    /// can change appearance here without new markup.
    fn style_vars(&self, _props: &Props) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Called when the instance connects: attach listeners, acquire shared
    /// resources.
    fn attached(&mut self, _props: &Props) {}

    /// Called when the instance disconnects: detach listeners, release
    /// shared resources and subscriptions.
    fn detached(&mut self) {}

    /// Called at the end of every successful flush.
    fn updated(&mut self, _props: &Props) {}

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyDescriptor;

    #[derive(Debug)]
    struct Chip {
        updates: usize,
    }

    impl Chip {
        fn new() -> Self {
            Self { updates: 0 }
        }
    }

    impl Component for Chip {
        fn component_type(&self) -> &str {
            "Chip"
        }

        fn property_table(&self) -> PropertyTable {
            PropertyTable::new(vec![
                PropertyDescriptor::string("label", "chip"),
                PropertyDescriptor::flag("removable"),
            ])
        }

        fn styles(&self) -> &str {
            ":host { display: inline-flex; }"
        }

        fn render(&self, props: &Props) -> Result<String, RenderError> {
            Ok(format!("<span class=\"chip\">{}</span>", props.string("label")))
        }

        fn updated(&mut self, _props: &Props) {
            self.updates += 1;
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn props_seed_from_table_defaults() {
        let chip = Chip::new();
        let props = Props::from_table(&chip.property_table());
        assert_eq!(props.string("label"), "chip");
        assert!(!props.flag("removable"));
    }

    #[test]
    fn props_lenient_getters() {
        let props = Props::default();
        assert_eq!(props.string("missing"), "");
        assert_eq!(props.number("missing"), 0.0);
        assert!(!props.flag("missing"));
        assert!(props.get("missing").is_none());
    }

    #[test]
    fn props_wrong_kind_degrades() {
        let mut props = Props::default();
        props.set("label", PropertyValue::Str("x".into()));
        assert_eq!(props.number("label"), 0.0);
        assert!(!props.flag("label"));
    }

    #[test]
    fn render_uses_props() {
        let chip = Chip::new();
        let mut props = Props::from_table(&chip.property_table());
        props.set("label", PropertyValue::Str("beta".into()));
        let markup = chip.render(&props).unwrap();
        assert_eq!(markup, "<span class=\"chip\">beta</span>");
    }

    #[test]
    fn default_hooks_are_noops() {
        let mut chip = Chip::new();
        let props = Props::default();
        chip.attached(&props);
        chip.detached();
        assert_eq!(chip.style_vars(&props), Vec::new());
    }

    #[test]
    fn updated_hook_runs() {
        let mut chip = Chip::new();
        let props = Props::default();
        chip.updated(&props);
        chip.updated(&props);
        assert_eq!(chip.updates, 2);
    }

    #[test]
    fn component_is_object_safe() {
        let boxed: Box<dyn Component> = Box::new(Chip::new());
        assert_eq!(boxed.component_type(), "Chip");
        assert!(boxed.render(&Props::default()).is_ok());
    }

    #[test]
    fn component_as_any_downcast() {
        let mut boxed: Box<dyn Component> = Box::new(Chip::new());
        boxed.as_any_mut().downcast_mut::<Chip>().unwrap().updates = 5;
        assert_eq!(boxed.as_any().downcast_ref::<Chip>().unwrap().updates, 5);
    }

    #[test]
    fn render_error_display() {
        let err = RenderError::new("ui-chip", "missing template");
        assert_eq!(err.to_string(), "render failed for <ui-chip>: missing template");
    }
}
