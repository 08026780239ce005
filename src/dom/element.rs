//! Element instance state: id, attributes, shadow scope.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use slotmap::new_key_type;

use crate::component::{Component, Props};
use crate::dom::lifecycle::Phase;
use crate::property::PropertyTable;

new_key_type! {
    /// Unique identifier for an element instance. Copy, lightweight (u64).
    pub struct ElementId;
}

// ---------------------------------------------------------------------------
// ShadowScope
// ---------------------------------------------------------------------------

/// The isolated rendering scope of an element.
///
/// Created lazily on first connect, at most once per instance. Holds the
/// last rendered markup, the adopted class stylesheet, and the computed
/// custom-property values the widget applied.
#[derive(Clone)]
pub struct ShadowScope {
    /// Markup from the most recent flush.
    pub markup: String,
    /// The class's cached stylesheet, adopted on connect.
    pub adopted_styles: Rc<str>,
    style_vars: BTreeMap<String, String>,
}

impl ShadowScope {
    /// Create a scope adopting the given class stylesheet.
    pub fn new(adopted_styles: Rc<str>) -> Self {
        Self {
            markup: String::new(),
            adopted_styles,
            style_vars: BTreeMap::new(),
        }
    }

    /// A computed custom-property value, if set.
    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.style_vars.get(name).map(String::as_str)
    }

    /// Replace the computed custom-property values wholesale.
    pub(crate) fn set_style_vars(&mut self, vars: Vec<(String, String)>) {
        self.style_vars = vars.into_iter().collect();
    }

    /// Iterate computed custom-property values.
    pub fn style_vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style_vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Debug for ShadowScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowScope")
            .field("markup_len", &self.markup.len())
            .field("style_vars", &self.style_vars.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ElementData
// ---------------------------------------------------------------------------

/// Everything the document stores for one element instance.
pub struct ElementData {
    /// Tag name this instance was created from.
    pub tag: String,
    /// Lifecycle phase.
    pub phase: Phase,
    /// The widget, with its private state.
    pub(crate) component: Box<dyn Component>,
    /// Shared per-class descriptor table.
    pub(crate) table: Rc<PropertyTable>,
    /// Shared per-class stylesheet, adopted on first connect.
    pub(crate) class_styles: Rc<str>,
    /// Current typed property values.
    pub(crate) props: Props,
    /// Current attribute strings, reflected and wire-written alike.
    attributes: BTreeMap<String, String>,
    /// Isolated rendering scope, created on first connect.
    pub(crate) shadow: Option<ShadowScope>,
}

impl ElementData {
    pub(crate) fn new(
        tag: String,
        component: Box<dyn Component>,
        table: Rc<PropertyTable>,
        class_styles: Rc<str>,
    ) -> Self {
        let props = Props::from_table(&table);
        Self {
            tag,
            phase: Phase::Unattached,
            component,
            table,
            class_styles,
            props,
            attributes: BTreeMap::new(),
            shadow: None,
        }
    }

    /// Current value of an attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether an attribute is present (boolean presence semantics).
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Write an attribute without triggering the attribute-changed path.
    ///
    /// Returns `true` if the stored value actually changed; the reflection
    /// idempotence guarantee rests on this check.
    pub(crate) fn write_attribute_raw(&mut self, name: &str, value: &str) -> bool {
        if self.attributes.get(name).map(String::as_str) == Some(value) {
            return false;
        }
        self.attributes.insert(name.to_owned(), value.to_owned());
        true
    }

    /// Remove an attribute without triggering the attribute-changed path.
    ///
    /// Returns `true` if the attribute was present.
    pub(crate) fn remove_attribute_raw(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    /// The widget, for runtime type inspection.
    pub fn component(&self) -> &dyn Component {
        self.component.as_ref()
    }

    /// Current typed property values.
    pub fn props(&self) -> &Props {
        &self.props
    }
}

impl fmt::Debug for ElementData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementData")
            .field("tag", &self.tag)
            .field("phase", &self.phase)
            .field("attributes", &self.attributes)
            .field("shadow", &self.shadow)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
