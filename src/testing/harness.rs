//! Harness: programmatic interaction with a headless document.
//!
//! The `Harness` wraps a [`Document`] with the built-in widgets registered
//! and provides a compact API for driving elements in tests: create and
//! connect, write attributes and properties, flush deterministically, and
//! inspect the rendered shadow scope.

use crate::component::RenderError;
use crate::dom::{Document, DocumentConfig, DocumentError, ElementId};
use crate::property::PropertyValue;
use crate::widgets;

// ---------------------------------------------------------------------------
// HarnessError
// ---------------------------------------------------------------------------

/// Any failure while driving the document.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

/// A headless document driver for testing.
///
/// # Examples
///
/// ```ignore
/// use veneer_ui::testing::Harness;
///
/// let mut harness = Harness::new();
/// let badge = harness.create_connected("ui-badge")?;
/// harness.set_attr(badge, "label", "new");
/// harness.flush()?;
/// assert!(harness.markup(badge).contains("new"));
/// ```
pub struct Harness {
    document: Document,
}

impl Harness {
    /// Create a harness with the built-in widgets registered.
    pub fn new() -> Self {
        widgets::register_builtins();
        Self {
            document: Document::new(),
        }
    }

    /// Create a harness from a [`DocumentConfig`].
    pub fn with_config(config: DocumentConfig) -> Self {
        widgets::register_builtins();
        Self {
            document: Document::with_config(config),
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The underlying document, mutably.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    // ── Driving ──────────────────────────────────────────────────────

    /// Create an element and connect it (first flush included).
    pub fn create_connected(&mut self, tag: &str) -> Result<ElementId, HarnessError> {
        let id = self.document.create_element(tag)?;
        self.document.connect(id)?;
        Ok(id)
    }

    /// Set an attribute, as the platform would.
    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        self.document.set_attribute(id, name, value);
    }

    /// Remove an attribute, as the platform would.
    pub fn remove_attr(&mut self, id: ElementId, name: &str) {
        self.document.remove_attribute(id, name);
    }

    /// Set a typed property.
    pub fn set_prop(
        &mut self,
        id: ElementId,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), DocumentError> {
        self.document.set_property(id, name, value)
    }

    /// Disconnect an element.
    pub fn disconnect(&mut self, id: ElementId) {
        self.document.disconnect(id);
    }

    /// Flush every pending element synchronously.
    pub fn flush(&mut self) -> Result<(), RenderError> {
        self.document.flush_pending()
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// The element's rendered markup, or `""` if it has no shadow scope.
    pub fn markup(&self, id: ElementId) -> &str {
        self.document.markup(id).unwrap_or("")
    }

    /// A computed custom-property value on the element.
    pub fn style_var(&self, id: ElementId, name: &str) -> Option<&str> {
        self.document.style_var(id, name)
    }

    /// The element's current attribute value.
    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.document.attribute(id, name)
    }

    /// The element's current typed property value.
    pub fn prop(&self, id: ElementId, name: &str) -> Option<&PropertyValue> {
        self.document.property(id, name)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harness_registers_builtins() {
        let mut harness = Harness::new();
        let badge = harness.create_connected("ui-badge").unwrap();
        assert!(harness.markup(badge).contains("badge"));
    }

    #[test]
    fn unknown_tag_surfaces_document_error() {
        let mut harness = Harness::new();
        let err = harness.create_connected("ui-missing").unwrap_err();
        assert!(matches!(err, HarnessError::Document(_)));
    }

    #[test]
    fn attribute_drives_render() {
        let mut harness = Harness::new();
        let badge = harness.create_connected("ui-badge").unwrap();

        harness.set_attr(badge, "label", "beta");
        harness.flush().unwrap();
        assert!(harness.markup(badge).contains("beta"));
        assert_eq!(harness.attr(badge, "label"), Some("beta"));
    }

    #[test]
    fn style_var_inspection() {
        let mut harness = Harness::new();
        let divider = harness.create_connected("ui-divider").unwrap();

        harness.set_attr(divider, "line-color", "red-600");
        harness.flush().unwrap();
        assert_eq!(
            harness.style_var(divider, "--divider-color"),
            Some("var(--ui-red-600)")
        );
    }
}
