//! Snapshot rendering helpers.
//!
//! Functions for rendering a widget's markup outside a document, suitable
//! for snapshot-style assertions.

use crate::component::{Component, Props, RenderError};

/// Render a widget to markup using its declared property defaults.
///
/// # Examples
///
/// ```ignore
/// use veneer_ui::testing::render_to_string;
/// use veneer_ui::widgets::Badge;
///
/// let markup = render_to_string(&Badge::new())?;
/// assert!(markup.contains("badge"));
/// ```
pub fn render_to_string(widget: &dyn Component) -> Result<String, RenderError> {
    let props = Props::from_table(&widget.property_table());
    widget.render(&props)
}

/// Render a widget to markup with explicit property overrides.
///
/// Overrides are applied on top of the declared defaults, in order.
pub fn render_with_props(
    widget: &dyn Component,
    overrides: &[(&str, crate::property::PropertyValue)],
) -> Result<String, RenderError> {
    let mut props = Props::from_table(&widget.property_table());
    for (name, value) in overrides {
        props.set(name, value.clone());
    }
    widget.render(&props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyValue;
    use crate::widgets::{Badge, Divider};

    #[test]
    fn render_to_string_uses_defaults() {
        let markup = render_to_string(&Badge::new()).unwrap();
        assert!(markup.contains("badge-neutral"));
    }

    #[test]
    fn render_with_props_applies_overrides() {
        let markup = render_with_props(
            &Divider::new(),
            &[("vertical", PropertyValue::Flag(true))],
        )
        .unwrap();
        assert!(markup.contains("divider-vertical"));
    }
}
