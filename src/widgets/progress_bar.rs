//! Progress bar widget: determinate and indeterminate progress.

use std::any::Any;

use crate::component::{Component, Props, RenderError};
use crate::property::{PropertyDescriptor, PropertyTable};
use crate::render::escape::escape;
use crate::token::resolve_color;

/// A progress bar.
///
/// `value` is a percentage, clamped to 0-100 at render time so garbage
/// never reaches the markup. `indeterminate` switches to the animated
/// style and drops the `aria-valuenow` announcement.
#[derive(Debug, Default)]
pub struct ProgressBar;

impl ProgressBar {
    /// Create a new progress bar.
    pub fn new() -> Self {
        Self
    }
}

impl Component for ProgressBar {
    fn component_type(&self) -> &str {
        "ProgressBar"
    }

    fn property_table(&self) -> PropertyTable {
        PropertyTable::new(vec![
            PropertyDescriptor::number("value", 0.0),
            PropertyDescriptor::string("label", ""),
            PropertyDescriptor::string("trackColor", ""),
            PropertyDescriptor::flag("indeterminate"),
        ])
    }

    fn styles(&self) -> &str {
        ":host { display: block; }\n\
         .progress { background: var(--progress-track, var(--ui-gray-200)); \
         border-radius: 999px; height: 8px; overflow: hidden; }\n\
         .progress-fill { background: var(--ui-blue-600); height: 100%; \
         width: var(--progress-fill-width, 0%); }\n\
         .progress-indeterminate .progress-fill { animation: slide 1.5s infinite; width: 40%; }"
    }

    fn render(&self, props: &Props) -> Result<String, RenderError> {
        let value = props.number("value").clamp(0.0, 100.0);
        let label = escape(props.string("label"));
        if props.flag("indeterminate") {
            return Ok(format!(
                "<div class=\"progress progress-indeterminate\" part=\"base\" role=\"progressbar\" aria-label=\"{label}\"><div class=\"progress-fill\" part=\"fill\"></div></div>"
            ));
        }
        Ok(format!(
            "<div class=\"progress\" part=\"base\" role=\"progressbar\" aria-label=\"{label}\" aria-valuenow=\"{value}\" aria-valuemin=\"0\" aria-valuemax=\"100\"><div class=\"progress-fill\" part=\"fill\"></div></div>"
        ))
    }

    fn style_vars(&self, props: &Props) -> Vec<(String, String)> {
        let value = props.number("value").clamp(0.0, 100.0);
        let mut vars = vec![("--progress-fill-width".into(), format!("{value}%"))];
        if let Some(color) = resolve_color(props.string("trackColor")) {
            vars.push(("--progress-track".into(), color));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyValue;

    fn default_props() -> Props {
        Props::from_table(&ProgressBar::new().property_table())
    }

    #[test]
    fn track_color_attribute_is_kebab() {
        let table = ProgressBar::new().property_table();
        assert_eq!(table.get("trackColor").unwrap().attribute, "track-color");
    }

    #[test]
    fn render_announces_value() {
        let mut props = default_props();
        props.set("value", PropertyValue::Num(42.0));
        let markup = ProgressBar::new().render(&props).unwrap();
        assert!(markup.contains("aria-valuenow=\"42\""));
    }

    #[test]
    fn render_clamps_out_of_range() {
        let mut props = default_props();
        props.set("value", PropertyValue::Num(250.0));
        let markup = ProgressBar::new().render(&props).unwrap();
        assert!(markup.contains("aria-valuenow=\"100\""));

        props.set("value", PropertyValue::Num(-10.0));
        let markup = ProgressBar::new().render(&props).unwrap();
        assert!(markup.contains("aria-valuenow=\"0\""));
    }

    #[test]
    fn indeterminate_drops_valuenow() {
        let mut props = default_props();
        props.set("indeterminate", PropertyValue::Flag(true));
        let markup = ProgressBar::new().render(&props).unwrap();
        assert!(markup.contains("progress-indeterminate"));
        assert!(!markup.contains("aria-valuenow"));
    }

    #[test]
    fn fill_width_var_tracks_value() {
        let mut props = default_props();
        props.set("value", PropertyValue::Num(67.5));
        let vars = ProgressBar::new().style_vars(&props);
        assert!(vars.contains(&("--progress-fill-width".into(), "67.5%".into())));
    }

    #[test]
    fn label_is_escaped() {
        let mut props = default_props();
        props.set("label", PropertyValue::Str("<x>".into()));
        let markup = ProgressBar::new().render(&props).unwrap();
        assert!(markup.contains("aria-label=\"&lt;x&gt;\""));
    }
}
