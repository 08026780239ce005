//! Process-wide component class registry, keyed by tag name.
//!
//! Classes are defined once at startup and the registry is read-only
//! afterwards. Defining a tag that is already taken is a no-op: the first
//! registration stays active. The per-class property table and `styles()`
//! output are computed once here, from a prototype instance, and shared by
//! every element of the class.
//!
//! Like the reactive runtimes this design follows, the registry lives in a
//! thread-local instance behind free functions; the single-threaded
//! cooperative model never shares it across threads.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::component::Component;
use crate::property::PropertyTable;

// ---------------------------------------------------------------------------
// ClassEntry
// ---------------------------------------------------------------------------

/// A registered component class: its constructor and per-class caches.
#[derive(Clone)]
pub struct ClassEntry {
    /// The tag name this class is registered under.
    pub tag: String,
    /// Declared property table, computed once at definition.
    pub table: Rc<PropertyTable>,
    /// Cached `styles()` output, computed once at definition.
    pub styles: Rc<str>,
    constructor: Rc<dyn Fn() -> Box<dyn Component>>,
}

impl ClassEntry {
    /// Instantiate a fresh widget of this class.
    pub fn construct(&self) -> Box<dyn Component> {
        (self.constructor)()
    }
}

impl fmt::Debug for ClassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassEntry")
            .field("tag", &self.tag)
            .field("properties", &self.table.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Insert-or-no-op map from tag name to component class.
#[derive(Default)]
pub struct Registry {
    classes: HashMap<String, ClassEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class under a tag name.
    ///
    /// Returns `true` if the tag was newly defined. A duplicate tag is a
    /// no-op returning `false`; the first registration remains active.
    pub fn define(
        &mut self,
        tag: &str,
        constructor: impl Fn() -> Box<dyn Component> + 'static,
    ) -> bool {
        if self.classes.contains_key(tag) {
            log::debug!("tag <{tag}> already defined, keeping the first registration");
            return false;
        }
        // Build the per-class caches from a prototype instance: the table
        // and stylesheet are computed exactly once per class.
        let prototype = constructor();
        let table = Rc::new(prototype.property_table());
        let styles: Rc<str> = Rc::from(prototype.styles());
        log::debug!(
            "defined <{tag}> ({}) with {} properties",
            prototype.component_type(),
            table.len()
        );
        self.classes.insert(
            tag.to_owned(),
            ClassEntry {
                tag: tag.to_owned(),
                table,
                styles,
                constructor: Rc::new(constructor),
            },
        );
        true
    }

    /// Look up a class by tag name.
    pub fn get(&self, tag: &str) -> Option<&ClassEntry> {
        self.classes.get(tag)
    }

    /// Whether a tag has been defined.
    pub fn is_defined(&self, tag: &str) -> bool {
        self.classes.contains_key(tag)
    }

    /// Number of defined classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no classes are defined.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("classes", &self.classes.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Thread-local instance
// ---------------------------------------------------------------------------

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::new());
}

/// Register a class in the process-wide registry. No-op on duplicate tags.
pub fn define(tag: &str, constructor: impl Fn() -> Box<dyn Component> + 'static) -> bool {
    REGISTRY.with(|r| r.borrow_mut().define(tag, constructor))
}

/// Look up a class in the process-wide registry.
pub fn lookup(tag: &str) -> Option<ClassEntry> {
    REGISTRY.with(|r| r.borrow().get(tag).cloned())
}

/// Whether a tag is defined in the process-wide registry.
pub fn is_defined(tag: &str) -> bool {
    REGISTRY.with(|r| r.borrow().is_defined(tag))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Props, RenderError};
    use crate::property::PropertyDescriptor;
    use std::any::Any;
    use std::cell::Cell;

    thread_local! {
        static STYLES_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    #[derive(Debug)]
    struct Pin {
        label: &'static str,
    }

    impl Component for Pin {
        fn component_type(&self) -> &str {
            "Pin"
        }

        fn property_table(&self) -> PropertyTable {
            PropertyTable::new(vec![PropertyDescriptor::string("label", "pin")])
        }

        fn styles(&self) -> &str {
            STYLES_CALLS.with(|c| c.set(c.get() + 1));
            ":host { display: inline; }"
        }

        fn render(&self, _props: &Props) -> Result<String, RenderError> {
            Ok(format!("<i>{}</i>", self.label))
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn define_and_lookup() {
        let mut registry = Registry::new();
        assert!(registry.define("ui-pin", || Box::new(Pin { label: "a" })));
        assert!(registry.is_defined("ui-pin"));
        assert_eq!(registry.len(), 1);

        let entry = registry.get("ui-pin").unwrap();
        assert_eq!(entry.tag, "ui-pin");
        assert_eq!(entry.table.len(), 1);
        assert_eq!(&*entry.styles, ":host { display: inline; }");
    }

    #[test]
    fn duplicate_define_is_noop() {
        let mut registry = Registry::new();
        assert!(registry.define("ui-pin", || Box::new(Pin { label: "first" })));
        assert!(!registry.define("ui-pin", || Box::new(Pin { label: "second" })));
        assert_eq!(registry.len(), 1);

        // The first registration's class remains active.
        let widget = registry.get("ui-pin").unwrap().construct();
        let markup = widget.render(&Props::default()).unwrap();
        assert_eq!(markup, "<i>first</i>");
    }

    #[test]
    fn styles_computed_once_per_class() {
        STYLES_CALLS.with(|c| c.set(0));
        let mut registry = Registry::new();
        registry.define("ui-pin-styles", || Box::new(Pin { label: "x" }));
        assert_eq!(STYLES_CALLS.with(Cell::get), 1);

        // Constructing instances does not re-run styles().
        let _a = registry.get("ui-pin-styles").unwrap().construct();
        let _b = registry.get("ui-pin-styles").unwrap().construct();
        assert_eq!(STYLES_CALLS.with(Cell::get), 1);
    }

    #[test]
    fn lookup_unknown_tag() {
        let registry = Registry::new();
        assert!(registry.get("ui-nope").is_none());
        assert!(!registry.is_defined("ui-nope"));
        assert!(registry.is_empty());
    }

    #[test]
    fn thread_local_registry_roundtrip() {
        assert!(define("ui-pin-global", || Box::new(Pin { label: "g" })));
        assert!(is_defined("ui-pin-global"));
        assert!(!define("ui-pin-global", || Box::new(Pin { label: "h" })));

        let entry = lookup("ui-pin-global").unwrap();
        let widget = entry.construct();
        assert_eq!(widget.render(&Props::default()).unwrap(), "<i>g</i>");
    }
}
