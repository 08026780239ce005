//! Typed property descriptors: the per-class reflection table.
//!
//! Every component class declares its public properties once, as a
//! [`PropertyTable`] of [`PropertyDescriptor`]s. The table is built at class
//! definition time and never mutated afterwards; the document consults it to
//! coerce attribute strings, reflect property writes, and seed defaults.

use std::fmt;

use crate::property::convert::attribute_name;

// ---------------------------------------------------------------------------
// PropertyKind / PropertyValue
// ---------------------------------------------------------------------------

/// The declared type of a property. Coercion dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Passthrough text.
    String,
    /// Numeric value carried as `f64`.
    Number,
    /// Presence-style boolean.
    Boolean,
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Num(f64),
    Flag(bool),
}

impl PropertyValue {
    /// The kind tag of this value.
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Str(_) => PropertyKind::String,
            PropertyValue::Num(_) => PropertyKind::Number,
            PropertyValue::Flag(_) => PropertyKind::Boolean,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a `Num`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a `Flag`.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(s) => write!(f, "{s}"),
            PropertyValue::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            PropertyValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Str(s.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Str(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Num(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Flag(b)
    }
}

// ---------------------------------------------------------------------------
// PropertyDescriptor
// ---------------------------------------------------------------------------

/// Declaration of a single public property on a component class.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Property name as widget authors declare it (e.g. `maxWidth`).
    pub name: String,
    /// Declared kind; all coercion dispatches through it.
    pub kind: PropertyKind,
    /// Value an instance starts with, and the value an attribute removal
    /// restores for String/Number properties.
    pub default: PropertyValue,
    /// Attribute name on the wire. Defaults to the kebab-case form of `name`.
    pub attribute: String,
    /// Whether property writes are mirrored onto the attribute. The reverse
    /// direction (attribute → property) is always active.
    pub reflect: bool,
}

impl PropertyDescriptor {
    /// Declare a String property with the given default.
    pub fn string(name: &str, default: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind: PropertyKind::String,
            default: PropertyValue::Str(default.to_owned()),
            attribute: attribute_name(name),
            reflect: true,
        }
    }

    /// Declare a Number property with the given default.
    pub fn number(name: &str, default: f64) -> Self {
        Self {
            name: name.to_owned(),
            kind: PropertyKind::Number,
            default: PropertyValue::Num(default),
            attribute: attribute_name(name),
            reflect: true,
        }
    }

    /// Declare a Boolean property. Booleans default to `false` (absent).
    pub fn flag(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind: PropertyKind::Boolean,
            default: PropertyValue::Flag(false),
            attribute: attribute_name(name),
            reflect: true,
        }
    }

    /// Override the derived attribute name (builder).
    pub fn with_attribute(mut self, attribute: &str) -> Self {
        self.attribute = attribute.to_owned();
        self
    }

    /// Set whether property writes reflect onto the attribute (builder).
    pub fn reflect(mut self, reflect: bool) -> Self {
        self.reflect = reflect;
        self
    }
}

// ---------------------------------------------------------------------------
// PropertyTable
// ---------------------------------------------------------------------------

/// The immutable, per-class set of property descriptors.
///
/// Built once at class definition. Property names and attribute names must
/// each be unique within the table; a duplicate is a defect in the class
/// declaration and panics immediately rather than shadowing silently.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    descriptors: Vec<PropertyDescriptor>,
}

impl PropertyTable {
    /// Build a table from descriptors, enforcing name uniqueness.
    pub fn new(descriptors: Vec<PropertyDescriptor>) -> Self {
        for (i, d) in descriptors.iter().enumerate() {
            for other in &descriptors[i + 1..] {
                assert!(
                    d.name != other.name,
                    "duplicate property name in table: {}",
                    d.name
                );
                assert!(
                    d.attribute != other.attribute,
                    "duplicate attribute name in table: {}",
                    d.attribute
                );
            }
        }
        Self { descriptors }
    }

    /// An empty table, for components with no public properties.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a descriptor by property name.
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Look up a descriptor by attribute name.
    pub fn by_attribute(&self, attribute: &str) -> Option<&PropertyDescriptor> {
        self.descriptors.iter().find(|d| d.attribute == attribute)
    }

    /// Iterate descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.descriptors.iter()
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the table declares no properties.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
