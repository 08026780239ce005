//! Property/attribute bridge: typed descriptors and wire conversion.

pub mod convert;
pub mod descriptor;

pub use convert::{attribute_name, coerce, encode};
pub use descriptor::{PropertyDescriptor, PropertyKind, PropertyTable, PropertyValue};
