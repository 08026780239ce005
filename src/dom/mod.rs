//! Host document: slotmap-backed element arena with lifecycle control.

pub mod document;
pub mod element;
pub mod lifecycle;

pub use document::{Document, DocumentConfig, DocumentError};
pub use element::{ElementData, ElementId, ShadowScope};
pub use lifecycle::Phase;
