//! Markup rendering support.

pub mod escape;

pub use escape::{escape, escape_attribute};
