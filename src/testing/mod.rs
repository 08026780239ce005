//! Headless testing framework: Harness, snapshot helpers.
//!
//! Use the [`Harness`] to programmatically drive a [`Document`](crate::dom::Document)
//! in tests. Use [`render_to_string`] and [`render_with_props`] to capture a
//! single widget's markup for snapshot-style assertions.

pub mod harness;
pub mod snapshot;

pub use harness::{Harness, HarnessError};
pub use snapshot::{render_to_string, render_with_props};
