//! # veneer-ui
//!
//! A declarative UI component runtime: dozens of widgets can share this one
//! small core. Each widget declares a typed property table, a `styles()`
//! string, and a `render()` markup function; the runtime supplies
//! property/attribute reflection, coalesced re-rendering, lifecycle wiring,
//! and a pure design-token resolver.
//!
//! ## Core Systems
//!
//! - **[`token`]** — Token resolver: semantic colors, sizes, and elevations → CSS values
//! - **[`property`]** — Property/attribute bridge: typed descriptors, kebab-case
//!   reflection, presence-style booleans, lossless coercion
//! - **[`component`]** — The `Component` trait every widget implements
//! - **[`registry`]** — Process-wide tag → class registry (insert-or-no-op)
//! - **[`schedule`]** — Update scheduler: coalesced, FIFO, cancellable flushes
//! - **[`dom`]** — Host document: element arena, lifecycle phases, shadow scopes,
//!   and the flush pipeline
//! - **[`render`]** — Markup support: text and attribute escaping
//! - **[`widgets`]** — Built-in widgets: Badge, Card, Divider, Avatar, ProgressBar
//! - **[`testing`]** — Headless harness and snapshot helpers
//!
//! ## A flush, end to end
//!
//! A property or attribute write marks the instance dirty; bursts of writes
//! within one turn coalesce into a single pending flush. At the next
//! cooperative boundary (`Document::settle`), or synchronously via
//! `Document::flush_pending`, the runtime calls the widget's `render()`,
//! replaces the shadow markup, applies `style_vars()`, and marks the
//! instance clean.

// Foundation
pub mod token;

// Property bridge and widget contract
pub mod component;
pub mod property;

// Class registry and scheduling
pub mod registry;
pub mod schedule;

// Host document
pub mod dom;

// Rendering support
pub mod render;

// Built-in widgets
pub mod widgets;

// Testing
pub mod testing;
