//! The host document: element arena, lifecycle controller, render pipeline.
//!
//! [`Document`] owns every element instance and wires the platform events
//! (connect, disconnect, attribute changes) to the property bridge and the
//! update scheduler. Flushing is where the render pipeline runs: the widget's
//! `render()` replaces the shadow markup, `style_vars()` sets computed
//! custom properties, `updated()` closes the pass.

use slotmap::SlotMap;

use crate::component::RenderError;
use crate::dom::element::{ElementData, ElementId, ShadowScope};
use crate::dom::lifecycle::Phase;
use crate::property::{coerce, encode, PropertyKind, PropertyValue};
use crate::registry;
use crate::schedule::Scheduler;

// ---------------------------------------------------------------------------
// DocumentError
// ---------------------------------------------------------------------------

/// Errors from the document's typed API.
///
/// These are programmer errors surfaced as values: the untyped attribute
/// wire never produces them (invalid attribute data degrades silently per
/// the coercion rules).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("no class registered for tag <{0}>")]
    UnknownTag(String),
    #[error("element was removed from the document")]
    Removed,
    #[error("<{tag}> has no property named {property}")]
    UnknownProperty { tag: String, property: String },
    #[error("property {property} on <{tag}> is declared {expected:?}, got {actual:?}")]
    KindMismatch {
        tag: String,
        property: String,
        expected: PropertyKind,
        actual: PropertyKind,
    },
}

// ---------------------------------------------------------------------------
// DocumentConfig
// ---------------------------------------------------------------------------

/// Configuration for a document.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Run a synchronous flush when an element connects, so the first paint
    /// is never unstyled. On by default; tests that want to observe the
    /// pre-render state turn it off.
    pub initial_flush: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self { initial_flush: true }
    }
}

impl DocumentConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether connect runs a synchronous first flush (builder).
    pub fn with_initial_flush(mut self, initial_flush: bool) -> Self {
        self.initial_flush = initial_flush;
        self
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The host document: a slotmap arena of element instances plus the
/// update scheduler that serializes their flushes.
#[derive(Debug, Default)]
pub struct Document {
    elements: SlotMap<ElementId, ElementData>,
    scheduler: Scheduler,
    config: DocumentConfig,
}

impl Document {
    /// Create an empty document with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the given config.
    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ── construction and lifecycle ───────────────────────────────────

    /// Instantiate an element for a registered tag.
    ///
    /// The instance starts unattached, with every property at its declared
    /// default and no shadow scope.
    pub fn create_element(&mut self, tag: &str) -> Result<ElementId, DocumentError> {
        let entry =
            registry::lookup(tag).ok_or_else(|| DocumentError::UnknownTag(tag.to_owned()))?;
        let data = ElementData::new(
            entry.tag.clone(),
            entry.construct(),
            entry.table.clone(),
            entry.styles.clone(),
        );
        let id = self.elements.insert(data);
        log::trace!("created <{tag}> {id:?}");
        Ok(id)
    }

    /// Connect an element to the document.
    ///
    /// Creates the shadow scope on first connect (at most once; repeated
    /// connects reuse it), adopts the class stylesheet, runs the widget's
    /// `attached()` hook, and forces one synchronous flush so the first
    /// paint is styled. Connecting an already-connected element is a no-op.
    pub fn connect(&mut self, id: ElementId) -> Result<(), RenderError> {
        let Some(el) = self.elements.get_mut(id) else {
            return Ok(());
        };
        if el.phase.is_connected() {
            return Ok(());
        }
        if el.shadow.is_none() {
            el.shadow = Some(ShadowScope::new(el.class_styles.clone()));
        }
        el.phase = Phase::Idle;
        log::trace!("connected <{}> {id:?}", el.tag);
        let props = el.props.clone();
        el.component.attached(&props);
        if self.config.initial_flush {
            return self.flush_element(id);
        }
        Ok(())
    }

    /// Disconnect an element from the document.
    ///
    /// Cancels any pending flush (it is dropped silently: no render, no
    /// style application), runs the widget's `detached()` hook so it can
    /// release listeners and shared resources, and marks the instance
    /// disconnected. A later [`Self::connect`] revives it.
    pub fn disconnect(&mut self, id: ElementId) {
        self.scheduler.cancel(id);
        if let Some(el) = self.elements.get_mut(id) {
            if !el.phase.is_connected() {
                return;
            }
            el.component.detached();
            el.phase = Phase::Disconnected;
            log::trace!("disconnected <{}> {id:?}", el.tag);
        }
    }

    /// Disconnect and destroy an element.
    pub fn remove_element(&mut self, id: ElementId) {
        self.disconnect(id);
        self.elements.remove(id);
    }

    // ── typed property path ──────────────────────────────────────────

    /// Set a declared property to a typed value.
    ///
    /// Setting a property to its current value is a no-op: nothing is
    /// reflected and the instance is not marked dirty. Otherwise the value
    /// is stored, mirrored onto the attribute when the descriptor reflects,
    /// and a flush is scheduled.
    pub fn set_property(
        &mut self,
        id: ElementId,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), DocumentError> {
        let value = value.into();
        let Some(el) = self.elements.get_mut(id) else {
            return Err(DocumentError::Removed);
        };
        let descriptor = match el.table.get(name) {
            Some(d) => d.clone(),
            None => {
                return Err(DocumentError::UnknownProperty {
                    tag: el.tag.clone(),
                    property: name.to_owned(),
                })
            }
        };
        if descriptor.kind != value.kind() {
            return Err(DocumentError::KindMismatch {
                tag: el.tag.clone(),
                property: name.to_owned(),
                expected: descriptor.kind,
                actual: value.kind(),
            });
        }
        if el.props.get(name) == Some(&value) {
            return Ok(());
        }
        el.props.set(name, value.clone());
        if descriptor.reflect {
            // Raw writes: reflection never re-enters the attribute-changed
            // path, and an equal value performs no platform mutation.
            match encode(&value) {
                Some(text) => el.write_attribute_raw(&descriptor.attribute, &text),
                None => el.remove_attribute_raw(&descriptor.attribute),
            };
        }
        self.mark_dirty(id);
        Ok(())
    }

    /// Current typed value of a declared property.
    pub fn property(&self, id: ElementId, name: &str) -> Option<&PropertyValue> {
        self.elements.get(id)?.props.get(name)
    }

    // ── attribute wire path ──────────────────────────────────────────

    /// Set an attribute, as the platform would.
    ///
    /// Unknown attributes are stored verbatim. A declared attribute is
    /// decoded through the bridge; the property updates and a flush is
    /// scheduled only when the decoded value actually differs.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        if !el.write_attribute_raw(name, value) {
            return;
        }
        self.sync_attribute(id, name);
    }

    /// Remove an attribute, as the platform would.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        if !el.remove_attribute_raw(name) {
            return;
        }
        self.sync_attribute(id, name);
    }

    /// Decode a changed attribute into its declared property.
    fn sync_attribute(&mut self, id: ElementId, name: &str) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        let Some(descriptor) = el.table.by_attribute(name) else {
            return;
        };
        let descriptor = descriptor.clone();
        let previous = el
            .props
            .get(&descriptor.name)
            .cloned()
            .unwrap_or_else(|| descriptor.default.clone());
        let next = coerce(&descriptor, el.attribute(name), &previous);
        if next == previous {
            return;
        }
        el.props.set(&descriptor.name, next);
        self.mark_dirty(id);
    }

    /// Current attribute value, if present.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements.get(id)?.attribute(name)
    }

    /// Whether an attribute is present.
    pub fn has_attribute(&self, id: ElementId, name: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|el| el.has_attribute(name))
    }

    // ── scheduling ───────────────────────────────────────────────────

    /// Mark an element dirty, scheduling one coalesced flush.
    ///
    /// Writes to an element that is not connected update its state but
    /// schedule nothing: the connect-time flush will pick them up.
    pub fn mark_dirty(&mut self, id: ElementId) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        if !el.phase.is_connected() {
            return;
        }
        el.phase = Phase::Dirty;
        self.scheduler.mark(id);
    }

    /// Whether a flush is pending for this element.
    pub fn is_dirty(&self, id: ElementId) -> bool {
        self.scheduler.is_pending(id)
    }

    /// Number of elements awaiting a flush.
    pub fn pending_count(&self) -> usize {
        self.scheduler.len()
    }

    // ── flush pipeline ───────────────────────────────────────────────

    /// Flush every pending element, in first-dirtied order.
    ///
    /// A widget render failure propagates after that instance is marked
    /// clean; elements still queued stay queued and flush on the next call.
    pub fn flush_pending(&mut self) -> Result<(), RenderError> {
        while let Some(id) = self.scheduler.pop() {
            self.flush_element(id)?;
        }
        Ok(())
    }

    /// Synchronously flush one element now, bypassing the queue.
    ///
    /// The lifecycle escape hatch: used for the connect-time first paint
    /// and for deterministic tests. Coalescing for subsequent writes is
    /// unaffected.
    pub fn flush_now(&mut self, id: ElementId) -> Result<(), RenderError> {
        self.scheduler.cancel(id);
        self.flush_element(id)
    }

    /// Defer to the next cooperative suspension point, then flush.
    ///
    /// This is the microtask boundary: every property and attribute write
    /// issued before `settle` lands in the same single flush.
    pub async fn settle(&mut self) -> Result<(), RenderError> {
        tokio::task::yield_now().await;
        self.flush_pending()
    }

    /// One render pass for one element.
    fn flush_element(&mut self, id: ElementId) -> Result<(), RenderError> {
        let Some(el) = self.elements.get_mut(id) else {
            return Ok(());
        };
        if !el.phase.can_flush() {
            // Unmounted before the flush ran: dropped with no side effect.
            return Ok(());
        }
        el.phase = Phase::Rendering;
        let props = el.props.clone();
        let markup = match el.component.render(&props) {
            Ok(markup) => markup,
            Err(err) => {
                // Marked clean: a failing widget never re-enters the queue.
                el.phase = Phase::Idle;
                log::error!("{err}");
                return Err(err);
            }
        };
        let vars = el.component.style_vars(&props);
        if let Some(shadow) = el.shadow.as_mut() {
            shadow.markup = markup;
            shadow.set_style_vars(vars);
        }
        el.component.updated(&props);
        el.phase = Phase::Idle;
        log::trace!("flushed <{}> {id:?}", el.tag);
        Ok(())
    }

    // ── inspection ───────────────────────────────────────────────────

    /// The last rendered markup of an element's shadow scope.
    pub fn markup(&self, id: ElementId) -> Option<&str> {
        self.elements
            .get(id)?
            .shadow
            .as_ref()
            .map(|s| s.markup.as_str())
    }

    /// A computed custom-property value on an element's shadow scope.
    pub fn style_var(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements.get(id)?.shadow.as_ref()?.style_var(name)
    }

    /// The stylesheet adopted by an element's shadow scope.
    pub fn adopted_styles(&self, id: ElementId) -> Option<&str> {
        self.elements
            .get(id)?
            .shadow
            .as_ref()
            .map(|s| &*s.adopted_styles)
    }

    /// Lifecycle phase of an element.
    pub fn phase(&self, id: ElementId) -> Option<Phase> {
        self.elements.get(id).map(|el| el.phase)
    }

    /// Element data, for runtime inspection.
    pub fn get(&self, id: ElementId) -> Option<&ElementData> {
        self.elements.get(id)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
