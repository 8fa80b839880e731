//! Disclosure controller: state machine plus scoped dismissal listeners.
//!
//! ARCHITECTURE
//! ============
//! The controller owns the current `DisclosureState` and, while open, a pair
//! of document-level subscriptions (pointer-down, key-down). Subscriptions are
//! RAII handles: dropping one releases its listener. Entering `Closed` drops
//! the pair, and dropping the controller drops whatever it still holds, so no
//! exit path can leave a listener attached.
//!
//! The listener backend is a `DismissSource`. In the browser it is the DOM
//! document (`util::document_listeners`); on the server and in tests it is an
//! inert or recording source.

#[cfg(test)]
#[path = "disclosure_controller_test.rs"]
mod disclosure_controller_test;

use super::disclosure::{DisclosureEvent, DisclosureState};

/// Document-level event kinds the controller listens to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    KeyDown,
}

impl ListenerKind {
    /// DOM event type name.
    #[must_use]
    pub fn event_type(self) -> &'static str {
        match self {
            Self::PointerDown => "pointerdown",
            Self::KeyDown => "keydown",
        }
    }
}

/// Backend that can attach a document-level dismissal listener.
///
/// The returned subscription must release the listener when dropped.
pub trait DismissSource {
    type Subscription;

    fn subscribe(&self, kind: ListenerKind) -> Self::Subscription;
}

/// Source for environments without a document (SSR). Subscriptions are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertSource;

impl DismissSource for InertSource {
    type Subscription = ();

    fn subscribe(&self, _kind: ListenerKind) -> Self::Subscription {}
}

/// Listener pair held for exactly the lifetime of the `Open` state.
struct DismissListeners<S: DismissSource> {
    _pointer_down: S::Subscription,
    _key_down: S::Subscription,
}

/// Owns the disclosure state and its dismissal listeners.
pub struct DisclosureController<S: DismissSource> {
    state: DisclosureState,
    source: S,
    listeners: Option<DismissListeners<S>>,
}

impl<S: DismissSource> DisclosureController<S> {
    /// Create a closed controller. No listeners are attached.
    pub fn new(source: S) -> Self {
        Self { state: DisclosureState::Closed, source, listeners: None }
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Apply `event` and reconcile listeners with the resulting state.
    ///
    /// Listener registration for an open transition completes before this
    /// returns, and release on close completes before any later open.
    pub fn dispatch(&mut self, event: DisclosureEvent) -> DisclosureState {
        let next = self.state.transition(event);
        if next != self.state {
            self.state = next;
            self.sync_listeners();
        }
        self.state
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) -> DisclosureState {
        self.dispatch(DisclosureEvent::TriggerActivated)
    }

    /// Force the panel closed. No-op when already closed.
    pub fn close(&mut self) -> DisclosureState {
        self.dispatch(DisclosureEvent::NavLinkActivated)
    }

    fn sync_listeners(&mut self) {
        match (self.state.is_open(), self.listeners.is_some()) {
            (true, false) => {
                self.listeners = Some(DismissListeners {
                    _pointer_down: self.source.subscribe(ListenerKind::PointerDown),
                    _key_down: self.source.subscribe(ListenerKind::KeyDown),
                });
            }
            (false, true) => self.listeners = None,
            _ => {}
        }
    }
}
