//! Document-level dismissal listeners for the mobile navigation panel.
//!
//! Each subscription attaches one listener to `document` and removes it when
//! dropped. The pointer-down handler resolves the panel and trigger through
//! live `NodeRef`s at event time, since both are rendered by the component
//! rather than known at subscription time.
//!
//! TRADE-OFFS
//! ==========
//! Listener callbacks can drop their own subscription (closing from inside a
//! dismissal handler). wasm-bindgen defers the closure's destructor until the
//! running invocation returns, so this is sound.

#[cfg(test)]
#[path = "document_listeners_test.rs"]
mod document_listeners_test;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

use crate::state::disclosure::DisclosureEvent;
#[cfg(feature = "hydrate")]
use crate::state::disclosure_controller::{DismissSource, ListenerKind};

/// Map a `KeyboardEvent.key` value to a disclosure event.
pub fn classify_key(key: &str) -> Option<DisclosureEvent> {
    (key == "Escape").then_some(DisclosureEvent::EscapePressed)
}

/// Map a pointer-down hit test to a disclosure event.
pub fn classify_pointer(inside_panel: bool, inside_trigger: bool) -> DisclosureEvent {
    if inside_panel || inside_trigger {
        DisclosureEvent::PointerDownInside
    } else {
        DisclosureEvent::PointerDownOutside
    }
}

/// `DismissSource` backed by the browser document.
#[cfg(feature = "hydrate")]
pub struct DocumentSource {
    panel: NodeRef<leptos::html::Nav>,
    trigger: NodeRef<leptos::html::Button>,
    sink: Rc<dyn Fn(DisclosureEvent)>,
}

#[cfg(feature = "hydrate")]
impl DocumentSource {
    pub fn new(
        panel: NodeRef<leptos::html::Nav>,
        trigger: NodeRef<leptos::html::Button>,
        sink: impl Fn(DisclosureEvent) + 'static,
    ) -> Self {
        Self { panel, trigger, sink: Rc::new(sink) }
    }

    fn handler(&self, kind: ListenerKind) -> Closure<dyn FnMut(web_sys::Event)> {
        let sink = Rc::clone(&self.sink);
        match kind {
            ListenerKind::PointerDown => {
                let panel = self.panel;
                let trigger = self.trigger;
                Closure::new(move |ev: web_sys::Event| {
                    let (Some(panel), Some(trigger)) = (panel.get_untracked(), trigger.get_untracked()) else {
                        return;
                    };
                    let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                    let target = target.as_ref();
                    sink(classify_pointer(panel.contains(target), trigger.contains(target)));
                })
            }
            ListenerKind::KeyDown => Closure::new(move |ev: web_sys::Event| {
                let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>().map(web_sys::KeyboardEvent::key) else {
                    return;
                };
                if let Some(event) = classify_key(&key) {
                    sink(event);
                }
            }),
        }
    }
}

/// One attached document listener. Dropping it detaches the listener.
#[cfg(feature = "hydrate")]
pub struct DocumentListener {
    document: web_sys::Document,
    kind: ListenerKind,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(self.kind.event_type(), self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(feature = "hydrate")]
impl DismissSource for DocumentSource {
    type Subscription = Option<DocumentListener>;

    fn subscribe(&self, kind: ListenerKind) -> Self::Subscription {
        let document = web_sys::window().and_then(|w| w.document())?;
        let callback = self.handler(kind);
        if let Err(e) = document.add_event_listener_with_callback(kind.event_type(), callback.as_ref().unchecked_ref()) {
            log::warn!("failed to attach {} listener: {e:?}", kind.event_type());
            return None;
        }
        Some(DocumentListener { document, kind, callback })
    }
}
