//! Sticky site header: brand link, desktop nav, and the mobile disclosure menu.
//!
//! ARCHITECTURE
//! ============
//! `DisclosureController` owns the open/closed state and the document-level
//! dismissal listeners. This component keeps it in a local `StoredValue`,
//! mirrors its state into a signal for rendering, and drops it on cleanup so
//! an unmount while open releases both listeners.

use leptos::prelude::*;

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use crate::content::{NAV_LINKS, OWNER_DOMAIN_SUFFIX, OWNER_NAME, TOP_ANCHOR};
use crate::state::disclosure::{DisclosureEvent, DisclosureState, PANEL_ID};
use crate::state::disclosure_controller::DisclosureController;

#[cfg(feature = "hydrate")]
type Controller = DisclosureController<crate::util::document_listeners::DocumentSource>;
#[cfg(not(feature = "hydrate"))]
type Controller = DisclosureController<crate::state::disclosure_controller::InertSource>;

/// Reactive handle to the header's disclosure controller.
#[derive(Clone, Copy)]
struct Disclosure {
    state: RwSignal<DisclosureState>,
    controller: StoredValue<Option<Controller>, LocalStorage>,
}

impl Disclosure {
    fn new(panel: NodeRef<leptos::html::Nav>, trigger: NodeRef<leptos::html::Button>) -> Self {
        let disclosure = Self {
            state: RwSignal::new(DisclosureState::Closed),
            controller: StoredValue::new_local(None),
        };
        let controller = Controller::new(disclosure.source(panel, trigger));
        disclosure.controller.set_value(Some(controller));
        disclosure
    }

    #[cfg(feature = "hydrate")]
    fn source(
        self,
        panel: NodeRef<leptos::html::Nav>,
        trigger: NodeRef<leptos::html::Button>,
    ) -> crate::util::document_listeners::DocumentSource {
        crate::util::document_listeners::DocumentSource::new(panel, trigger, move |event| self.dispatch(event))
    }

    #[cfg(not(feature = "hydrate"))]
    fn source(
        self,
        _panel: NodeRef<leptos::html::Nav>,
        _trigger: NodeRef<leptos::html::Button>,
    ) -> crate::state::disclosure_controller::InertSource {
        crate::state::disclosure_controller::InertSource
    }

    fn dispatch(self, event: DisclosureEvent) {
        let mut next = None;
        self.controller.update_value(|controller| {
            if let Some(controller) = controller.as_mut() {
                next = Some(controller.dispatch(event));
            }
        });
        let Some(next) = next else {
            return;
        };
        if self.state.get_untracked() != next {
            #[cfg(feature = "hydrate")]
            log::debug!("mobile nav {event:?} -> {next:?}");
            self.state.set(next);
        }
    }

    /// Drop the controller, releasing any attached listeners.
    ///
    /// The state mirror is reset to `Closed` to match the released listeners;
    /// later dispatches are ignored.
    fn teardown(self) {
        self.controller.set_value(None);
        let _ = self.state.try_set(DisclosureState::Closed);
    }
}

/// Panel classes; visibility and `aria-expanded` both derive from one state value.
fn panel_class(state: DisclosureState) -> &'static str {
    if state.is_open() { "mobile-nav mobile-nav--open" } else { "mobile-nav" }
}

/// Header with brand, desktop navigation, and collapsible mobile navigation.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Nav>::new();
    let trigger_ref = NodeRef::<leptos::html::Button>::new();
    let disclosure = Disclosure::new(panel_ref, trigger_ref);
    on_cleanup(move || disclosure.teardown());

    view! {
        <header class="site-header">
            <div class="site-header__bar container">
                <a href=TOP_ANCHOR class="site-header__brand focus-ring">
                    {OWNER_NAME}
                    <span class="site-header__brand-suffix">{OWNER_DOMAIN_SUFFIX}</span>
                </a>

                <nav class="desktop-nav" aria-label="Primary">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.target_anchor class="desktop-nav__link focus-ring">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <button
                    node_ref=trigger_ref
                    type="button"
                    class="menu-button focus-ring"
                    aria-expanded=move || disclosure.state.get().aria_expanded()
                    aria-controls=PANEL_ID
                    on:click=move |_| disclosure.dispatch(DisclosureEvent::TriggerActivated)
                >
                    "Menu"
                </button>
            </div>

            <nav
                id=PANEL_ID
                node_ref=panel_ref
                class=move || panel_class(disclosure.state.get())
                aria-label="Mobile"
            >
                <div class="mobile-nav__links container">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.target_anchor
                                    class="mobile-nav__link focus-ring"
                                    on:click=move |_| disclosure.dispatch(DisclosureEvent::NavLinkActivated)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}
