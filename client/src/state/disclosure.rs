//! Mobile navigation disclosure state machine.
//!
//! DESIGN
//! ======
//! The state machine is a pure `transition` over a two-state enum so it can
//! be exercised without a browser. Listener ownership lives one layer up in
//! `disclosure_controller`; rendering only mirrors `is_open`.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// DOM id of the mobile navigation panel, referenced by `aria-controls`.
pub const PANEL_ID: &str = "mobile-nav";

/// Visibility of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can move the disclosure between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureEvent {
    /// The "Menu" trigger button was activated.
    TriggerActivated,
    /// Pointer-down landed outside both the panel and the trigger.
    PointerDownOutside,
    /// Pointer-down landed inside the panel or on the trigger.
    PointerDownInside,
    /// The escape key was pressed.
    EscapePressed,
    /// A navigation link inside the panel was activated.
    NavLinkActivated,
}

impl DisclosureState {
    /// Compute the state that follows `event`.
    ///
    /// Total over every (state, event) pair: anything not listed in the
    /// transition table leaves the state unchanged.
    #[must_use]
    pub fn transition(self, event: DisclosureEvent) -> Self {
        match (self, event) {
            (Self::Closed, DisclosureEvent::TriggerActivated) => Self::Open,
            (
                Self::Open,
                DisclosureEvent::TriggerActivated
                | DisclosureEvent::PointerDownOutside
                | DisclosureEvent::EscapePressed
                | DisclosureEvent::NavLinkActivated,
            ) => Self::Closed,
            (state, _) => state,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value for the trigger's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}
