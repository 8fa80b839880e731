use super::*;

const ALL_EVENTS: [DisclosureEvent; 5] = [
    DisclosureEvent::TriggerActivated,
    DisclosureEvent::PointerDownOutside,
    DisclosureEvent::PointerDownInside,
    DisclosureEvent::EscapePressed,
    DisclosureEvent::NavLinkActivated,
];

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_closed() {
    assert_eq!(DisclosureState::default(), DisclosureState::Closed);
    assert!(!DisclosureState::default().is_open());
}

// =============================================================
// Trigger
// =============================================================

#[test]
fn trigger_opens_closed_panel() {
    assert_eq!(
        DisclosureState::Closed.transition(DisclosureEvent::TriggerActivated),
        DisclosureState::Open
    );
}

#[test]
fn trigger_closes_open_panel() {
    assert_eq!(
        DisclosureState::Open.transition(DisclosureEvent::TriggerActivated),
        DisclosureState::Closed
    );
}

#[test]
fn trigger_parity_matches_activation_count() {
    let mut state = DisclosureState::Closed;
    for n in 1..=9_u32 {
        state = state.transition(DisclosureEvent::TriggerActivated);
        assert_eq!(state.is_open(), n % 2 == 1, "after {n} activations");
    }
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn outside_pointer_down_closes_open_panel() {
    assert_eq!(
        DisclosureState::Open.transition(DisclosureEvent::PointerDownOutside),
        DisclosureState::Closed
    );
}

#[test]
fn inside_pointer_down_keeps_panel_open() {
    assert_eq!(
        DisclosureState::Open.transition(DisclosureEvent::PointerDownInside),
        DisclosureState::Open
    );
}

#[test]
fn escape_closes_open_panel() {
    assert_eq!(
        DisclosureState::Open.transition(DisclosureEvent::EscapePressed),
        DisclosureState::Closed
    );
}

#[test]
fn nav_link_closes_open_panel() {
    assert_eq!(
        DisclosureState::Open.transition(DisclosureEvent::NavLinkActivated),
        DisclosureState::Closed
    );
}

#[test]
fn only_trigger_leaves_closed_state() {
    for event in ALL_EVENTS {
        let next = DisclosureState::Closed.transition(event);
        if event == DisclosureEvent::TriggerActivated {
            assert_eq!(next, DisclosureState::Open);
        } else {
            assert_eq!(next, DisclosureState::Closed, "{event:?} must be a no-op while closed");
        }
    }
}

// =============================================================
// Accessibility
// =============================================================

#[test]
fn aria_expanded_mirrors_state() {
    assert_eq!(DisclosureState::Closed.aria_expanded(), "false");
    assert_eq!(DisclosureState::Open.aria_expanded(), "true");
}

#[test]
fn panel_id_matches_anchor_target() {
    assert_eq!(PANEL_ID, "mobile-nav");
}
