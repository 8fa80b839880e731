use super::*;

use leptos::reactive::owner::Owner;

// =============================================================
// Panel class
// =============================================================

#[test]
fn closed_panel_has_base_class_only() {
    assert_eq!(panel_class(DisclosureState::Closed), "mobile-nav");
}

#[test]
fn open_panel_adds_open_modifier() {
    assert_eq!(panel_class(DisclosureState::Open), "mobile-nav mobile-nav--open");
}

#[test]
fn panel_class_and_aria_agree_for_every_state() {
    for state in [DisclosureState::Closed, DisclosureState::Open] {
        let visible = panel_class(state).contains("mobile-nav--open");
        assert_eq!(visible, state.aria_expanded() == "true");
    }
}

// =============================================================
// Disclosure handle
// =============================================================

fn with_disclosure(check: impl FnOnce(Disclosure)) {
    Owner::new().with(|| check(Disclosure::new(NodeRef::new(), NodeRef::new())));
}

fn assert_mirrored(disclosure: Disclosure, expected: DisclosureState) {
    let state = disclosure.state.get_untracked();
    assert_eq!(state, expected);
    assert_eq!(state.aria_expanded(), expected.aria_expanded());
}

#[test]
fn handle_starts_closed() {
    with_disclosure(|d| assert_mirrored(d, DisclosureState::Closed));
}

#[test]
fn handle_mirrors_trigger_and_dismissals() {
    with_disclosure(|d| {
        d.dispatch(DisclosureEvent::TriggerActivated);
        assert_mirrored(d, DisclosureState::Open);
        assert_eq!(d.state.get_untracked().aria_expanded(), "true");

        d.dispatch(DisclosureEvent::NavLinkActivated);
        assert_mirrored(d, DisclosureState::Closed);

        d.dispatch(DisclosureEvent::TriggerActivated);
        d.dispatch(DisclosureEvent::PointerDownOutside);
        assert_mirrored(d, DisclosureState::Closed);
    });
}

#[test]
fn handle_stays_open_on_inside_pointer_down() {
    with_disclosure(|d| {
        d.dispatch(DisclosureEvent::TriggerActivated);
        d.dispatch(DisclosureEvent::PointerDownInside);
        assert_mirrored(d, DisclosureState::Open);
    });
}

#[test]
fn handle_closes_for_each_nav_link() {
    with_disclosure(|d| {
        for link in NAV_LINKS {
            d.dispatch(DisclosureEvent::TriggerActivated);
            assert_mirrored(d, DisclosureState::Open);
            d.dispatch(DisclosureEvent::NavLinkActivated);
            assert_eq!(d.state.get_untracked(), DisclosureState::Closed, "{} link left the panel open", link.label);
        }
    });
}

#[test]
fn teardown_while_open_resets_to_closed() {
    with_disclosure(|d| {
        d.dispatch(DisclosureEvent::TriggerActivated);
        d.teardown();
        assert_mirrored(d, DisclosureState::Closed);
        assert!(d.controller.with_value(Option::is_none));
    });
}

#[test]
fn dispatch_after_teardown_is_ignored() {
    with_disclosure(|d| {
        d.teardown();
        d.dispatch(DisclosureEvent::TriggerActivated);
        assert_mirrored(d, DisclosureState::Closed);
        d.dispatch(DisclosureEvent::EscapePressed);
        assert_mirrored(d, DisclosureState::Closed);
    });
}
