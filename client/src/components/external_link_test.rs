use super::*;

#[test]
fn every_link_style_keeps_the_focus_ring() {
    for style in [LinkStyle::Pill, LinkStyle::Primary, LinkStyle::Secondary] {
        assert!(style.class().contains("focus-ring"), "{style:?}");
    }
}

#[test]
fn project_actions_share_small_button_sizing() {
    assert!(LinkStyle::Primary.class().contains("button--small"));
    assert!(LinkStyle::Secondary.class().contains("button--small"));
    assert!(!LinkStyle::Pill.class().contains("button"));
}
