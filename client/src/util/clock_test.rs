use super::*;

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2025);
}

#[test]
fn copyright_line_formats_year_and_owner() {
    assert_eq!(copyright_line(2026, "Sergio Padilla"), "© 2026 Sergio Padilla. All rights reserved.");
}
