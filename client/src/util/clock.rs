//! Wall-clock helpers for rendered copy.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year (UTC), used by the footer copyright line.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

/// Footer copyright line for `owner` in `year`.
pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}
