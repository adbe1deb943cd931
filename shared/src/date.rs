//! Calendar date helpers.
//!
//! The browser is the only clock this client has, so "today" comes from
//! `js_sys::Date`. Everything else stays in `chrono::NaiveDate`, which
//! matches both the wire format and `<input type="date">`.

use chrono::{Datelike, NaiveDate};

/// Current date in the browser's local timezone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    // get_month() is zero-based
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Parse a `YYYY-MM-DD` string as produced by `<input type="date">`.
pub fn parse_input(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Month key (`YYYY-MM`) as produced by `<input type="month">`; used by the
/// report filters.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
