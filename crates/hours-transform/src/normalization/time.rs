//! 12-hour clock token normalization.
//!
//! Supported token shapes (meridiem is case-insensitive, no inner spaces):
//! - `H:MMam` / `HH:MMpm` (e.g. "8:30pm", "11:05PM")
//! - `Ham` / `HHpm` (e.g. "8am", "11PM")
//!
//! Hours run 1-12 and minutes 00-59. Anything else is kept verbatim.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use hours_model::NormalizedTime;

static WITH_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2}):([0-9]{2})(am|pm)$").expect("Invalid 12-hour time regex")
});

static HOUR_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2})(am|pm)$").expect("Invalid 12-hour hour regex")
});

/// Normalize a clock-time token to 24-hour form.
///
/// Never fails: a token matching neither shape comes back as
/// [`NormalizedTime::Unparsed`] holding the input unchanged.
pub fn normalize_time(token: &str) -> NormalizedTime {
    match parse_12_hour(token) {
        Some(time) => NormalizedTime::Converted(time),
        None => NormalizedTime::Unparsed(token.to_string()),
    }
}

/// Parse a 12-hour token, trying the shape with minutes first.
pub fn parse_12_hour(token: &str) -> Option<NaiveTime> {
    let token = token.trim();
    parse_with_minutes(token).or_else(|| parse_hour_only(token))
}

/// Render a time in 12-hour form without a leading zero, e.g. `8:30PM`.
pub fn to_12_hour(time: NaiveTime) -> String {
    time.format("%-I:%M%p").to_string()
}

fn parse_with_minutes(token: &str) -> Option<NaiveTime> {
    let caps = WITH_MINUTES.captures(token)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    from_12_hour(hour, minute, &caps[3])
}

fn parse_hour_only(token: &str) -> Option<NaiveTime> {
    let caps = HOUR_ONLY.captures(token)?;
    let hour = caps[1].parse().ok()?;
    from_12_hour(hour, 0, &caps[2])
}

fn from_12_hour(hour: u32, minute: u32, meridiem: &str) -> Option<NaiveTime> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let is_pm = meridiem.eq_ignore_ascii_case("pm");
    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}
