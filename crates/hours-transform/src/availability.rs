//! Availability text parsing.
//!
//! A description is first checked for markers of non-schedule availability
//! ("by appointment", "24/7", "24 hours"); a hit keeps the whole text as a
//! note. Otherwise the day range and the first time range are extracted by
//! two independent scans over the same text.
//!
//! The marker check is case-insensitive while weekday abbreviations must be
//! capitalized exactly (`Mon`, not `mon`).

use std::sync::LazyLock;

use regex::Regex;

use hours_model::{
    DAY_ABBREVIATIONS, DayRange, ParsedAvailability, TimeRange, day_from_abbreviation,
};

use crate::normalization::normalize_time;

/// Lowercase substrings that route a description to the notes column.
pub const SPECIAL_CASE_MARKERS: [&str; 3] = ["by appointment", "24/7", "24 hours"];

/// Any of the exact-case weekday abbreviations.
static DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&DAY_ABBREVIATIONS.join("|")).expect("Invalid weekday regex")
});

/// `<token>-<token>` where a token is 1-2 hour digits, optional `:MM`, optional am/pm.
static TIME_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}(?::\d{2})?(?i:am|pm)?)-(\d{1,2}(?::\d{2})?(?i:am|pm)?)")
        .expect("Invalid time range regex")
});

/// Parse one availability description.
pub fn parse_availability(raw: &str) -> ParsedAvailability {
    if is_special_case(raw) {
        return ParsedAvailability::note(raw);
    }
    ParsedAvailability::Schedule {
        days: extract_days(raw),
        hours: extract_time_range(raw),
    }
}

/// True when the text signals always-open or appointment-only availability.
pub fn is_special_case(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    SPECIAL_CASE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// First and last weekday abbreviation, in order of appearance.
pub fn extract_days(raw: &str) -> Option<DayRange> {
    let mut days = DAY_PATTERN
        .find_iter(raw)
        .filter_map(|m| day_from_abbreviation(m.as_str()));
    let first = days.next()?;
    let last = days.last().unwrap_or(first);
    Some(DayRange::new(first, last))
}

/// The first `<token>-<token>` range, each endpoint normalized on its own.
pub fn extract_time_range(raw: &str) -> Option<TimeRange> {
    let caps = TIME_RANGE_PATTERN.captures(raw)?;
    Some(TimeRange::new(
        normalize_time(&caps[1]),
        normalize_time(&caps[2]),
    ))
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    #[test]
    fn markers_are_case_insensitive() {
        assert!(is_special_case("BY APPOINTMENT"));
        assert!(is_special_case("Open 24 Hours"));
        assert!(is_special_case("24/7 hotline"));
        assert!(!is_special_case("Mon-Fri 9am-5pm"));
        assert!(!is_special_case("24hours"));
    }

    #[test]
    fn every_abbreviation_is_detected() {
        for abbrev in DAY_ABBREVIATIONS {
            let day = day_from_abbreviation(abbrev).unwrap();
            assert_eq!(extract_days(abbrev), Some(DayRange::single(day)));
            assert_eq!(extract_days(&abbrev.to_lowercase()), None);
        }
    }

    #[test]
    fn days_keep_first_and_last() {
        assert_eq!(
            extract_days("Mon, Wed and Fri"),
            Some(DayRange::new(Weekday::Mon, Weekday::Fri))
        );
        assert_eq!(extract_days("Sat Sat"), Some(DayRange::single(Weekday::Sat)));
        assert_eq!(extract_days("Monday"), Some(DayRange::single(Weekday::Mon)));
        assert_eq!(extract_days("mon-fri"), None);
    }

    #[test]
    fn only_first_time_range_counts() {
        let range = extract_time_range("9am-12pm, 1pm-5pm").unwrap();
        assert_eq!(range.from.to_string(), "09:00");
        assert_eq!(range.to.to_string(), "12:00");
    }

    #[test]
    fn spaced_ranges_do_not_match() {
        assert_eq!(extract_time_range("9am - 5pm"), None);
        assert_eq!(extract_time_range("am-pm"), None);
    }
}
