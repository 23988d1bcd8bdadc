//! Tests for availability parsing.

use chrono::Weekday;
use hours_model::{DayRange, DerivedField, NormalizedTime, ParsedAvailability};
use hours_transform::parse_availability;

fn fields(raw: &str) -> [String; DerivedField::COUNT] {
    parse_availability(raw).derived_values().into_inner()
}

#[test]
fn weekday_range_with_times() {
    assert_eq!(fields("Mon-Fri 9am-5pm"), ["Mon", "Fri", "09:00", "17:00", ""]);
}

#[test]
fn appointment_goes_to_notes() {
    let parsed = parse_availability("Open by appointment only");
    assert_eq!(parsed, ParsedAvailability::note("Open by appointment only"));
    assert_eq!(fields("Open by appointment only"), ["", "", "", "", "Open by appointment only"]);
}

#[test]
fn always_open_goes_to_notes() {
    assert_eq!(fields("24/7"), ["", "", "", "", "24/7"]);
    assert_eq!(fields("Open 24 hours Mon-Sun"), ["", "", "", "", "Open 24 hours Mon-Sun"]);
}

#[test]
fn special_case_wins_over_schedule() {
    let parsed = parse_availability("Mon-Fri 9am-5pm, weekends By Appointment");
    assert!(parsed.is_note());
    assert!(parsed.days().is_none());
    assert!(parsed.hours().is_none());
}

#[test]
fn single_day_without_times() {
    assert_eq!(fields("Sat"), ["Sat", "Sat", "", "", ""]);
}

#[test]
fn empty_text_yields_nothing() {
    let parsed = parse_availability("");
    assert_eq!(parsed, ParsedAvailability::empty());
    assert_eq!(fields(""), ["", "", "", "", ""]);
}

#[test]
fn lowercase_days_are_not_detected() {
    let parsed = parse_availability("mon-fri 9am-5pm");
    assert!(parsed.days().is_none());
    assert!(parsed.hours().is_some());
}

#[test]
fn times_without_meridiem_pass_through() {
    assert_eq!(fields("Tue 9-17"), ["Tue", "Tue", "9", "17", ""]);
    assert_eq!(fields("10:00-18:30"), ["", "", "10:00", "18:30", ""]);
}

#[test]
fn meridiem_on_one_side_only() {
    let parsed = parse_availability("Sun 10-4pm");
    let hours = parsed.hours().unwrap();
    assert_eq!(hours.from, NormalizedTime::Unparsed("10".to_string()));
    assert_eq!(hours.to.to_string(), "16:00");
}

#[test]
fn uppercase_meridiem_and_minutes() {
    assert_eq!(fields("Thu 8:30AM-12:15PM"), ["Thu", "Thu", "08:30", "12:15", ""]);
}

#[test]
fn days_are_first_and_last_occurrence() {
    let parsed = parse_availability("Fri, Sat & Mon 6pm-11pm");
    assert_eq!(parsed.days(), Some(&DayRange::new(Weekday::Fri, Weekday::Mon)));
}

#[test]
fn multiple_ranges_keep_the_first() {
    assert_eq!(fields("Mon-Fri 9-12, 1-5"), ["Mon", "Fri", "9", "12", ""]);
}

#[test]
fn day_range_dash_is_not_a_time_range() {
    assert_eq!(fields("Wed-Sun"), ["Wed", "Sun", "", "", ""]);
}
