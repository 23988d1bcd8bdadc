//! Structured form of a free-text availability description.
//!
//! A description either resolves to a note (the text signals availability
//! that is not a weekly schedule, such as "by appointment") or to a schedule
//! made of an optional day range and an optional time range. The two shapes
//! are mutually exclusive, so they are modeled as variants of one enum.

use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Serialize, Serializer};

use crate::fields::{DerivedField, DerivedValues};

/// Three-letter weekday abbreviations recognized in availability text.
pub const DAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Map an exact three-letter abbreviation to its weekday.
///
/// Matching is case-sensitive: `"mon"` is not a day abbreviation.
pub fn day_from_abbreviation(token: &str) -> Option<Weekday> {
    match token {
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        "Sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// First and last weekday mentioned in a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRange {
    pub from: Weekday,
    pub to: Weekday,
}

impl DayRange {
    pub fn new(from: Weekday, to: Weekday) -> Self {
        Self { from, to }
    }

    pub fn single(day: Weekday) -> Self {
        Self { from: day, to: day }
    }
}

/// A clock-time token after 12-to-24-hour normalization.
///
/// Tokens that do not follow a 12-hour shape are kept verbatim; this is the
/// expected outcome for inputs such as `"17:00"` and is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedTime {
    /// Parsed 12-hour token, rendered as `HH:MM`.
    Converted(NaiveTime),
    /// Original token that matched neither 12-hour shape.
    Unparsed(String),
}

impl NormalizedTime {
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Converted(time) => Some(*time),
            Self::Unparsed(_) => None,
        }
    }
}

impl fmt::Display for NormalizedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converted(time) => write!(f, "{}", time.format("%H:%M")),
            Self::Unparsed(token) => f.write_str(token),
        }
    }
}

impl Serialize for NormalizedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Start and end of the first time range found in a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub from: NormalizedTime,
    pub to: NormalizedTime,
}

impl TimeRange {
    pub fn new(from: NormalizedTime, to: NormalizedTime) -> Self {
        Self { from, to }
    }

    /// True when either endpoint was passed through without conversion.
    pub fn has_unparsed(&self) -> bool {
        !(self.from.is_converted() && self.to.is_converted())
    }
}

/// Result of parsing one availability description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedAvailability {
    /// Non-schedule availability; `text` holds the description verbatim.
    Note { text: String },
    /// Day and time ranges, each absent when nothing matched.
    Schedule {
        days: Option<DayRange>,
        hours: Option<TimeRange>,
    },
}

impl ParsedAvailability {
    /// A schedule with nothing extracted.
    pub fn empty() -> Self {
        Self::Schedule {
            days: None,
            hours: None,
        }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::Note { text: text.into() }
    }

    pub fn is_note(&self) -> bool {
        matches!(self, Self::Note { .. })
    }

    /// True for a schedule where neither days nor times were found.
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self::Schedule {
                days: None,
                hours: None
            }
        )
    }

    pub fn notes(&self) -> Option<&str> {
        match self {
            Self::Note { text } => Some(text.as_str()),
            Self::Schedule { .. } => None,
        }
    }

    pub fn days(&self) -> Option<&DayRange> {
        match self {
            Self::Schedule { days, .. } => days.as_ref(),
            Self::Note { .. } => None,
        }
    }

    pub fn hours(&self) -> Option<&TimeRange> {
        match self {
            Self::Schedule { hours, .. } => hours.as_ref(),
            Self::Note { .. } => None,
        }
    }

    /// Render the five derived columns, using empty text for absent values.
    pub fn derived_values(&self) -> DerivedValues {
        let days = self.days();
        let hours = self.hours();
        let render = |field: DerivedField| -> String {
            match field {
                DerivedField::DayFrom => days.map(|d| d.from.to_string()).unwrap_or_default(),
                DerivedField::DayTo => days.map(|d| d.to.to_string()).unwrap_or_default(),
                DerivedField::TimeFrom => hours.map(|h| h.from.to_string()).unwrap_or_default(),
                DerivedField::TimeTo => hours.map(|h| h.to.to_string()).unwrap_or_default(),
                DerivedField::Notes => self.notes().unwrap_or_default().to_string(),
            }
        };
        DerivedValues::new(DerivedField::ALL.map(render))
    }
}

impl Default for ParsedAvailability {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NormalizedTime {
        NormalizedTime::Converted(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    #[test]
    fn abbreviations_are_case_sensitive() {
        assert_eq!(day_from_abbreviation("Wed"), Some(Weekday::Wed));
        assert_eq!(day_from_abbreviation("wed"), None);
        assert_eq!(day_from_abbreviation("Wednesday"), None);
        for abbrev in DAY_ABBREVIATIONS {
            let day = day_from_abbreviation(abbrev).unwrap();
            assert_eq!(day.to_string(), abbrev);
        }
    }

    #[test]
    fn normalized_time_display() {
        assert_eq!(hm(0, 5).to_string(), "00:05");
        assert_eq!(hm(20, 30).to_string(), "20:30");
        assert_eq!(NormalizedTime::Unparsed("17:00".into()).to_string(), "17:00");
    }

    #[test]
    fn note_renders_only_notes_column() {
        let parsed = ParsedAvailability::note("24/7");
        let values = parsed.derived_values();
        assert_eq!(values.get(DerivedField::Notes), "24/7");
        for field in [
            DerivedField::DayFrom,
            DerivedField::DayTo,
            DerivedField::TimeFrom,
            DerivedField::TimeTo,
        ] {
            assert_eq!(values.get(field), "");
        }
    }

    #[test]
    fn schedule_renders_days_and_times() {
        let parsed = ParsedAvailability::Schedule {
            days: Some(DayRange::new(Weekday::Mon, Weekday::Fri)),
            hours: Some(TimeRange::new(hm(9, 0), hm(17, 0))),
        };
        assert_eq!(
            parsed.derived_values().into_inner(),
            ["Mon", "Fri", "09:00", "17:00", ""]
        );
    }

    #[test]
    fn empty_schedule_renders_nothing() {
        let parsed = ParsedAvailability::empty();
        assert!(parsed.is_empty());
        assert!(!parsed.is_note());
        assert_eq!(parsed.derived_values(), DerivedValues::default());
    }

    #[test]
    fn unparsed_endpoint_is_reported() {
        let range = TimeRange::new(hm(9, 0), NormalizedTime::Unparsed("17".into()));
        assert!(range.has_unparsed());
        assert!(!TimeRange::new(hm(9, 0), hm(17, 0)).has_unparsed());
    }

    #[test]
    fn schedule_serializes_with_kind_tag() {
        let parsed = ParsedAvailability::Schedule {
            days: Some(DayRange::single(Weekday::Sat)),
            hours: Some(TimeRange::new(hm(8, 30), NormalizedTime::Unparsed("5".into()))),
        };
        insta::assert_json_snapshot!(parsed, @r#"
        {
          "kind": "schedule",
          "days": {
            "from": "Sat",
            "to": "Sat"
          },
          "hours": {
            "from": "08:30",
            "to": "5"
          }
        }
        "#);
    }

    #[test]
    fn note_serializes_with_kind_tag() {
        let json = serde_json::to_value(ParsedAvailability::note("Open 24 hours")).unwrap();
        assert_eq!(json["kind"], "note");
        assert_eq!(json["text"], "Open 24 hours");
    }
}
