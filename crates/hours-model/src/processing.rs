//! Outcome of a standardization pass.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::availability::ParsedAvailability;

/// Per-category row counts collected while transforming a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizeReport {
    /// Output path, or `None` for a dry run.
    pub output: Option<PathBuf>,
    /// Data rows processed (header excluded).
    pub rows: usize,
    /// Rows routed to the notes column.
    pub notes: usize,
    /// Rows with at least one weekday abbreviation.
    pub day_ranges: usize,
    /// Rows with a time range.
    pub time_ranges: usize,
    /// Rows whose time range kept at least one endpoint verbatim.
    pub unparsed_times: usize,
    /// Rows where nothing was extracted.
    pub unmatched: usize,
}

impl StandardizeReport {
    /// Count one parsed row.
    pub fn record(&mut self, parsed: &ParsedAvailability) {
        self.rows += 1;
        if parsed.is_note() {
            self.notes += 1;
            return;
        }
        if parsed.is_empty() {
            self.unmatched += 1;
        }
        if parsed.days().is_some() {
            self.day_ranges += 1;
        }
        if let Some(hours) = parsed.hours() {
            self.time_ranges += 1;
            if hours.has_unparsed() {
                self.unparsed_times += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, Weekday};

    use super::*;
    use crate::availability::{DayRange, NormalizedTime, TimeRange};

    #[test]
    fn record_counts_categories() {
        let nine = NormalizedTime::Converted(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        let mut report = StandardizeReport::default();
        report.record(&ParsedAvailability::note("By appointment"));
        report.record(&ParsedAvailability::empty());
        report.record(&ParsedAvailability::Schedule {
            days: Some(DayRange::single(Weekday::Sat)),
            hours: None,
        });
        report.record(&ParsedAvailability::Schedule {
            days: None,
            hours: Some(TimeRange::new(
                nine,
                NormalizedTime::Unparsed("17".to_string()),
            )),
        });

        assert_eq!(report.rows, 4);
        assert_eq!(report.notes, 1);
        assert_eq!(report.unmatched, 1);
        assert_eq!(report.day_ranges, 1);
        assert_eq!(report.time_ranges, 1);
        assert_eq!(report.unparsed_times, 1);
    }
}
