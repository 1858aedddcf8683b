//! Reminder events.

use std::fmt;

use chrono::NaiveDate;

use crate::month::{MonthIndex, days_in_month};

/// A single reminder: an anchor month (with optional day of month), an
/// optional repeat interval and an optional cap on total occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub text: String,
    pub year: i32,
    pub month: u32,
    /// Day of month, 1-31. Absent means the event covers the whole month.
    pub day: Option<u32>,
    /// Months between occurrences. Absent or zero means non-repeating.
    pub interval: Option<u32>,
    /// Maximum occurrences ever generated, anchor included.
    pub limit: Option<u32>,
}

impl Event {
    /// Month index of the anchor date.
    pub fn anchor(&self) -> MonthIndex {
        MonthIndex::new(self.year, self.month)
    }

    /// The repeat interval, normalized: `Some` only when actually repeating.
    pub fn repeat_interval(&self) -> Option<u32> {
        self.interval.filter(|&months| months > 0)
    }

    fn interval_label(&self) -> String {
        match self.interval {
            None | Some(0) => String::new(),
            Some(1) => "Monthly".to_string(),
            Some(12) => "Annually".to_string(),
            Some(months) if months % 12 == 0 => format!("{:2} years", months / 12),
            Some(months) => format!("{:2} months", months),
        }
    }
}

/// `DD Mon YYYY`, or `-- Mon YYYY` for whole-month dates. The day is
/// clamped to the month's length; it is never stored pre-clamped.
pub(crate) fn date_label(year: i32, month: u32, day: Option<u32>) -> String {
    let day = day.map(|d| d.min(days_in_month(year, month)));
    match NaiveDate::from_ymd_opt(year, month, day.unwrap_or(1)) {
        Some(date) if day.is_some() => date.format("%d %b %Y").to_string(),
        Some(date) => date.format("-- %b %Y").to_string(),
        None => String::new(),
    }
}

impl fmt::Display for Event {
    /// Fixed-width row matching the event file and the list header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = self.limit.map(|n| n.to_string()).unwrap_or_default();
        write!(
            f,
            "{:11} |{:>10} | {:>5} | {}",
            date_label(self.year, self.month, self.day),
            self.interval_label(),
            limit,
            self.text
        )
    }
}
