//! Recurrence expansion and summary windowing.
//!
//! Expands each event into its concrete calendar occurrences inside a
//! bounded window around today, merged into chronological order. Two
//! events that land on the identical date collapse to one entry; the
//! later event in the collection wins.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::event::{self, Event};
use crate::month::{MonthIndex, days_in_month};

/// Hard ceiling on expansion steps for a single event.
///
/// Guards the expansion loop against a misconfigured interval that never
/// reaches the window's far edge; hitting the ceiling truncates that
/// event's occurrences instead of erroring.
pub const MAX_STEPS_PER_EVENT: u32 = 100;

/// Coarse position of an occurrence relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeClass {
    Past,
    Present,
    Future,
}

/// One concrete calendar instance of an event inside the summary window.
#[derive(Debug, Clone)]
pub struct Occurrence<'a> {
    pub year: i32,
    pub month: u32,
    /// Resolved day, clamped to the occurrence month's length. Absent for
    /// whole-month events.
    pub day: Option<u32>,
    /// Signed month distance from today.
    pub delta: i32,
    /// The owning event's current 1-based position in the collection.
    pub index: usize,
    pub event: &'a Event,
}

impl Occurrence<'_> {
    /// Chronological sort key. A whole-month occurrence carries day 0, so
    /// it orders before any specific day in the same month.
    fn key(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day.unwrap_or(0))
    }

    /// `DD Mon YYYY`, or `-- Mon YYYY` for whole-month occurrences.
    pub fn date_label(&self) -> String {
        event::date_label(self.year, self.month, self.day)
    }

    /// Classify relative to today. The month distance decides; within the
    /// current month a specific day is compared against today's day.
    /// Whole-month occurrences never get day-level classification.
    pub fn time_class(&self, today: NaiveDate) -> TimeClass {
        if self.delta > 0 {
            return TimeClass::Future;
        }
        if self.delta < 0 {
            return TimeClass::Past;
        }
        match self.day {
            Some(day) if day > today.day() => TimeClass::Future,
            Some(day) if day < today.day() => TimeClass::Past,
            _ => TimeClass::Present,
        }
    }
}

/// Expand `events` into their occurrences around `today` and return them
/// in chronological order.
///
/// The window reaches `past_days` back and `future_days` forward, widened
/// to whole-month bounds. Events are processed in collection order and
/// tagged with their 1-based position, which is what the summary displays
/// as the event id.
pub fn summarize<'a>(
    events: &'a [Event],
    today: NaiveDate,
    past_days: u32,
    future_days: u32,
) -> Vec<Occurrence<'a>> {
    let today_m = MonthIndex::from_date(today);
    let start_m = today_m - month_span(past_days);
    let end_m = today_m + month_span(future_days);

    let mut merged: BTreeMap<(i32, u32, u32), Occurrence<'a>> = BTreeMap::new();

    for (position, event) in events.iter().enumerate() {
        let index = position + 1;
        let interval = event.repeat_interval();

        let mut at = event.anchor();
        let mut reps: u32 = 0;

        // Jump straight to the first repeat that can reach the window;
        // the skipped repeats still count against the limit.
        if let Some(step) = interval {
            if start_m > at {
                reps = (start_m - at) as u32 / step;
                at = at + (reps * step) as i32;
            }
        }

        for _ in 0..MAX_STEPS_PER_EVENT {
            if event.limit.is_some_and(|limit| reps >= limit) {
                break;
            }
            if at > end_m {
                break;
            }
            if at >= start_m {
                let occurrence = resolve(event, index, at, today_m);
                merged.insert(occurrence.key(), occurrence);
            }
            match interval {
                Some(step) => {
                    at = at + step as i32;
                    reps += 1;
                }
                None => break,
            }
        }
    }

    merged.into_values().collect()
}

/// Whole months guaranteed to cover `days` calendar days.
fn month_span(days: u32) -> i32 {
    days.div_ceil(31) as i32
}

/// Pin an event to a concrete month, clamping the day to that month's
/// length (day 31 in February resolves to the 28th or 29th, never rolls
/// over).
fn resolve<'a>(
    event: &'a Event,
    index: usize,
    at: MonthIndex,
    today_m: MonthIndex,
) -> Occurrence<'a> {
    let (year, month) = (at.year(), at.month());
    Occurrence {
        year,
        month,
        day: event.day.map(|d| d.min(days_in_month(year, month))),
        delta: at - today_m,
        index,
        event,
    }
}
