//! Month-index arithmetic.
//!
//! A `(year, month)` pair is encoded as `year * 12 + month - 1`, so
//! stepping a recurrence by N months is plain integer addition and year
//! boundaries need no special casing.

use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

/// A calendar month encoded as a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthIndex(i32);

impl MonthIndex {
    pub fn new(year: i32, month: u32) -> Self {
        MonthIndex(year * 12 + month as i32 - 1)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.0.div_euclid(12)
    }

    /// 1-based calendar month.
    pub fn month(self) -> u32 {
        self.0.rem_euclid(12) as u32 + 1
    }
}

impl Add<i32> for MonthIndex {
    type Output = MonthIndex;

    fn add(self, months: i32) -> MonthIndex {
        MonthIndex(self.0 + months)
    }
}

impl Sub<i32> for MonthIndex {
    type Output = MonthIndex;

    fn sub(self, months: i32) -> MonthIndex {
        MonthIndex(self.0 - months)
    }
}

impl Sub for MonthIndex {
    type Output = i32;

    /// Signed distance in months.
    fn sub(self, other: MonthIndex) -> i32 {
        self.0 - other.0
    }
}

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = MonthIndex::new(year, month) + 1;
    NaiveDate::from_ymd_opt(next.year(), next.month(), 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
