//! Free-form date and interval resolution.
//!
//! Turns user and file input into `Event` fields: a date resolves to a
//! year and month plus an optional day (absent when the input names only
//! a month), an interval resolves to a month count where zero means
//! non-repeating. Anything unrecognized resolves to absent rather than
//! an error; rejection happens at the input boundary.

use chrono::{Datelike, NaiveDate};

/// A resolved calendar anchor. `day` is absent when the input did not pin
/// a specific day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub year: i32,
    pub month: u32,
    pub day: Option<u32>,
}

const FULL_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d %b %Y", "%d %B %Y", "%d/%m/%Y"];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolve date text into a year/month anchor with an optional day.
pub fn parse_start_date(input: &str) -> Option<ParsedDate> {
    let s = input.trim();

    // whole-month placeholder as stored in the event file
    if let Some(rest) = s.strip_prefix("--") {
        return parse_year_month(rest.trim());
    }

    for format in FULL_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return Some(ParsedDate {
                year: d.year(),
                month: d.month(),
                day: Some(d.day()),
            });
        }
    }

    parse_year_month(s)
}

/// `Jan 2024`, `january 2024` or `2024-01`: a month with no specific day.
fn parse_year_month(s: &str) -> Option<ParsedDate> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if let [month, year] = tokens[..] {
        if let (Some(month), Ok(year)) = (month_number(month), year.parse()) {
            return Some(ParsedDate {
                year,
                month,
                day: None,
            });
        }
    }

    if let Some((year, month)) = s.split_once('-') {
        if let (Ok(year), Ok(month)) = (year.parse(), month.parse::<u32>()) {
            if (1..=12).contains(&month) {
                return Some(ParsedDate {
                    year,
                    month,
                    day: None,
                });
            }
        }
    }

    None
}

/// Month number from a full or 3-letter English name (plus "sept").
fn month_number(word: &str) -> Option<u32> {
    let word = word.to_lowercase();
    let word = match word.as_str() {
        "sept" => "sep",
        w => w,
    };

    MONTH_NAMES
        .iter()
        .position(|name| *name == word || (word.len() == 3 && name.starts_with(word)))
        .map(|index| index as u32 + 1)
}

/// Resolve interval text into a month count; zero means "not recurring".
///
/// Accepts the labels the event renderer produces (`Monthly`, `Annually`,
/// `3 months`, `2 years`) so stored rows read back losslessly.
pub fn parse_interval(input: &str) -> u32 {
    let s = input.trim().to_lowercase();
    match s.as_str() {
        "monthly" => return 1,
        "yearly" | "annually" => return 12,
        _ => {}
    }

    let tokens: Vec<&str> = s.split_whitespace().collect();
    if let [count, unit] = tokens[..] {
        if let Ok(count) = count.parse::<u32>() {
            if unit.starts_with("month") {
                return count;
            }
            if unit.starts_with("year") {
                return count * 12;
            }
        }
    }

    0
}

/// A positive occurrence cap, or `None` for unbounded.
pub fn parse_limit(input: &str) -> Option<u32> {
    input.trim().parse().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(year: i32, month: u32, day: u32) -> Option<ParsedDate> {
        Some(ParsedDate {
            year,
            month,
            day: Some(day),
        })
    }

    fn whole_month(year: i32, month: u32) -> Option<ParsedDate> {
        Some(ParsedDate {
            year,
            month,
            day: None,
        })
    }

    // --- parse_start_date ---

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_start_date("2024-01-15"), full(2024, 1, 15));
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_start_date("15 Jan 2024"), full(2024, 1, 15));
        assert_eq!(parse_start_date("15 January 2024"), full(2024, 1, 15));
        assert_eq!(parse_start_date("05 Feb 2024"), full(2024, 2, 5));
        assert_eq!(parse_start_date("15/01/2024"), full(2024, 1, 15));
    }

    #[test]
    fn month_only_input_leaves_the_day_open() {
        assert_eq!(parse_start_date("Jan 2024"), whole_month(2024, 1));
        assert_eq!(parse_start_date("january 2024"), whole_month(2024, 1));
        assert_eq!(parse_start_date("sept 2025"), whole_month(2025, 9));
        assert_eq!(parse_start_date("2024-01"), whole_month(2024, 1));
    }

    #[test]
    fn parses_the_stored_placeholder_row() {
        assert_eq!(parse_start_date("-- Feb 2024"), whole_month(2024, 2));
        assert_eq!(parse_start_date("  -- Feb 2024  "), whole_month(2024, 2));
    }

    #[test]
    fn rejects_unparseable_dates() {
        assert_eq!(parse_start_date("not a date"), None);
        assert_eq!(parse_start_date(""), None);
        assert_eq!(parse_start_date("2024-13"), None);
        assert_eq!(parse_start_date("someday 2024"), None);
    }

    // --- parse_interval ---

    #[test]
    fn parses_interval_keywords() {
        assert_eq!(parse_interval("monthly"), 1);
        assert_eq!(parse_interval("Monthly"), 1);
        assert_eq!(parse_interval("yearly"), 12);
        assert_eq!(parse_interval("Annually"), 12);
    }

    #[test]
    fn parses_counted_intervals() {
        assert_eq!(parse_interval("3 months"), 3);
        assert_eq!(parse_interval("1 month"), 1);
        assert_eq!(parse_interval("2 years"), 24);
        assert_eq!(parse_interval(" 6 months "), 6);
    }

    #[test]
    fn unrecognized_intervals_mean_not_recurring() {
        assert_eq!(parse_interval(""), 0);
        assert_eq!(parse_interval("sometimes"), 0);
        assert_eq!(parse_interval("3"), 0);
        assert_eq!(parse_interval("-2 months"), 0);
    }

    #[test]
    fn interval_labels_round_trip() {
        for label in ["Monthly", "Annually", " 3 months", " 2 years", "13 months"] {
            let months = parse_interval(label);
            assert!(months > 0, "label {label:?} did not parse");
        }
        assert_eq!(parse_interval(" 2 years"), 24);
        assert_eq!(parse_interval("13 months"), 13);
    }

    // --- parse_limit ---

    #[test]
    fn parses_limits() {
        assert_eq!(parse_limit("5"), Some(5));
        assert_eq!(parse_limit("  12 "), Some(12));
        assert_eq!(parse_limit(""), None);
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("many"), None);
    }
}
