//! Flat-file event store.
//!
//! Events live in a plain text file, one row per event in the same
//! fixed-width format the `list` command prints. Rows starting with `#`
//! are comments; the exported file carries the column header as one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RemindConfig;
use crate::error::{RemindError, RemindResult};
use crate::event::Event;
use crate::parse;

/// Horizontal rule used in the event file and the list/create displays.
pub const RULE: &str = "#-------------------------------------------------------------------";

/// Column header shared by the event file, `list` and the create preview.
pub fn header(show_id: bool) -> String {
    let columns = "   From    |  Interval | Limit | Description";
    if show_id {
        format!("#ID|  {columns}")
    } else {
        format!("#{columns}")
    }
}

/// The ordered event collection backed by the event file. Display ids are
/// 1-based positions in this collection, so they shift when earlier
/// events are removed.
pub struct Store {
    path: PathBuf,
    events: Vec<Event>,
}

impl Store {
    /// Open the store described by `config`, creating the data directory
    /// on first use. A missing event file is an empty store.
    pub fn open(config: &RemindConfig) -> RemindResult<Self> {
        let dir = config.data_path();
        fs::create_dir_all(&dir)?;
        Self::load(dir.join(&config.event_file))
    }

    /// Open the store at an explicit file path.
    pub fn load(path: PathBuf) -> RemindResult<Self> {
        let mut events = Vec::new();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            events = content.lines().filter_map(parse_line).collect();
        }
        Ok(Store { path, events })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove an event by its 1-based display id. Out-of-range ids are
    /// rejected without touching the collection.
    pub fn remove(&mut self, id: usize) -> RemindResult<Event> {
        if id == 0 || id > self.events.len() {
            return Err(RemindError::EventOutOfRange {
                id,
                count: self.events.len(),
            });
        }
        Ok(self.events.remove(id - 1))
    }

    /// Rewrite the whole event file from the in-memory collection.
    pub fn save(&self) -> RemindResult<()> {
        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&header(false));
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        fs::write(&self.path, out)?;
        Ok(())
    }
}

/// One event per row: date, interval, limit and description separated by
/// `|`. Rows that don't parse are skipped so they never reach the engine.
fn parse_line(line: &str) -> Option<Event> {
    if line.starts_with('#') {
        return None;
    }

    let parts: Vec<&str> = line.splitn(4, '|').collect();
    let [date, interval, limit, text] = parts[..] else {
        return None;
    };

    let date = parse::parse_start_date(date)?;
    let interval = match parse::parse_interval(interval) {
        0 => None,
        months => Some(months),
    };

    Some(Event {
        text: text.trim().to_string(),
        year: date.year,
        month: date.month,
        day: date.day,
        interval,
        limit: parse::parse_limit(limit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(text: &str, day: Option<u32>, interval: Option<u32>, limit: Option<u32>) -> Event {
        Event {
            text: text.to_string(),
            year: 2024,
            month: 1,
            day,
            interval,
            limit,
        }
    }

    // --- parse_line ---

    #[test]
    fn parses_a_full_row() {
        let parsed = parse_line("15 Jan 2024 |   Monthly |     2 | water plants").unwrap();
        assert_eq!(parsed, event("water plants", Some(15), Some(1), Some(2)));
    }

    #[test]
    fn parses_a_whole_month_row() {
        let parsed = parse_line("-- Jan 2024 |           |       | rent review").unwrap();
        assert_eq!(parsed, event("rent review", None, None, None));
    }

    #[test]
    fn skips_comments_and_malformed_rows() {
        assert_eq!(parse_line(RULE), None);
        assert_eq!(parse_line(&header(false)), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("only | three | parts"), None);
        assert_eq!(parse_line("garbage | Monthly | 2 | text"), None);
    }

    #[test]
    fn description_may_contain_pipes() {
        let parsed = parse_line("15 Jan 2024 | | | check a|b switch").unwrap();
        assert_eq!(parsed.text, "check a|b switch");
    }

    // --- Store ---

    #[test]
    fn export_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remind.txt");

        let mut store = Store::load(path.clone()).unwrap();
        store.append(event("water plants", Some(15), Some(1), Some(2)));
        store.append(event("rent review", None, None, None));
        store.append(event("car service", Some(31), Some(24), None));
        store.save().unwrap();

        let reloaded = Store::load(path).unwrap();
        assert_eq!(reloaded.events(), store.events());
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path().join("absent.txt")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn remove_uses_one_based_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::load(dir.path().join("remind.txt")).unwrap();
        store.append(event("first", Some(1), None, None));
        store.append(event("second", Some(2), None, None));

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.text, "first");
        assert_eq!(store.len(), 1);
        assert_eq!(store.events()[0].text, "second");
    }

    #[test]
    fn out_of_range_remove_leaves_the_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::load(dir.path().join("remind.txt")).unwrap();
        store.append(event("only", Some(1), None, None));

        assert!(store.remove(0).is_err());
        assert!(store.remove(2).is_err());
        assert_eq!(store.len(), 1);
    }
}
