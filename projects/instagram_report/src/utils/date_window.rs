use chrono::{Duration, NaiveDate};

pub const WINDOW_DAYS: i64 = 365;

/// How an endpoint family expects the window in its query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEncoding {
    /// `start`/`end` as `YYYYMMDD`
    Compact,
    /// `from`/`to` as ISO 8601 timestamps covering whole days
    Iso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// The window ending `today` and starting 365 days earlier.
    pub fn trailing_year(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(WINDOW_DAYS),
            end: today,
        }
    }

    pub fn compact_start(&self) -> String {
        self.start.format("%Y%m%d").to_string()
    }

    pub fn compact_end(&self) -> String {
        self.end.format("%Y%m%d").to_string()
    }

    pub fn iso_start(&self) -> String {
        self.start.format("%Y-%m-%dT00:00:00").to_string()
    }

    pub fn iso_end(&self) -> String {
        self.end.format("%Y-%m-%dT23:59:59").to_string()
    }

    pub fn params(&self, encoding: DateEncoding) -> [(&'static str, String); 2] {
        match encoding {
            DateEncoding::Compact => [("start", self.compact_start()), ("end", self.compact_end())],
            DateEncoding::Iso => [("from", self.iso_start()), ("to", self.iso_end())],
        }
    }
}
