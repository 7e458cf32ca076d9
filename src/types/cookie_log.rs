//! Cookie log row and log format types

use chrono::{DateTime, FixedOffset, NaiveDate};

use super::{CookieError, Result};

pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_HEADER: &str = "cookie,timestamp";
pub const DEFAULT_EXTENSION: &str = "csv";
/// `YYYY-MM-DDTHH:MM:SS±HH:MM`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const COOKIE_COLUMN: &str = "cookie";
const TIMESTAMP_COLUMN: &str = "timestamp";

/// A single cookie sighting from the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub cookie: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl LogRow {
    pub fn new(cookie: impl Into<String>, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            cookie: cookie.into(),
            timestamp,
        }
    }

    /// Calendar date in the timestamp's own offset.
    /// Time of day and offset are not consulted for grouping.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Layout of a cookie log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    pub delimiter: char,
    /// Literal the file must start with
    pub header: String,
    /// Required file extension, without the dot
    pub extension: String,
    pub timestamp_format: String,
    pub cookie_column: usize,
    pub timestamp_column: usize,
}

impl LogFormat {
    /// Build a format from a header literal, locating the `cookie` and
    /// `timestamp` columns by name.
    pub fn from_header(header: &str, delimiter: char) -> Result<Self> {
        let columns: Vec<&str> = header.split(delimiter).collect();
        let position = |name: &str| {
            columns.iter().position(|c| *c == name).ok_or_else(|| {
                CookieError::Config(format!("header '{}' has no '{}' column", header, name))
            })
        };

        Ok(Self {
            delimiter,
            header: header.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            cookie_column: position(COOKIE_COLUMN)?,
            timestamp_column: position(TIMESTAMP_COLUMN)?,
        })
    }

    pub fn with_timestamp_format(mut self, timestamp_format: impl Into<String>) -> Self {
        self.timestamp_format = timestamp_format.into();
        self
    }

    /// Number of fields every data row must split into
    pub fn column_count(&self) -> usize {
        self.header.split(self.delimiter).count()
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            header: DEFAULT_HEADER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            cookie_column: 0,
            timestamp_column: 1,
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date (no time or offset component)
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| CookieError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_derived_format() {
        let derived = LogFormat::from_header(DEFAULT_HEADER, DEFAULT_DELIMITER).unwrap();
        assert_eq!(derived, LogFormat::default());
        assert_eq!(derived.column_count(), 2);
    }

    #[test]
    fn test_from_header_finds_reordered_columns() {
        let format = LogFormat::from_header("timestamp;site;cookie", ';').unwrap();
        assert_eq!(format.cookie_column, 2);
        assert_eq!(format.timestamp_column, 0);
        assert_eq!(format.column_count(), 3);
    }

    #[test]
    fn test_from_header_missing_column() {
        let err = LogFormat::from_header("cookie,time", ',').unwrap_err();
        assert!(matches!(err, CookieError::Config(_)));
        assert!(err.to_string().contains("'timestamp'"));
    }

    #[test]
    fn test_with_timestamp_format() {
        let format = LogFormat::default().with_timestamp_format("%Y-%m-%d %H:%M:%S %z");
        assert_eq!(format.timestamp_format, "%Y-%m-%d %H:%M:%S %z");
        assert_eq!(format.header, DEFAULT_HEADER);
        assert_eq!(format.cookie_column, 0);
    }

    #[test]
    fn test_row_date_uses_own_offset() {
        // 23:30 at -05:00 is already the next day in UTC
        let ts = DateTime::parse_from_str("2018-12-08T23:30:00-05:00", DEFAULT_TIMESTAMP_FORMAT)
            .unwrap();
        let row = LogRow::new("AtY0keLB", ts);
        assert_eq!(row.date(), NaiveDate::from_ymd_opt(2018, 12, 8).unwrap());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2018-12-09").unwrap(),
            NaiveDate::from_ymd_opt(2018, 12, 9).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_timestamps() {
        assert!(matches!(
            parse_date("2018-12-09T14:19:00+00:00"),
            Err(CookieError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date("yesterday"),
            Err(CookieError::InvalidDate(_))
        ));
    }
}
