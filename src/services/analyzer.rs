//! Log analysis pipeline: load, index, look up, pick winners

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::parsers::CookieLogParser;
use crate::services::{Aggregator, CookieReport, DailyCookieIndex};
use crate::types::{LogFormat, Result};

/// Runs a whole analysis for one log file and one date
pub struct LogAnalyzer {
    parser: CookieLogParser,
}

impl LogAnalyzer {
    pub fn new() -> Self {
        Self {
            parser: CookieLogParser::new(),
        }
    }

    pub fn with_format(format: LogFormat) -> Self {
        Self {
            parser: CookieLogParser::with_format(format),
        }
    }

    /// Build the daily index for a log file
    pub fn index(&self, path: &Path) -> Result<DailyCookieIndex> {
        let rows = self.parser.parse_file(path)?;
        DailyCookieIndex::build(rows)
    }

    /// Most active cookie(s) of `date` in the log at `path`
    pub fn most_active(&self, path: &Path, date: NaiveDate) -> Result<CookieReport> {
        let start = Instant::now();

        let index = self.index(path)?;
        debug!(
            newest = %index.newest_date(),
            oldest = %index.oldest_date(),
            "cookie log spans"
        );

        let bucket = index.activity_on(date)?;
        let report = CookieReport {
            date,
            count: Aggregator::max_count(bucket).unwrap_or(0),
            cookies: Aggregator::most_active(bucket)
                .into_iter()
                .map(String::from)
                .collect(),
        };

        info!(
            %date,
            winners = report.cookies.len(),
            count = report.count,
            elapsed = ?start.elapsed(),
            "analysis complete"
        );
        Ok(report)
    }
}

impl Default for LogAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CookieError, LogFormat};
    use std::path::PathBuf;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_most_active_single_winner() {
        let analyzer = LogAnalyzer::new();
        let report = analyzer
            .most_active(&fixture_path("cookie_log.csv"), date(2018, 12, 9))
            .unwrap();

        assert_eq!(report.cookies, vec!["AtY0keLB"]);
        assert_eq!(report.count, 2);
    }

    #[test]
    fn test_most_active_three_way_tie() {
        let analyzer = LogAnalyzer::new();
        let report = analyzer
            .most_active(&fixture_path("cookie_log.csv"), date(2018, 12, 8))
            .unwrap();

        assert_eq!(
            report.cookies,
            vec!["SAZuXPGUrfbcn5C", "4sMM2LxV07bPJzwf", "fbcn5UAVanZf6UtG"]
        );
        assert_eq!(report.count, 1);
    }

    #[test]
    fn test_header_only_log_is_empty() {
        let analyzer = LogAnalyzer::new();
        let err = analyzer
            .most_active(&fixture_path("header_only.csv"), date(2018, 12, 9))
            .unwrap_err();

        assert!(matches!(err, CookieError::EmptyLog));
    }

    #[test]
    fn test_index_spans_log() {
        let index = LogAnalyzer::new()
            .index(&fixture_path("cookie_log.csv"))
            .unwrap();

        assert_eq!(index.day_count(), 3);
        assert_eq!(index.newest_date(), date(2018, 12, 9));
        assert_eq!(index.oldest_date(), date(2018, 12, 7));
    }

    #[test]
    fn test_custom_format_semicolon_log() {
        let format = LogFormat::from_header("timestamp;cookie", ';').unwrap();
        let analyzer = LogAnalyzer::with_format(format);
        let report = analyzer
            .most_active(&fixture_path("semicolon_log.csv"), date(2018, 12, 8))
            .unwrap();

        assert_eq!(report.cookies, vec!["SAZuXPGUrfbcn5C"]);
        assert_eq!(report.count, 2);
    }

    #[test]
    fn test_default_format_rejects_semicolon_log() {
        let err = LogAnalyzer::new()
            .most_active(&fixture_path("semicolon_log.csv"), date(2018, 12, 8))
            .unwrap_err();

        assert!(matches!(err, CookieError::MalformedHeader(_)));
    }
}
