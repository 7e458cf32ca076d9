//! Services for indexing and analysing cookie activity

pub mod aggregator;
pub mod analyzer;
pub mod daily_index;
pub mod report;

pub use aggregator::Aggregator;
pub use analyzer::LogAnalyzer;
pub use daily_index::{DailyBucket, DailyCookieIndex};
pub use report::{CookieReport, OutputStyle, ReportPrinter};
