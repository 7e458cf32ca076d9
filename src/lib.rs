//! Find the most active cookie(s) of a day in a cookie activity log

pub mod cli;
pub mod logging;
pub mod parsers;
pub mod services;
pub mod types;

pub use services::{Aggregator, DailyBucket, DailyCookieIndex, LogAnalyzer};
pub use types::{CookieError, LogFormat, LogRow, Result};
