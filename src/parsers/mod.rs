//! Cookie log loading and row parsing

mod csv;

pub use csv::CookieLogParser;
