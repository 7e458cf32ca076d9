//! Report rendering for the most active cookies of a day

use crate::types::{CookieError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

/// Winning cookies for a single date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookieReport {
    pub date: NaiveDate,
    /// Sightings of each winning cookie
    pub count: u32,
    pub cookies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// One cookie per line
    #[default]
    Lines,
    /// Cookies joined with ", " on one line
    Inline,
    Json,
}

pub struct ReportPrinter {
    style: OutputStyle,
}

impl ReportPrinter {
    pub fn new(style: OutputStyle) -> Self {
        Self { style }
    }

    pub fn render(&self, report: &CookieReport) -> Result<String> {
        match self.style {
            OutputStyle::Lines => Ok(report.cookies.join("\n")),
            OutputStyle::Inline => Ok(report.cookies.join(", ")),
            OutputStyle::Json => serde_json::to_string_pretty(report)
                .map_err(|e| CookieError::Serialize(e.to_string())),
        }
    }

    /// Write the rendered report followed by a newline
    pub fn print<W: Write>(&self, report: &CookieReport, out: &mut W) -> Result<()> {
        let rendered = self.render(report)?;
        writeln!(out, "{}", rendered)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new(OutputStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(cookies: &[&str]) -> CookieReport {
        CookieReport {
            date: NaiveDate::from_ymd_opt(2018, 12, 8).unwrap(),
            count: 1,
            cookies: cookies.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_lines_is_default() {
        let report = make_report(&["AtY0keLB", "SAZuXPGUrfbcn5C"]);
        let mut out = Vec::new();

        ReportPrinter::default().print(&report, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "AtY0keLB\nSAZuXPGUrfbcn5C\n");
    }

    #[test]
    fn test_inline_style() {
        let report = make_report(&["AtY0keLB", "SAZuXPGUrfbcn5C"]);
        let rendered = ReportPrinter::new(OutputStyle::Inline)
            .render(&report)
            .unwrap();

        assert_eq!(rendered, "AtY0keLB, SAZuXPGUrfbcn5C");
    }

    #[test]
    fn test_json_style() {
        let report = make_report(&["AtY0keLB"]);
        let rendered = ReportPrinter::new(OutputStyle::Json)
            .render(&report)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["date"], "2018-12-08");
        assert_eq!(value["count"], 1);
        assert_eq!(value["cookies"][0], "AtY0keLB");
    }
}
