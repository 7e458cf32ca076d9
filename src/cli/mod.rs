use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::services::{LogAnalyzer, OutputStyle, ReportPrinter};
use crate::types::{parse_date, Result};

/// Find the most active cookie(s) in a cookie log for a given day
#[derive(Parser, Debug)]
#[command(name = "most-active-cookie")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Cookie log file (*.csv), sorted newest first
    #[arg(short = 'f', value_name = "FILE")]
    pub file: PathBuf,

    /// Day to report on (YYYY-MM-DD)
    #[arg(short = 'd', value_name = "DATE", value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print cookies comma-separated on one line
    #[arg(long, conflicts_with = "json")]
    pub inline: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_date_arg(input: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(input).map_err(|e| e.to_string())
}

impl Cli {
    pub fn style(&self) -> OutputStyle {
        if self.json {
            OutputStyle::Json
        } else if self.inline {
            OutputStyle::Inline
        } else {
            OutputStyle::Lines
        }
    }

    pub fn run(self) -> Result<()> {
        let report = LogAnalyzer::new().most_active(&self.file, self.date)?;

        let stdout = std::io::stdout();
        ReportPrinter::new(self.style()).print(&report, &mut stdout.lock())
    }
}
