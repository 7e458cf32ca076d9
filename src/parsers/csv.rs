//! Cookie log CSV loader

use crate::types::{CookieError, LogFormat, LogRow, Result};
use chrono::DateTime;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Loader and row parser for cookie activity logs
pub struct CookieLogParser {
    format: LogFormat,
    columns: usize,
}

impl CookieLogParser {
    /// Create a parser for the default `cookie,timestamp` layout
    pub fn new() -> Self {
        Self::with_format(LogFormat::default())
    }

    pub fn with_format(format: LogFormat) -> Self {
        let columns = format.column_count();
        Self { format, columns }
    }

    /// Validate the file and return its data lines, header line removed.
    ///
    /// Checks run in order: the path exists, the extension matches, and the
    /// first `header.len()` bytes equal the header literal. Only that prefix is
    /// compared, so `cookie,timestamp,extra` passes; the rest of the first
    /// line is discarded either way.
    pub fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        if !path.is_file() {
            return Err(CookieError::FileNotFound(path.to_path_buf()));
        }

        let suffix = format!(".{}", self.format.extension);
        let has_extension = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&suffix));
        if !has_extension {
            return Err(CookieError::InvalidFileType(path.to_path_buf()));
        }

        let mut reader = BufReader::new(File::open(path)?);

        let expected = self.format.header.as_bytes();
        let mut header = Vec::with_capacity(expected.len());
        reader
            .by_ref()
            .take(expected.len() as u64)
            .read_to_end(&mut header)?;
        if header != expected {
            return Err(CookieError::MalformedHeader(
                String::from_utf8_lossy(&header).into_owned(),
            ));
        }

        let mut header_rest = Vec::new();
        reader.read_until(b'\n', &mut header_rest)?;

        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        debug!(path = %path.display(), lines = lines.len(), "read cookie log");
        Ok(lines)
    }

    /// Parse a single data line. `line_no` is the 1-based line in the file.
    pub fn parse_line(&self, line: &str, line_no: usize) -> Result<LogRow> {
        let fields: Vec<&str> = line.split(self.format.delimiter).collect();
        if fields.len() != self.columns {
            return Err(CookieError::MalformedRow {
                line: line_no,
                reason: format!("expected {} fields, found {}", self.columns, fields.len()),
            });
        }

        let raw_timestamp = fields[self.format.timestamp_column].trim();
        let timestamp = DateTime::parse_from_str(raw_timestamp, &self.format.timestamp_format)
            .map_err(|e| CookieError::MalformedRow {
                line: line_no,
                reason: format!("invalid timestamp '{}': {}", raw_timestamp, e),
            })?;

        Ok(LogRow::new(fields[self.format.cookie_column], timestamp))
    }

    /// Load and parse every row of a log file, preserving file order.
    /// Blank lines are skipped.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<LogRow>> {
        let lines = self.read_lines(path)?;
        let mut rows = Vec::with_capacity(lines.len());

        for (idx, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            // header occupies line 1
            rows.push(self.parse_line(line, idx + 2)?);
        }

        debug!(rows = rows.len(), "parsed cookie log");
        Ok(rows)
    }
}

impl Default for CookieLogParser {
    fn default() -> Self {
        Self::new()
    }
}
