use std::path::PathBuf;

use thiserror::Error;

/// most-active-cookie error types
#[derive(Error, Debug)]
pub enum CookieError {
    /// Log file path does not resolve
    #[error("{} does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// Log file does not carry the expected extension
    #[error("file must be a '.csv' extension: {}", .0.display())]
    InvalidFileType(PathBuf),

    /// Leading bytes of the file do not match the header literal
    #[error("wrong header format: {0}")]
    MalformedHeader(String),

    /// Data row could not be split or its timestamp parsed
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// No bucket for the requested date
    #[error("invalid date: {0}")]
    OutOfRange(String),

    /// Requested date is not `YYYY-MM-DD`
    #[error("invalid date argument '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Log has a header but no data rows
    #[error("cookie log has no entries")]
    EmptyLog,

    /// Log format configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Report rendering failed
    #[error("serialize error: {0}")]
    Serialize(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for most-active-cookie
pub type Result<T> = std::result::Result<T, CookieError>;
