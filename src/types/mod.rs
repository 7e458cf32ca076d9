//! Type definitions for most-active-cookie

mod cookie_log;
mod error;

pub use cookie_log::*;
pub use error::*;
