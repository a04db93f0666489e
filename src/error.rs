use thiserror::Error;

use crate::date::Date;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Parse error: '{input}' {message}")]
    Parse { input: String, message: String },
    #[error("Range error: start date {start} cannot be after the end date {end}")]
    RangeOrder { start: Date, end: Date },
    #[error("Decode error: failed to decode date range '{input}': {message}")]
    Decode { input: String, message: String },
    #[error("Out of range: {0}")]
    OutOfRange(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// Helper conversions
impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
