// config lets the settings come from a separate file and the environment
use config::{Config, Environment, File};
use serde::Deserialize;

use std::path::Path;

use crate::date::{Date, ISO8601_DATE};
use crate::error::Result;
use crate::literal::{self, EndBound};
use crate::range::Range;

/// Environment variables such as `DATESPAN_END_BOUND=exclusive` override
/// whatever the settings file says.
pub const ENVIRONMENT_PREFIX: &str = "DATESPAN";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// A `tracing_subscriber::EnvFilter` directive, e.g. `datespan=debug`.
    pub log_filter: String,
    /// The strftime-like layout used by [`Settings::parse_date`].
    pub date_layout: String,
    /// How [`Settings::encode`] writes the upper bound of a range.
    pub end_bound: EndBound,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            date_layout: ISO8601_DATE.to_string(),
            end_bound: EndBound::Inclusive,
        }
    }
}

impl Settings {
    /// Reads the optional file, then lets `DATESPAN_*` variables override it.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        Self::load_with_prefix(path, ENVIRONMENT_PREFIX)
    }
    /// As [`Settings::load`], with `PREFIX_*` variables as the overrides.
    pub fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Settings> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let config = builder
            .add_source(Environment::with_prefix(prefix))
            .build()?;
        Ok(config.try_deserialize()?)
    }
    pub fn parse_date(&self, text: &str) -> Result<Date> {
        Date::parse_using_layout(&self.date_layout, text)
    }
    pub fn encode(&self, range: &Range) -> Result<String> {
        literal::encode(range, self.end_bound)
    }
}
