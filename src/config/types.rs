use std::time::Duration;

use serde::Deserialize;

use crate::args::OutputFormat;
use crate::args::parsers::parse_duration_value;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub requests: Option<u64>,
    pub delay: Option<DurationValue>,
    pub format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub headers: Option<Vec<String>>,
    pub timeout: Option<DurationValue>,
    pub follow_redirects: Option<bool>,
    pub concurrency: Option<usize>,
    pub export_json: Option<String>,
    pub export_csv: Option<String>,
    pub charts_path: Option<String>,
    pub no_color: Option<bool>,
}

/// A duration given either as a bare number of seconds or as text
/// with a unit suffix (`30s`, `500ms`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}
