use std::str::FromStr;

use serde_json::{Map, Value};

use super::source::ConfigSource;
use super::ConfigError;

/// A single `key=value` override supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub key: String,
    pub value: String,
}

impl FromStr for Override {
    type Err = ConfigError;

    /// Accepts exactly one `=` with a non-empty key and a non-empty value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidOverride(s.to_string());

        let mut parts = s.split('=');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        if key.is_empty() || value.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Parses every entry, failing on the first malformed one.
pub fn parse_overrides<I, S>(entries: I) -> Result<Vec<Override>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries.into_iter().map(|s| s.as_ref().parse()).collect()
}

/// Overrides as a flat one-level mapping. Values are kept as strings.
#[derive(Debug, Clone, Default)]
pub struct OverrideSource {
    overrides: Vec<Override>,
}

impl OverrideSource {
    pub fn new(overrides: Vec<Override>) -> Self {
        Self { overrides }
    }
}

impl ConfigSource for OverrideSource {
    fn describe(&self) -> String {
        format!("{} command-line override(s)", self.overrides.len())
    }

    fn mapping(&self) -> Result<Map<String, Value>, ConfigError> {
        Ok(self
            .overrides
            .iter()
            .map(|o| (o.key.clone(), Value::String(o.value.clone())))
            .collect())
    }
}
