use std::path::PathBuf;

use serde_json::{Map, Value};

use super::ConfigError;

/// Anything that contributes one top-level mapping to a [`ConfigTree`](super::ConfigTree).
pub trait ConfigSource: std::fmt::Debug {
    /// Human-readable name for log lines.
    fn describe(&self) -> String;

    fn mapping(&self) -> Result<Map<String, Value>, ConfigError>;
}

/// How [`ConfigTree::load_files`](super::ConfigTree::load_files) reacts to a file that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Log the failure and continue with the next file. Used for default locations.
    Tolerant,
    /// Abort on the first failure. Used for files the user named explicitly.
    Strict,
}

/// A file that was skipped under [`LoadPolicy::Tolerant`].
#[derive(Debug)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub error: ConfigError,
}

/// Outcome of loading a sequence of files.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<PathBuf>,
    pub skipped: Vec<SkippedSource>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
