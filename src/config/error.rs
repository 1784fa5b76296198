use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("couldn't process config file '{path}': {source}")]
    FileProcessing {
        path: PathBuf,
        source: FileError,
    },

    #[error("var '{0}' is not of format 'key=value'")]
    InvalidOverride(String),

    #[error("data tree to merge must be a mapping, got {found}")]
    NotAMapping { found: &'static str },
}

impl ConfigError {
    /// Returns true if the file could not be opened or read at all.
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            ConfigError::FileProcessing {
                source: FileError::Read(_),
                ..
            }
        )
    }

    /// Returns true if the file was read but did not hold a mapping.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ConfigError::FileProcessing {
                source: FileError::Encoding(_) | FileError::Syntax(_) | FileError::NotAMapping(_),
                ..
            }
        )
    }

    /// Returns true for a missing file, the usual reason to skip a default location.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::FileProcessing {
                source: FileError::Read(e),
                ..
            } if e.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Underlying cause of a [`ConfigError::FileProcessing`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FileError {
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("content is not valid UTF-8: {0}")]
    Encoding(std::io::Error),

    #[error("not valid YAML or JSON: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("top-level value must be a mapping, got {0}")]
    NotAMapping(&'static str),
}

/// Short name of a value's kind, used in error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "sequence",
        serde_json::Value::Object(_) => "mapping",
    }
}
