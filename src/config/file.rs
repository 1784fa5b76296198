//! File-based configuration source.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::error::kind_of;
use super::source::ConfigSource;
use super::{ConfigError, FileError};

/// A configuration source that loads a YAML or JSON file.
///
/// The format is detected from the content, not the extension: the text is
/// parsed as YAML first and as JSON only if that fails. When both fail the
/// YAML error is reported since it is usually the more precise of the two.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn mapping(&self) -> Result<Map<String, Value>, ConfigError> {
        load_config_file(&self.path).map_err(|source| ConfigError::FileProcessing {
            path: self.path.clone(),
            source,
        })
    }
}

fn load_config_file(path: &Path) -> Result<Map<String, Value>, FileError> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => FileError::Encoding(e),
        _ => FileError::Read(e),
    })?;
    parse_mapping(&contents)
}

/// Parses YAML with `<<` merge keys expanded.
fn parse_yaml(contents: &str) -> Result<Value, serde_yaml::Error> {
    let mut value: serde_yaml::Value = serde_yaml::from_str(contents)?;
    value.apply_merge()?;
    stringify_keys(&mut value);
    serde_yaml::from_value(value)
}

/// Scalar keys such as `80:` or `true:` become their string form.
fn stringify_keys(value: &mut serde_yaml::Value) {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Mapping(mapping) => {
            let entries = std::mem::take(mapping);
            for (key, mut v) in entries {
                stringify_keys(&mut v);
                let key = match key {
                    Yaml::Number(n) => Yaml::String(n.to_string()),
                    Yaml::Bool(b) => Yaml::String(b.to_string()),
                    other => other,
                };
                mapping.insert(key, v);
            }
        }
        Yaml::Sequence(items) => items.iter_mut().for_each(stringify_keys),
        Yaml::Tagged(tagged) => stringify_keys(&mut tagged.value),
        _ => {}
    }
}

/// Parses YAML or JSON text that must hold a mapping at the top level.
pub fn parse_mapping(contents: &str) -> Result<Map<String, Value>, FileError> {
    let value = match parse_yaml(contents) {
        Ok(value) => value,
        Err(yaml_err) => match serde_json::from_str::<Value>(contents) {
            Ok(value) => value,
            Err(_) => return Err(FileError::Syntax(yaml_err)),
        },
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(FileError::NotAMapping(kind_of(&other))),
    }
}
