use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::kind_of;
use super::file::FileSource;
use super::source::{ConfigSource, LoadPolicy, LoadReport, SkippedSource};
use super::ConfigError;

/// The merged configuration mapping.
///
/// Sources are merged in the order they are loaded. Merging is shallow:
/// each top-level key of the incoming mapping replaces the existing value
/// wholesale, nested mappings included.
///
/// Serializes as the bare mapping, so it can be used directly as a template
/// context.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigTree {
    tree: Map<String, Value>,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites each key of `mapping` in the tree.
    pub fn merge(&mut self, mapping: Map<String, Value>) {
        self.tree.extend(mapping);
    }

    /// Like [`merge`](Self::merge), for a value whose shape is not known statically.
    ///
    /// A non-mapping is a caller bug and the tree is left untouched.
    pub fn merge_value(&mut self, value: Value) -> Result<(), ConfigError> {
        match value {
            Value::Object(mapping) => {
                self.merge(mapping);
                Ok(())
            }
            other => Err(ConfigError::NotAMapping {
                found: kind_of(&other),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tree.get(key)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.tree.get(key).unwrap_or(default)
    }

    /// The full merged mapping.
    pub fn tree(&self) -> &Map<String, Value> {
        &self.tree
    }

    pub fn into_tree(self) -> Map<String, Value> {
        self.tree
    }

    /// Loads one source and merges its mapping.
    pub fn load_source(&mut self, source: &dyn ConfigSource) -> Result<(), ConfigError> {
        let mapping = source.mapping()?;
        tracing::debug!(
            source = %source.describe(),
            keys = mapping.len(),
            "merging config source"
        );
        self.merge(mapping);
        Ok(())
    }

    /// Loads a YAML or JSON file and merges its top-level mapping.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        self.load_source(&FileSource::new(path))
    }

    /// Loads files strictly in the given order; later files win.
    ///
    /// Under [`LoadPolicy::Tolerant`] a failing file is logged, recorded in the
    /// report and skipped. Under [`LoadPolicy::Strict`] the first failure is
    /// returned for the caller to report; files before it have already been merged.
    pub fn load_files<I, P>(
        &mut self,
        paths: I,
        policy: LoadPolicy,
    ) -> Result<LoadReport, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = LoadReport::default();

        for path in paths {
            let path = path.as_ref();
            match self.load_file(path) {
                Ok(()) => report.loaded.push(path.to_path_buf()),
                Err(error) => match policy {
                    LoadPolicy::Strict => {
                        tracing::debug!(path = %path.display(), "required config file failed");
                        return Err(error);
                    }
                    LoadPolicy::Tolerant => {
                        if error.is_not_found() {
                            tracing::debug!(
                                path = %path.display(),
                                "optional config file not found"
                            );
                        } else {
                            tracing::warn!(
                                path = %path.display(),
                                "skipping optional config file: {error}"
                            );
                        }
                        report.skipped.push(SkippedSource {
                            path: path.to_path_buf(),
                            error,
                        });
                    }
                },
            }
        }

        Ok(report)
    }
}

impl From<Map<String, Value>> for ConfigTree {
    fn from(tree: Map<String, Value>) -> Self {
        Self { tree }
    }
}
