//! Layered configuration loading.
//!
//! A [`ConfigTree`] is built from default files, user files and
//! `key=value` overrides, merged shallowly in that order.

mod builder;
mod defaults;
mod error;
mod file;
mod overrides;
mod source;
mod tree;

pub use builder::Loader;
pub use defaults::{default_config_paths, default_config_paths_in, DEFAULT_FILE_NAMES};
pub use error::{ConfigError, FileError};
pub use file::{parse_mapping, FileSource};
pub use overrides::{parse_overrides, Override, OverrideSource};
pub use source::{ConfigSource, LoadPolicy, LoadReport, SkippedSource};
pub use tree::ConfigTree;
