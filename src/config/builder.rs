use std::path::{Path, PathBuf};

use super::defaults::default_config_paths;
use super::overrides::{Override, OverrideSource};
use super::source::LoadPolicy;
use super::{ConfigError, ConfigTree};

/// A layer in the loading pipeline.
#[derive(Debug)]
enum Layer {
    Files { paths: Vec<PathBuf>, policy: LoadPolicy },
    Overrides(Vec<Override>),
}

/// Builder that assembles a [`ConfigTree`] from layered sources.
///
/// Layers are applied in registration order, so later layers override
/// earlier ones key by key. The usual order for `dj` is default locations,
/// then files named by the user, then command-line overrides:
///
/// ```no_run
/// use djinja::config::{parse_overrides, Loader};
///
/// let overrides = parse_overrides(["tag=latest"])?;
/// let tree = Loader::new()
///     .with_default_files()
///     .with_files(["deploy.yaml"])
///     .with_overrides(overrides)
///     .build()?;
/// # Ok::<(), djinja::config::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "loaders do nothing until .build() is called"]
pub struct Loader {
    layers: Vec<Layer>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the default locations (see [`default_config_paths`]), tolerating failures.
    pub fn with_default_files(self) -> Self {
        self.with_optional_files(default_config_paths())
    }

    /// Adds files that may be absent or broken; failures are logged and skipped.
    pub fn with_optional_files<I, P>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.with_layer(paths, LoadPolicy::Tolerant)
    }

    /// Adds files that must load; any failure aborts [`build`](Self::build).
    pub fn with_files<I, P>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.with_layer(paths, LoadPolicy::Strict)
    }

    pub fn with_overrides(mut self, overrides: Vec<Override>) -> Self {
        self.layers.push(Layer::Overrides(overrides));
        self
    }

    fn with_layer<I, P>(mut self, paths: I, policy: LoadPolicy) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths = paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        self.layers.push(Layer::Files { paths, policy });
        self
    }

    pub fn build(self) -> Result<ConfigTree, ConfigError> {
        let mut tree = ConfigTree::new();

        for layer in self.layers {
            match layer {
                Layer::Files { paths, policy } => {
                    tracing::debug!(?policy, files = ?paths, "loading config files");
                    tree.load_files(&paths, policy)?;
                }
                Layer::Overrides(overrides) => {
                    tree.load_source(&OverrideSource::new(overrides))?;
                }
            }
        }

        Ok(tree)
    }
}
