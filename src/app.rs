//! One `dj` invocation: build the config tree, render, write.

use std::path::PathBuf;

use crate::config::{parse_overrides, ConfigTree, Loader};
use crate::render::{FunctionRegistry, Renderer};
use crate::Error;

/// Inputs for a single run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Template to render.
    pub dockerfile: PathBuf,
    /// Where the rendered output is written.
    pub outfile: PathBuf,
    /// User config files, loaded after the default locations.
    pub config_files: Vec<PathBuf>,
    /// Raw `key=value` overrides, merged last.
    pub overrides: Vec<String>,
    /// Skip `~/.dj.*` and `./.dj.*`.
    pub no_default_files: bool,
}

/// Builds the config tree for `options`.
///
/// Overrides are validated before any file is touched.
pub fn build_config(options: &Options) -> Result<ConfigTree, Error> {
    let overrides = parse_overrides(&options.overrides)?;

    let mut loader = Loader::new();
    if !options.no_default_files {
        loader = loader.with_default_files();
    }

    tracing::debug!("building config");
    let tree = loader
        .with_files(&options.config_files)
        .with_overrides(overrides)
        .build()?;
    tracing::debug!("config building is done");

    Ok(tree)
}

/// Runs the full pipeline. Never exits the process; the caller maps errors.
pub fn run(options: &Options, registry: &FunctionRegistry) -> Result<(), Error> {
    let tree = build_config(options)?;
    let renderer = Renderer::new(registry);

    tracing::info!(template = %options.dockerfile.display(), "rendering Dockerfile");
    let rendered = renderer.render_file(&options.dockerfile, &tree)?;
    tracing::debug!("rendered output:\n{rendered}");

    tracing::info!(outfile = %options.outfile.display(), "writing output");
    std::fs::write(&options.outfile, rendered).map_err(|source| Error::FileProcessing {
        path: options.outfile.clone(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn options_in(dir: &TempDir) -> Options {
        Options {
            dockerfile: dir.path().join("Dockerfile.jinja"),
            outfile: dir.path().join("Dockerfile"),
            no_default_files: true,
            ..Options::default()
        }
    }

    #[test]
    fn test_renders_from_user_config() {
        let dir = TempDir::new().unwrap();
        let options = Options {
            config_files: vec![dir.path().join("conf.json")],
            ..options_in(&dir)
        };
        fs::write(&options.dockerfile, "{{ barfoo }}").unwrap();
        fs::write(&options.config_files[0], r#"{"barfoo": "foobar"}"#).unwrap();

        run(&options, &FunctionRegistry::with_builtins()).unwrap();

        assert_eq!(fs::read_to_string(&options.outfile).unwrap(), "foobar");
    }

    #[test]
    fn test_overrides_beat_config_files() {
        let dir = TempDir::new().unwrap();
        let options = Options {
            config_files: vec![dir.path().join("conf.yaml")],
            overrides: vec!["foo=bar".into(), "opa=1".into()],
            ..options_in(&dir)
        };
        fs::write(&options.config_files[0], "foo: from-file\nkeep: yes-please\n").unwrap();

        let tree = build_config(&options).unwrap();

        assert_eq!(tree.get("foo"), Some(&json!("bar")));
        assert_eq!(tree.get("opa"), Some(&json!("1")));
        assert_eq!(tree.get("keep"), Some(&json!("yes-please")));
    }

    #[test]
    fn test_bad_override_fails_before_loading_files() {
        let dir = TempDir::new().unwrap();
        let options = Options {
            config_files: vec![dir.path().join("missing.yaml")],
            overrides: vec!["foo:bar".into()],
            ..options_in(&dir)
        };

        let err = build_config(&options).unwrap_err();

        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidOverride(ref s)) if s == "foo:bar"
        ));
    }

    #[test]
    fn test_missing_user_config_aborts_without_output() {
        let dir = TempDir::new().unwrap();
        let options = Options {
            config_files: vec![dir.path().join("missing.yaml")],
            ..options_in(&dir)
        };
        fs::write(&options.dockerfile, "FROM scratch").unwrap();

        let err = run(&options, &FunctionRegistry::new()).unwrap_err();

        assert!(matches!(err, Error::Config(ref e) if e.is_read_error()));
        assert!(!options.outfile.exists());
    }

    #[test]
    fn test_unwritable_outfile_is_file_processing_error() {
        let dir = TempDir::new().unwrap();
        let options = Options {
            outfile: dir.path().join("no-such-dir").join("Dockerfile"),
            ..options_in(&dir)
        };
        fs::write(&options.dockerfile, "FROM scratch\n").unwrap();

        let err = run(&options, &FunctionRegistry::new()).unwrap_err();

        assert!(matches!(err, Error::FileProcessing { ref path, .. } if path == &options.outfile));
    }
}
