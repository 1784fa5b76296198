//! Template rendering with a [`ConfigTree`] as context.

mod registry;

use std::path::Path;

use minijinja::Environment;

use crate::config::ConfigTree;
use crate::Error;

pub use registry::{Callable, FunctionRegistry};

/// Renders templates with the registered filters and globals installed.
///
/// Trailing newlines are preserved so a rendered Dockerfile keeps the exact
/// line structure of its template.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(registry: &FunctionRegistry) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        registry.install(&mut env);
        Self { env }
    }

    /// Renders `source`; every top-level key of `tree` is a template variable.
    pub fn render_str(
        &self,
        name: &str,
        source: &str,
        tree: &ConfigTree,
    ) -> Result<String, minijinja::Error> {
        self.env.render_named_str(name, source, tree)
    }

    /// Reads a template from disk and renders it.
    pub fn render_file(&self, path: &Path, tree: &ConfigTree) -> Result<String, Error> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::FileProcessing {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(context = ?tree.tree(), "rendering template");

        self.render_str(&path.display().to_string(), &source, tree)
            .map_err(|source| Error::Render {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::value::Value;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> ConfigTree {
        let mut tree = ConfigTree::new();
        tree.merge_value(value).unwrap();
        tree
    }

    #[test]
    fn test_substitutes_config_keys() {
        let renderer = Renderer::new(&FunctionRegistry::new());
        let context = tree(json!({"image": "debian", "tag": "12"}));
        let out = renderer
            .render_str("t", "FROM {{ image }}:{{ tag }}\n", &context)
            .unwrap();

        assert_eq!(out, "FROM debian:12\n");
    }

    #[test]
    fn test_nested_values_and_loops() {
        let renderer = Renderer::new(&FunctionRegistry::new());
        let source = "{% for p in ports %}EXPOSE {{ p }}\n{% endfor %}USER {{ user.name }}";
        let out = renderer
            .render_str("t", source, &tree(json!({"ports": [80, 443], "user": {"name": "app"}})))
            .unwrap();

        assert_eq!(out, "EXPOSE 80\nEXPOSE 443\nUSER app");
    }

    #[test]
    fn test_registered_filter_and_global() {
        let mut registry = FunctionRegistry::new();
        registry
            .add_filter("shout", |args: &[Value]| {
                let s = args.first().and_then(Value::as_str).unwrap_or_default();
                Ok(Value::from(s.to_uppercase()))
            })
            .add_global("lower", |args: &[Value]| {
                let s = args.first().and_then(Value::as_str).unwrap_or_default();
                Ok(Value::from(s.to_lowercase()))
            });

        let renderer = Renderer::new(&registry);
        let out = renderer
            .render_str("t", "{{ 'foo'|shout }} : {{ lower('BAR') }}", &ConfigTree::new())
            .unwrap();

        assert_eq!(out, "FOO : bar");
    }

    #[test]
    fn test_missing_template_is_file_processing_error() {
        let renderer = Renderer::new(&FunctionRegistry::new());
        let err = renderer
            .render_file(Path::new("/tmp/foobar/Dockerfile.jinja"), &ConfigTree::new())
            .unwrap_err();

        assert!(matches!(err, Error::FileProcessing { .. }));
    }

    #[test]
    fn test_syntax_error_is_render_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile.jinja");
        std::fs::write(&path, "{% if %}").unwrap();

        let renderer = Renderer::new(&FunctionRegistry::new());
        let err = renderer.render_file(&path, &ConfigTree::new()).unwrap_err();

        assert!(matches!(err, Error::Render { .. }));
    }
}
