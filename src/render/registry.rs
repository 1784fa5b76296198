use std::collections::BTreeMap;
use std::sync::Arc;

use minijinja::value::{Rest, Value};
use minijinja::{Environment, Error, ErrorKind};

/// A template callable. Filters receive the piped value as the first argument.
pub type Callable = Arc<dyn Fn(&[Value]) -> Result<Value, Error> + Send + Sync>;

/// Named filters and globals made available to every rendered template.
///
/// Everything is registered up front by the application; nothing is loaded
/// at runtime.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    filters: BTreeMap<String, Callable>,
    globals: BTreeMap<String, Callable>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the functions `dj` ships with.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.add_global("env", env_var);
        registry
    }

    pub fn add_filter<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(%name, "registering template filter");
        self.filters.insert(name, Arc::new(f));
        self
    }

    pub fn add_global<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(%name, "registering template global");
        self.globals.insert(name, Arc::new(f));
        self
    }

    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    pub fn global_names(&self) -> impl Iterator<Item = &str> {
        self.globals.keys().map(String::as_str)
    }

    /// Installs every registered callable into `env`, replacing same-named entries.
    pub fn install(&self, env: &mut Environment<'_>) {
        for (name, f) in &self.filters {
            let f = Arc::clone(f);
            env.add_filter(name.clone(), move |args: Rest<Value>| f(args.as_slice()));
        }
        for (name, f) in &self.globals {
            let f = Arc::clone(f);
            env.add_function(name.clone(), move |args: Rest<Value>| f(args.as_slice()));
        }
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("globals", &self.globals.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// `env(name, default?)`: reads a process environment variable.
fn env_var(args: &[Value]) -> Result<Value, Error> {
    let name = args.first().and_then(Value::as_str).ok_or_else(|| {
        Error::new(
            ErrorKind::MissingArgument,
            "env() expects a variable name as its first argument",
        )
    })?;

    match std::env::var(name) {
        Ok(value) => Ok(Value::from(value)),
        Err(_) => Ok(args.get(1).cloned().unwrap_or(Value::UNDEFINED)),
    }
}
