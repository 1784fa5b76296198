pub mod app;
pub mod cli;
pub mod config;
mod error;
pub mod logging;
pub mod render;

pub use config::{ConfigError, ConfigTree, Loader};
pub use error::Error;
pub use render::{FunctionRegistry, Renderer};
