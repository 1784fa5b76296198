//! Command-line interface for `dj`.

use std::path::PathBuf;

use clap::Parser;

use crate::app::Options;

/// Render a Dockerfile template from layered YAML/JSON configuration
#[derive(Debug, Parser)]
#[command(name = "dj", author, version, about, long_about = None)]
pub struct Cli {
    /// Template to render
    #[arg(short, long, value_name = "TEMPLATE")]
    pub dockerfile: PathBuf,

    /// Where to write the rendered Dockerfile
    #[arg(short, long, value_name = "PATH")]
    pub outfile: PathBuf,

    /// Config file (YAML or JSON) loaded after ~/.dj.* and ./.dj.*; repeatable
    #[arg(short, long = "config", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Variable override in key=value form, applied last; repeatable
    #[arg(short, long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Do not load ~/.dj.yaml, ~/.dj.json, ./.dj.yaml or ./.dj.json
    #[arg(long)]
    pub no_default_config: bool,

    /// Log verbosity: -v ERROR, -vvv WARN, -vvvv INFO, -vvvvv DEBUG
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            dockerfile: self.dockerfile.clone(),
            outfile: self.outfile.clone(),
            config_files: self.config.clone(),
            overrides: self.env.clone(),
            no_default_files: self.no_default_config,
        }
    }
}
