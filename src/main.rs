use std::process::ExitCode;

use clap::Parser;
use djinja::cli::Cli;
use djinja::{app, logging, FunctionRegistry};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("dj: logging disabled: {e}");
    }
    tracing::debug!(?cli, "parsed arguments");

    match app::run(&cli.options(), &FunctionRegistry::with_builtins()) {
        Ok(()) => {
            tracing::info!("Done... Bye :]");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
