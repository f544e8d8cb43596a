mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use cle::cli::Cli;
use cle::ExportError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            // Selector errors exit with 2 so callers can tell a bad invocation from bad data
            let code = err
                .downcast_ref::<ExportError>()
                .map(ExportError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
