mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let envelope = commands::run(&cli)?;
    output::render(&envelope, cli.format, cli.pretty, cli.chart())?;
    commands::check_strict(&envelope, cli.strict)?;

    Ok(ExitCode::SUCCESS)
}
