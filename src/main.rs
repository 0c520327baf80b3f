//! modbuild CLI
//!
//! Usage: modbuild [OPTIONS] [OPTION_STRING]
//!
//! Copies each module's private references into its output directory and
//! prunes build byproducts. Exit code 1 when any file operation failed.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use modbuild::config::Config;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let (config, warnings) = match Config::load_or_default(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init_logging(None, cli.verbose);
            return Err(e.into());
        }
    };
    logging::init_logging(config.output.log_filter.as_deref(), cli.verbose);

    let report = commands::deploy::cmd_deploy(cli, &config, &warnings)?;
    Ok(report.is_success())
}
