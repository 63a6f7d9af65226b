//! `hikingquests` command-line entry point.
//!
//! # Responsibility
//! - Parse configuration, start logging, run one command.
//! - Print exactly one JSON envelope to stdout and exit non-zero on failure.

mod api;
mod config;

use clap::Parser;
use config::{Cli, Config};
use hikingquests_core::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("hikingquests: {err}");
        return ExitCode::FAILURE;
    }

    let response = api::run(&config, cli.command);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("hikingquests: failed to encode response: {err}");
            return ExitCode::FAILURE;
        }
    }

    if response.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
