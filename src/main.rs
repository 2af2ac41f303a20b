//! ulstools CLI
//!
//! Usage: ulstools [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   hetu check|age|info   Finnish personal identity codes
//!   running               Detect a second instance of a console script
//!   tempname              Reserve a unique temp file name
//!   version               Show version

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use ulstools::config::{Config, OutputFormat};
use ulstools::logging::init_logging;

use cli::Cli;
use commands::Context;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let project_root = std::env::current_dir().ok();
    let (config, warnings) = Config::load_or_default(project_root.as_deref());

    init_logging(cli.verbose, config.output.verbosity);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let ctx = Context { format, config };

    let success = commands::dispatch(cli.command, &ctx)?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
