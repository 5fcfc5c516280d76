// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conlog CLI entry point.

use std::fmt::Display;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use conlog::cli::Cli;
use conlog::env::names;
use conlog::error::ExitCode;
use conlog::{Config, Logger, config};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::CONLOG_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("conlog: {}", e);
            match e.downcast_ref::<conlog::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        // Show help for bare invocation
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    let config = match &cli.config {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(path)?
        }
        None => Config::default(),
    };

    let enabled = config.enabled() && !cli.quiet;
    tracing::debug!(enabled, severity = ?command.severity(), "dispatching");

    let logger = Logger::new(enabled);
    let values: Vec<&dyn Display> = command.values().iter().map(|v| v as &dyn Display).collect();
    logger
        .emit(command.severity(), &values)
        .map_err(conlog::Error::from)?;

    Ok(ExitCode::Success)
}
