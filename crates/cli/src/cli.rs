// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};

use crate::env::names;
use crate::logger::Severity;

/// Print values to stdout or stderr the way conlog's logger does
#[derive(Parser)]
#[command(name = "conlog")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = names::CONLOG_CONFIG)]
    pub config: Option<PathBuf>,

    /// Suppress informational output
    #[arg(
        short,
        long,
        global = true,
        env = names::CONLOG_QUIET,
        value_parser = FalseyValueParser::new()
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print to stdout unless quiet
    Info(MessageArgs),
    /// Print to stderr
    Error(MessageArgs),
    /// Print to stdout even when quiet
    Cli(MessageArgs),
    /// Print to stdout with the debug marker
    Debug(MessageArgs),
}

#[derive(clap::Args)]
pub struct MessageArgs {
    /// Values to print, joined by spaces
    #[arg(value_name = "VALUE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

impl Command {
    /// Logger entry point this command maps to.
    pub fn severity(&self) -> Severity {
        match self {
            Command::Info(_) => Severity::Info,
            Command::Error(_) => Severity::Error,
            Command::Cli(_) => Severity::Cli,
            Command::Debug(_) => Severity::Debug,
        }
    }

    /// Values to format into the message.
    pub fn values(&self) -> &[String] {
        match self {
            Command::Info(args) | Command::Error(args) | Command::Cli(args) | Command::Debug(args) => {
                &args.values
            }
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
