// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal console logging.
//!
//! Formats a list of `Display` values into one newline-terminated line and
//! writes it to stdout or stderr depending on the entry point:
//!
//! | Entry point | Stream | Honors activation flag |
//! |-------------|--------|------------------------|
//! | `info`      | stdout | yes                    |
//! | `error`     | stderr | no                     |
//! | `cli`       | stdout | no                     |
//! | `debug`     | stdout | no, prefixed with `===(debug)===> ` |
//!
//! ```
//! use conlog::Logger;
//!
//! let logger = Logger::with_writers(false, Vec::<u8>::new(), Vec::<u8>::new());
//! conlog::info!(logger, "hidden").unwrap();
//! conlog::cli!(logger, "shown", 1).unwrap();
//! let (out, _) = logger.into_writers();
//! assert_eq!(out, b"shown 1\n");
//! ```

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod format;
pub mod logger;
mod macros;

pub use cli::{Cli, Command, MessageArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use format::{DEBUG_PREFIX, format, format_debug};
pub use logger::{Logger, Severity, Stream};
