// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Conlog error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a message to stdout or stderr failed.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type using conlog Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes for the conlog binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Configuration or argument error
    ConfigError = 2,
    /// I/O failure
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Io { .. } | Error::Write(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
