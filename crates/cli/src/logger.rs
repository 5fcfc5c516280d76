// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message dispatch to stdout and stderr.
//!
//! A [`Logger`] owns its activation flag and its two output streams.
//! Only `info` honors the flag; `error`, `cli` and `debug` always write.
//!
//! Each stream sits behind a mutex and a message is written and flushed
//! while the lock is held, so messages from concurrent callers never
//! interleave. Ordering between stdout and stderr is not coordinated.
//!
//! Write failures are returned unchanged. There is no retry and no
//! fallback stream.

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::format::{format, format_debug};

/// Destination stream of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The four dispatch entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational output, suppressed while the logger is disabled.
    Info,
    /// Diagnostics, always written to stderr.
    Error,
    /// Command responses that must reach the user even when quiet.
    Cli,
    /// Developer output, prefixed with [`crate::DEBUG_PREFIX`].
    Debug,
}

impl Severity {
    /// Stream this severity writes to.
    pub fn stream(self) -> Stream {
        match self {
            Severity::Error => Stream::Stderr,
            Severity::Info | Severity::Cli | Severity::Debug => Stream::Stdout,
        }
    }

    /// Whether the activation flag can suppress this severity.
    pub fn is_gated(self) -> bool {
        matches!(self, Severity::Info)
    }

    fn render(self, values: &[&dyn Display]) -> String {
        match self {
            Severity::Debug => format_debug(values),
            Severity::Info | Severity::Error | Severity::Cli => format(values),
        }
    }
}

/// Formats messages and writes them to stdout or stderr.
pub struct Logger<O: Write = Stdout, E: Write = Stderr> {
    enabled: AtomicBool,
    out: Mutex<O>,
    err: Mutex<E>,
}

impl Logger {
    /// Logger writing to the process stdout and stderr.
    pub fn new(enabled: bool) -> Self {
        Self::with_writers(enabled, io::stdout(), io::stderr())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<O: Write, E: Write> Logger<O, E> {
    /// Logger writing to the given stdout and stderr replacements.
    pub fn with_writers(enabled: bool, out: O, err: E) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn informational output on or off. Takes effect on the next `info` call.
    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::Relaxed);
        if previous != enabled {
            tracing::debug!(enabled, "logger activation changed");
        }
    }

    /// Write to stdout if the logger is enabled.
    pub fn info(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.emit(Severity::Info, values)
    }

    /// Write to stderr regardless of the activation flag.
    pub fn error(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.emit(Severity::Error, values)
    }

    /// Write to stdout regardless of the activation flag.
    pub fn cli(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.emit(Severity::Cli, values)
    }

    /// Write the debug prefix and the message to stdout regardless of the activation flag.
    pub fn debug(&self, values: &[&dyn Display]) -> io::Result<()> {
        self.emit(Severity::Debug, values)
    }

    /// Format and write one message for `severity`.
    pub fn emit(&self, severity: Severity, values: &[&dyn Display]) -> io::Result<()> {
        if severity.is_gated() && !self.is_enabled() {
            return Ok(());
        }

        let message = severity.render(values);
        match severity.stream() {
            Stream::Stdout => write_locked(&self.out, &message),
            Stream::Stderr => write_locked(&self.err, &message),
        }
    }

    /// Consume the logger and return its writers.
    pub fn into_writers(self) -> (O, E) {
        let out = self.out.into_inner().unwrap_or_else(PoisonError::into_inner);
        let err = self.err.into_inner().unwrap_or_else(PoisonError::into_inner);
        (out, err)
    }
}

/// Write a whole message and flush while holding the stream lock.
fn write_locked<W: Write>(stream: &Mutex<W>, message: &str) -> io::Result<()> {
    // A panic in another writer leaves the stream usable.
    let mut writer = stream.lock().unwrap_or_else(PoisonError::into_inner);
    writer.write_all(message.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
