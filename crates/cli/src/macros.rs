// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Variadic front ends for the [`crate::Logger`] entry points.
//!
//! Each macro takes a logger followed by any number of `Display` values
//! and evaluates to the `io::Result<()>` of the underlying call.
//!
//! ```
//! use conlog::Logger;
//!
//! let logger = Logger::with_writers(true, Vec::<u8>::new(), Vec::<u8>::new());
//! conlog::error!(logger, "bad", 42).unwrap();
//! let (_, err) = logger.into_writers();
//! assert_eq!(err, b"bad 42\n");
//! ```

/// Write an informational message if the logger is enabled.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Write a message to stderr.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Write a message to stdout regardless of the activation flag.
#[macro_export]
macro_rules! cli {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.cli(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Write a debug-prefixed message to stdout.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
