// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by the conlog binary.

pub mod names {
    /// Environment variable: suppresses informational output when set to anything
    /// other than empty, `0`, `false`, `no`, `off`, `n` or `f`.
    pub const CONLOG_QUIET: &str = "CONLOG_QUIET";
    /// Environment variable: path of the config file.
    pub const CONLOG_CONFIG: &str = "CONLOG_CONFIG";
    /// Environment variable: configures tracing log filter.
    pub const CONLOG_LOG: &str = "CONLOG_LOG";
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
