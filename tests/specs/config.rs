// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for config file handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > quiet = true in the config file suppresses info
#[test]
fn config_quiet_suppresses_info() {
    let dir = ConfigDir::with("version = 1\nquiet = true\n");

    conlog(&["--config", &dir.config_path(), "info", "hello"])
        .passes()
        .stdout_eq("");
}

/// > quiet config does not affect cli
#[test]
fn config_quiet_keeps_cli() {
    let dir = ConfigDir::with("version = 1\nquiet = true\n");

    conlog(&["-C", &dir.config_path(), "cli", "hello"])
        .passes()
        .stdout_eq("hello\n");
}

/// > config path may come from CONLOG_CONFIG
#[test]
fn config_from_env() {
    let dir = ConfigDir::with("version = 1\nquiet = true\n");

    conlog(&["info", "hello"])
        .env("CONLOG_CONFIG", &dir.config_path())
        .passes()
        .stdout_eq("");
}

/// > --quiet wins over a config that leaves info enabled
#[test]
fn quiet_flag_overrides_config() {
    let dir = ConfigDir::with("version = 1\nquiet = false\n");

    conlog(&["-C", &dir.config_path(), "--quiet", "info", "hello"])
        .passes()
        .stdout_eq("");
}

/// > unsupported config version exits with code 2
#[test]
fn unsupported_version_is_config_error() {
    let dir = ConfigDir::with("version = 7\n");

    conlog(&["-C", &dir.config_path(), "info", "hello"])
        .exits(2)
        .stdout_eq("")
        .stderr_has("unsupported config version 7");
}

/// > unknown config keys are rejected
#[test]
fn unknown_key_is_config_error() {
    let dir = ConfigDir::with("version = 1\ntimestamps = true\n");

    conlog(&["-C", &dir.config_path(), "info", "hello"])
        .exits(2)
        .stderr_has("timestamps");
}

/// > missing config file exits with code 3
#[test]
fn missing_config_is_io_error() {
    let dir = ConfigDir::with("version = 1\n");
    let missing = dir.path().join("absent.toml");

    conlog(&["-C", &missing.display().to_string(), "info", "hello"])
        .exits(3)
        .stderr_has("conlog: io error");
}
