// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! by hosts embedding the selectors. Configuration is read from the
//! environment once at startup; selectors themselves never consult it.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `COIN_REGISTRY_PATH` | JSON file with the static coin configs | `coins.json` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::env;
use std::path::PathBuf;

/// Environment variable name for the coin registry file path.
///
/// The file holds a JSON array of coin configs and is loaded once, before
/// any selector runs.
pub const COIN_REGISTRY_PATH_ENV: &str = "COIN_REGISTRY_PATH";

/// Default coin registry path, relative to the working directory.
pub const DEFAULT_COIN_REGISTRY_PATH: &str = "coins.json";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-field output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a format name (case-insensitive). Unknown values fall back to `Pretty`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    /// Read `LOG_FORMAT` from the environment.
    pub fn from_env() -> Self {
        env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Resolve the coin registry path from `COIN_REGISTRY_PATH`.
pub fn coin_registry_path() -> PathBuf {
    env::var(COIN_REGISTRY_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_COIN_REGISTRY_PATH))
}
