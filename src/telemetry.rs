// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Tracing subscriber setup for hosts embedding the selectors.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG` (falling back to [`DEFAULT_LOG_FILTER`]) and the given
/// output format. Returns `false` if a subscriber was already installed.
pub fn init_tracing(format: LogFormat) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).compact())
            .try_init(),
    };

    result.is_ok()
}

/// Install the subscriber using `LOG_FORMAT` from the environment.
pub fn init_tracing_from_env() -> bool {
    init_tracing(LogFormat::from_env())
}
