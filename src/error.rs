// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Error types.
//!
//! Selectors never fail themselves: every outcome is a [`RemoteData`] value.
//! The errors here cover loading the coin registry and state snapshots, plus
//! [`FetchError`], the failure payload left behind by the fetch layer.
//!
//! [`RemoteData`]: crate::remote::RemoteData

use serde::{Deserialize, Serialize};

/// Failure recorded by the fetch layer for a remote slice of state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    /// Human-readable description.
    pub message: String,
    /// Backend error code, when the API returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Errors raised while building a [`CoinRegistry`](crate::registry::CoinRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read coin registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid coin registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate coin symbol: {0}")]
    DuplicateSymbol(String),

    #[error("Coin config with empty symbol")]
    EmptySymbol,
}

/// Errors raised while loading a [`WalletState`](crate::state::WalletState) snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Invalid wallet state JSON: {0}")]
    Json(#[from] serde_json::Error),
}
