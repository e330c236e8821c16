// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Remote Data
//!
//! [`RemoteData`] represents a value that is fetched asynchronously by the
//! (external) effect layer and then read synchronously by selectors.
//!
//! ## Lifecycle
//!
//! ```text
//! NotAsked ──fetch──▶ Loading ──response──▶ Success(A) | Failure(E)
//!     ▲                                              │
//!     └──────────────────── invalidate ──────────────┘
//! ```
//!
//! ## Combination
//!
//! [`RemoteData::zip`] and [`RemoteData::collect_all`] combine several
//! values into one. The leftmost operand that is not `Success` decides the
//! result, so `[Success, Loading, Failure]` combines to `Loading`.
//!
//! ## JSON Shape
//!
//! ```json
//! { "status": "success", "data": [ ... ] }
//! { "status": "failure", "data": { "message": "timeout" } }
//! { "status": "loading" }
//! ```

use serde::{Deserialize, Serialize};

/// An asynchronously populated value: not requested, in flight, failed or present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum RemoteData<E, A> {
    /// No request has been made yet.
    NotAsked,
    /// A request is in flight.
    Loading,
    /// The request failed.
    Failure(E),
    /// The request succeeded.
    Success(A),
}

impl<E, A> RemoteData<E, A> {
    /// Wrap a resolved value.
    pub fn of(value: A) -> Self {
        RemoteData::Success(value)
    }

    pub fn is_not_asked(&self) -> bool {
        matches!(self, RemoteData::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteData::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    /// The success value, if any.
    pub fn success(self) -> Option<A> {
        match self {
            RemoteData::Success(a) => Some(a),
            _ => None,
        }
    }

    /// The failure value, if any.
    pub fn failure(self) -> Option<E> {
        match self {
            RemoteData::Failure(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<B, F>(self, f: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => RemoteData::Success(f(a)),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> RemoteData<G, A>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(f(e)),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    pub fn and_then<B, F>(self, f: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => f(a),
        }
    }

    /// The success value, or `default` for every other state.
    pub fn get_or_else(self, default: A) -> A {
        match self {
            RemoteData::Success(a) => a,
            _ => default,
        }
    }

    /// The success value, or `A::default()` for every other state.
    pub fn get_or_default(self) -> A
    where
        A: Default,
    {
        self.get_or_else(A::default())
    }

    /// Combine two values. The leftmost non-success operand wins.
    pub fn zip<B>(self, other: RemoteData<E, B>) -> RemoteData<E, (A, B)> {
        match (self, other) {
            (RemoteData::Success(a), RemoteData::Success(b)) => RemoteData::Success((a, b)),
            (RemoteData::Success(_), RemoteData::NotAsked) => RemoteData::NotAsked,
            (RemoteData::Success(_), RemoteData::Loading) => RemoteData::Loading,
            (RemoteData::Success(_), RemoteData::Failure(e)) => RemoteData::Failure(e),
            (RemoteData::NotAsked, _) => RemoteData::NotAsked,
            (RemoteData::Loading, _) => RemoteData::Loading,
            (RemoteData::Failure(e), _) => RemoteData::Failure(e),
        }
    }

    /// Combine a sequence of values into one, keeping order.
    ///
    /// Stops at the first operand that is not `Success` and returns its state.
    /// An empty sequence is `Success(vec![])`.
    pub fn collect_all<I>(items: I) -> RemoteData<E, Vec<A>>
    where
        I: IntoIterator<Item = RemoteData<E, A>>,
    {
        let mut values = Vec::new();
        for item in items {
            match item {
                RemoteData::Success(a) => values.push(a),
                RemoteData::NotAsked => return RemoteData::NotAsked,
                RemoteData::Loading => return RemoteData::Loading,
                RemoteData::Failure(e) => return RemoteData::Failure(e),
            }
        }
        RemoteData::Success(values)
    }
}

impl<E, A> Default for RemoteData<E, A> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    fn from(value: Result<A, E>) -> Self {
        match value {
            Ok(a) => RemoteData::Success(a),
            Err(e) => RemoteData::Failure(e),
        }
    }
}
