// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! LRU memoization for multi-coin account aggregation.
//!
//! Results are keyed by the snapshot revision and the query, so repeated
//! renders over an unchanged snapshot reuse the previous mapping. Snapshots
//! with revision `0` are unversioned and always recomputed. A cache belongs to
//! one [`CoinRegistry`](crate::registry::CoinRegistry); build a new one if the
//! registry changes.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use tracing::debug;

use crate::aggregator::{get_coin_accounts_remote, AccountsByCoin};
use crate::remote::RemoteData;
use crate::selectors::{AccountQuery, SelectorContext};

/// Default number of (revision, query) entries kept.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Revision of a snapshot whose owner does not track changes.
const UNVERSIONED: u64 = 0;

type CacheKey = (u64, AccountQuery);

/// In-process LRU cache over [`get_coin_accounts_remote`].
pub struct CoinAccountsCache {
    cache: Mutex<LruCache<CacheKey, AccountsByCoin>>,
}

impl Default for CoinAccountsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl CoinAccountsCache {
    /// Create a cache holding at most `capacity` entries (minimum one).
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }

    /// Aggregated accounts for `query`, served from cache when the snapshot
    /// revision is unchanged.
    ///
    /// Loading results are returned as an empty mapping and never cached.
    /// Unversioned snapshots bypass the cache entirely.
    pub fn get_coin_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        query: &AccountQuery,
    ) -> AccountsByCoin {
        if ctx.state.revision == UNVERSIONED {
            debug!("Unversioned snapshot, skipping coin accounts cache");
            return get_coin_accounts_remote(ctx, query).get_or_default();
        }

        let key = (ctx.state.revision, query.clone());

        if let Ok(mut cache) = self.cache.lock() {
            if let Some(hit) = cache.get(&key) {
                return hit.clone();
            }
        }

        match get_coin_accounts_remote(ctx, query) {
            RemoteData::Success(accounts) => {
                debug!(revision = key.0, coins = accounts.len(), "Caching coin accounts");
                if let Ok(mut cache) = self.cache.lock() {
                    cache.put(key, accounts.clone());
                }
                accounts
            }
            RemoteData::Loading | RemoteData::NotAsked | RemoteData::Failure(_) => {
                AccountsByCoin::new()
            }
        }
    }

    /// Drop every cached entry.
    pub fn invalidate(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::test_support::*;
    use crate::state::WalletState;

    fn btc_state(revision: u64, balance: u128) -> WalletState {
        let mut state = WalletState::new();
        state.revision = revision;
        state
            .wallet
            .hd_accounts
            .insert("BTC".into(), RemoteData::of(vec![hd(0, balance)]));
        state
    }

    #[test]
    fn same_revision_hits_cache() {
        let registry = registry();
        let cache = CoinAccountsCache::new(8);
        let query = AccountQuery::new(["BTC"]).with_non_custodial(true);

        let first = btc_state(1, 10);
        let accounts = cache.get_coin_accounts(&SelectorContext::new(&registry, &first), &query);
        assert_eq!(accounts.get("BTC").unwrap()[0].balance, 10);
        assert_eq!(cache.len(), 1);

        // Same revision: the stale mapping is served.
        let mutated = btc_state(1, 99);
        let cached = cache.get_coin_accounts(&SelectorContext::new(&registry, &mutated), &query);
        assert_eq!(cached.get("BTC").unwrap()[0].balance, 10);
    }

    #[test]
    fn new_revision_recomputes() {
        let registry = registry();
        let cache = CoinAccountsCache::default();
        let query = AccountQuery::new(["BTC"]).with_non_custodial(true);

        cache.get_coin_accounts(&SelectorContext::new(&registry, &btc_state(1, 10)), &query);
        let next = cache.get_coin_accounts(&SelectorContext::new(&registry, &btc_state(2, 20)), &query);
        assert_eq!(next.get("BTC").unwrap()[0].balance, 20);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn loading_results_are_not_cached() {
        let registry = registry();
        let cache = CoinAccountsCache::new(4);
        let query = AccountQuery::new(["BTC"]).with_non_custodial(true);

        let mut state = WalletState::new();
        state.revision = 1;
        state
            .wallet
            .hd_accounts
            .insert("BTC".into(), RemoteData::Loading);
        let accounts = cache.get_coin_accounts(&SelectorContext::new(&registry, &state), &query);
        assert!(accounts.is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn unversioned_snapshots_are_never_shared() {
        let registry = registry();
        let cache = CoinAccountsCache::default();
        let query = AccountQuery::new(["BTC"]).with_non_custodial(true);

        let first = btc_state(0, 1);
        let second = btc_state(0, 999);
        cache.get_coin_accounts(&SelectorContext::new(&registry, &first), &query);
        let accounts = cache.get_coin_accounts(&SelectorContext::new(&registry, &second), &query);

        assert_eq!(accounts.get("BTC").unwrap()[0].balance, 999);
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_clears_entries() {
        let registry = registry();
        let cache = CoinAccountsCache::new(0);
        let query = AccountQuery::new(["BTC"]).with_non_custodial(true);

        cache.get_coin_accounts(&SelectorContext::new(&registry, &btc_state(1, 1)), &query);
        assert_eq!(cache.len(), 1);
        cache.invalidate();
        assert!(cache.is_empty());
    }
}
