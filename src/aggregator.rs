// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Multi-Coin Account Aggregation
//!
//! The generic entry point features use to request accounts for a list of
//! coins. Each coin is classified, dispatched to its selector module, and the
//! per-coin results are folded into one mapping.
//!
//! ## Rules
//!
//! - An empty or absent coin list resolves to an empty mapping.
//! - If any coin is still `Loading`, the whole result is `Loading` and no
//!   coin's accounts are visible.
//! - Otherwise `Failure`, `NotAsked`, a missing module or an unknown symbol
//!   degrade to an empty list for that coin only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classifier::classify;
use crate::registry::CoinRegistry;
use crate::remote::RemoteData;
use crate::selectors::{Account, AccountQuery, SelectorContext};
use crate::state::{CustodialBalance, InterestBalance, Remote, WalletState};

/// Accounts per coin symbol, derived fresh on every query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountsByCoin(BTreeMap<String, Vec<Account>>);

impl AccountsByCoin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coin: &str) -> Option<&[Account]> {
        self.0.get(coin).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn coins(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Account])> {
        self.0.iter().map(|(coin, accounts)| (coin.as_str(), accounts.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<Account>> {
        self.0
    }
}

/// Accounts of a single coin, or `None` when the coin is unknown or its
/// category has no selector module.
pub fn select_coin_accounts(
    ctx: &SelectorContext<'_>,
    coin: &str,
    query: &AccountQuery,
) -> Option<Remote<Vec<Account>>> {
    let Some(config) = ctx.registry.get(coin) else {
        warn!(coin = %coin, "Requested accounts for a coin missing from the registry");
        return None;
    };

    let category = classify(ctx.registry, config);
    let Some(selector) = category.selector() else {
        debug!(coin = %coin, category = %category, "No selector module for coin");
        return None;
    };

    Some(selector.get_accounts(ctx, coin, query))
}

/// Aggregate accounts for every coin in the query.
pub fn get_coin_accounts_remote(
    ctx: &SelectorContext<'_>,
    query: &AccountQuery,
) -> Remote<AccountsByCoin> {
    let coins = query.coin_list();
    if coins.is_empty() {
        return RemoteData::of(AccountsByCoin::new());
    }

    let per_coin: Vec<(&String, Option<Remote<Vec<Account>>>)> = coins
        .iter()
        .map(|coin| (coin, select_coin_accounts(ctx, coin, query)))
        .collect();

    if per_coin
        .iter()
        .any(|(_, result)| matches!(result, Some(RemoteData::Loading)))
    {
        debug!(coins = coins.len(), "Coin accounts still loading");
        return RemoteData::Loading;
    }

    let mut accounts = BTreeMap::new();
    for (coin, result) in per_coin {
        let list = match result {
            Some(RemoteData::Success(list)) => list,
            Some(RemoteData::Failure(error)) => {
                // TODO: confirm with product whether per-coin failures should reach the UI.
                warn!(coin = %coin, error = %error, "Dropping accounts of failed coin");
                Vec::new()
            }
            Some(RemoteData::NotAsked) | Some(RemoteData::Loading) | None => Vec::new(),
        };
        accounts.insert(coin.clone(), list);
    }

    RemoteData::of(AccountsByCoin(accounts))
}

/// Aggregate accounts for every coin in the query, as a plain mapping.
///
/// Returns an empty mapping while any coin is loading.
pub fn get_coin_accounts(ctx: &SelectorContext<'_>, query: &AccountQuery) -> AccountsByCoin {
    get_coin_accounts_remote(ctx, query).get_or_default()
}

/// Introduction text for a coin's transaction page, when its module has one.
pub fn get_introduction_text(registry: &CoinRegistry, coin: &str) -> Option<String> {
    let config = registry.get(coin)?;
    classify(registry, config)
        .selector()?
        .transaction_page_header_text(registry, &config.symbol)
}

/// Trading balance of `coin`. `Success(None)` when the user holds none.
pub fn get_trading_balance(state: &WalletState, coin: &str) -> Remote<Option<CustodialBalance>> {
    state
        .custodial
        .trading_balances
        .as_ref()
        .map_err(Clone::clone)
        .map(|balances| balances.get(coin).copied())
}

/// Rewards balance of `coin`. `Success(None)` when the user holds none.
pub fn get_interest_balance(state: &WalletState, coin: &str) -> Remote<Option<InterestBalance>> {
    state
        .custodial
        .interest_balances
        .as_ref()
        .map_err(Clone::clone)
        .map(|balances| balances.get(coin).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::selectors::test_support::*;

    #[test]
    fn absent_and_empty_coin_lists_resolve_empty() {
        let registry = registry();
        let state = WalletState::new();
        let ctx = SelectorContext::new(&registry, &state);

        let absent = AccountQuery::default();
        assert_eq!(
            get_coin_accounts_remote(&ctx, &absent),
            RemoteData::of(AccountsByCoin::new())
        );

        let empty = AccountQuery::new(Vec::<String>::new());
        assert!(get_coin_accounts_remote(&ctx, &empty).is_success());
        assert!(get_coin_accounts(&ctx, &empty).is_empty());
    }

    #[test]
    fn any_loading_coin_hides_everything() {
        let registry = registry();
        let mut state = WalletState::new();
        state
            .wallet
            .hd_accounts
            .insert("BTC".into(), RemoteData::of(vec![hd(0, 1)]));
        state
            .wallet
            .erc20_balances
            .insert("USDT".into(), RemoteData::Loading);
        let ctx = SelectorContext::new(&registry, &state);

        let query = AccountQuery::new(["BTC", "USDT"]).with_non_custodial(true);
        assert!(get_coin_accounts_remote(&ctx, &query).is_loading());
        assert!(get_coin_accounts(&ctx, &query).is_empty());
    }

    #[test]
    fn failed_coin_degrades_to_empty_list() {
        let registry = registry();
        let mut state = WalletState::new();
        state
            .wallet
            .hd_accounts
            .insert("BTC".into(), RemoteData::of(vec![hd(0, 1)]));
        state.wallet.hd_accounts.insert(
            "ETH".into(),
            RemoteData::Failure(FetchError::new("eth node unreachable")),
        );
        let ctx = SelectorContext::new(&registry, &state);

        let query = AccountQuery::new(["BTC", "ETH"]).with_non_custodial(true);
        let accounts = get_coin_accounts(&ctx, &query);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts.get("BTC").map(<[Account]>::len), Some(1));
        assert_eq!(accounts.get("ETH"), Some(&[][..]));
    }

    #[test]
    fn unknown_and_unmanaged_coins_are_empty() {
        let registry = CoinRegistry::new(vec![
            config("BTC", "COIN", &[]),
            config("DOGE", "COIN", &[]),
        ])
        .unwrap();
        let state = WalletState::new();
        let ctx = SelectorContext::new(&registry, &state);

        let query = AccountQuery::new(["DOGE", "NOPE"]).with_non_custodial(true);
        let accounts = get_coin_accounts(&ctx, &query);
        assert_eq!(accounts.get("DOGE"), Some(&[][..]));
        assert_eq!(accounts.get("NOPE"), Some(&[][..]));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let registry = registry();
        let mut state = WalletState::new();
        state
            .wallet
            .hd_accounts
            .insert("BTC".into(), RemoteData::of(vec![hd(0, 1), hd(1, 2)]));
        with_trading(&mut state, &[("BTC", 5), ("EUR", 100)]);
        let ctx = SelectorContext::new(&registry, &state);

        let query = AccountQuery::all_accounts(["BTC", "EUR", "ALGO"]);
        assert_eq!(get_coin_accounts(&ctx, &query), get_coin_accounts(&ctx, &query));
    }

    #[test]
    fn introduction_text_dispatches_by_category() {
        let registry = registry();
        assert!(get_introduction_text(&registry, "BTC")
            .unwrap()
            .contains("Bitcoin"));
        assert!(get_introduction_text(&registry, "USDT")
            .unwrap()
            .contains("ERC-20"));
        assert!(get_introduction_text(&registry, "STX").is_none());
        assert!(get_introduction_text(&registry, "NOPE").is_none());
    }

    #[test]
    fn trading_and_interest_balances_by_coin() {
        let mut state = WalletState::new();
        assert!(get_trading_balance(&state, "BTC").is_not_asked());

        with_trading(&mut state, &[("BTC", 5)]);
        with_interest(&mut state, &[("ETH", 9)]);

        let btc = get_trading_balance(&state, "BTC").success().flatten().unwrap();
        assert_eq!(btc.available, 5);
        assert_eq!(get_trading_balance(&state, "ETH"), RemoteData::of(None));

        let eth = get_interest_balance(&state, "ETH").success().flatten().unwrap();
        assert_eq!(eth.balance, 9);
    }
}
