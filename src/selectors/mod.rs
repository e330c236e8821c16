// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Per-Category Coin Selectors
//!
//! Every selector module implements [`CoinSelector`] over its category's
//! slice of the wallet state. [`Category::selector`] maps a classified coin
//! to its module; callers never inspect which concrete module they hold.
//!
//! ## Account Kinds
//!
//! | Kind | Source |
//! |------|--------|
//! | `NonCustodial` | HD accounts, ERC-20 balances or self-custody balances |
//! | `ImportedAddress` | Addresses imported outside the HD tree (BTC, BCH) |
//! | `Custodial` | Trading balance held by the service |
//! | `Interest` | Rewards account balance |
//!
//! Each requested kind is read as one [`RemoteData`] and the parts are
//! combined in the order above; the first part that is not `Success`
//! decides the result for the coin.

use serde::{Deserialize, Serialize};

use crate::classifier::{Category, FiatCurrency, NativeChain};
use crate::registry::CoinRegistry;
use crate::remote::RemoteData;
use crate::state::{Remote, WalletState};

pub mod custodial;
pub mod erc20;
pub mod fiat;
pub mod native;
pub mod self_custody;

pub use custodial::CustodialSelector;
pub use erc20::Erc20Selector;
pub use fiat::FiatSelector;
pub use native::{BchSelector, BtcSelector, EthSelector, XlmSelector};
pub use self_custody::SelfCustodySelector;

/// Label used for trading accounts.
pub const TRADING_ACCOUNT_LABEL: &str = "Trading Account";

/// Label used for rewards accounts.
pub const REWARDS_ACCOUNT_LABEL: &str = "Rewards Account";

// =============================================================================
// Query and Result Types
// =============================================================================

/// Which kind of account a record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    NonCustodial,
    ImportedAddress,
    Custodial,
    Interest,
}

/// A selectable account for a coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Coin the account holds.
    pub coin: String,
    /// Chain the coin settles on (the coin itself for native assets).
    pub base_coin: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_index: Option<u32>,
    /// Balance in minor units of `coin`.
    #[serde(with = "crate::amount")]
    pub balance: u128,
}

/// Options describing which accounts a caller wants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountQuery {
    /// Coins to select accounts for. `None` and an empty list behave alike.
    pub coins: Option<Vec<String>>,
    pub non_custodial_accounts: bool,
    pub custodial_accounts: bool,
    pub interest_accounts: bool,
    pub imported_addresses: bool,
}

impl AccountQuery {
    /// Query for the given coins with every account kind disabled.
    pub fn new<I, S>(coins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            coins: Some(coins.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Query for the given coins with every account kind enabled.
    pub fn all_accounts<I, S>(coins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            non_custodial_accounts: true,
            custodial_accounts: true,
            interest_accounts: true,
            imported_addresses: true,
            ..Self::new(coins)
        }
    }

    pub fn with_non_custodial(mut self, enabled: bool) -> Self {
        self.non_custodial_accounts = enabled;
        self
    }

    pub fn with_custodial(mut self, enabled: bool) -> Self {
        self.custodial_accounts = enabled;
        self
    }

    pub fn with_interest(mut self, enabled: bool) -> Self {
        self.interest_accounts = enabled;
        self
    }

    pub fn with_imported_addresses(mut self, enabled: bool) -> Self {
        self.imported_addresses = enabled;
        self
    }

    /// Requested coins, empty when absent.
    pub fn coin_list(&self) -> &[String] {
        self.coins.as_deref().unwrap_or(&[])
    }
}

/// Dependencies injected into every selector call.
#[derive(Debug, Clone, Copy)]
pub struct SelectorContext<'a> {
    pub registry: &'a CoinRegistry,
    pub state: &'a WalletState,
}

impl<'a> SelectorContext<'a> {
    pub fn new(registry: &'a CoinRegistry, state: &'a WalletState) -> Self {
        Self { registry, state }
    }

    /// Chain a coin settles on: its configured parent chain, or itself.
    pub fn base_coin(&self, coin: &str) -> String {
        self.registry
            .get(coin)
            .and_then(|config| config.coin_type.parent_chain.clone())
            .unwrap_or_else(|| coin.to_string())
    }
}

// =============================================================================
// Selector Contract
// =============================================================================

/// Capability set shared by every per-category selector module.
pub trait CoinSelector: Sync {
    /// Accounts of `coin` matching `query`.
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>>;

    /// Introduction text for the coin's transaction page.
    ///
    /// Optional capability: `None` means the module has nothing to show.
    fn transaction_page_header_text(&self, _registry: &CoinRegistry, _coin: &str) -> Option<String> {
        None
    }
}

impl Category {
    /// The selector module governing this category, if one exists.
    pub fn selector(&self) -> Option<&'static dyn CoinSelector> {
        match self {
            Category::Erc20 => Some(&Erc20Selector),
            Category::Custodial => Some(&CustodialSelector),
            Category::SelfCustody => Some(&SelfCustodySelector),
            Category::Native(NativeChain::Btc) => Some(&BtcSelector),
            Category::Native(NativeChain::Bch) => Some(&BchSelector),
            Category::Native(NativeChain::Eth) => Some(&EthSelector),
            Category::Native(NativeChain::Xlm) => Some(&XlmSelector),
            Category::Fiat(FiatCurrency::Eur) => Some(&FiatSelector),
            Category::Fiat(FiatCurrency::Gbp) => Some(&FiatSelector),
            Category::Fiat(FiatCurrency::Usd) => Some(&FiatSelector),
            Category::Unmanaged(_) => None,
        }
    }
}

// =============================================================================
// Shared Account Builders
// =============================================================================

/// Flatten per-kind parts into one account list.
pub(crate) fn combine(parts: Vec<Remote<Vec<Account>>>) -> Remote<Vec<Account>> {
    RemoteData::collect_all(parts).map(|lists| lists.into_iter().flatten().collect())
}

/// An empty, resolved part for an account kind the caller did not request.
pub(crate) fn skipped() -> Remote<Vec<Account>> {
    RemoteData::of(Vec::new())
}

/// The trading account of `coin`, when custodial accounts are requested.
///
/// A coin without an entry in the balance map gets a zero-balance account.
pub(crate) fn trading_accounts(
    ctx: &SelectorContext<'_>,
    coin: &str,
    query: &AccountQuery,
) -> Remote<Vec<Account>> {
    if !query.custodial_accounts {
        return skipped();
    }

    ctx.state
        .custodial
        .trading_balances
        .as_ref()
        .map_err(Clone::clone)
        .map(|balances| {
            let balance = balances.get(coin).copied().unwrap_or_default();
            vec![Account {
                coin: coin.to_string(),
                base_coin: ctx.base_coin(coin),
                account_type: AccountType::Custodial,
                label: TRADING_ACCOUNT_LABEL.to_string(),
                address: None,
                account_index: None,
                balance: balance.available,
            }]
        })
}

/// The rewards account of `coin`, when interest accounts are requested and
/// the user holds one.
pub(crate) fn interest_accounts(
    ctx: &SelectorContext<'_>,
    coin: &str,
    query: &AccountQuery,
) -> Remote<Vec<Account>> {
    if !query.interest_accounts {
        return skipped();
    }

    ctx.state
        .custodial
        .interest_balances
        .as_ref()
        .map_err(Clone::clone)
        .map(|balances| {
            balances
                .get(coin)
                .map(|interest| Account {
                    coin: coin.to_string(),
                    base_coin: ctx.base_coin(coin),
                    account_type: AccountType::Interest,
                    label: REWARDS_ACCOUNT_LABEL.to_string(),
                    address: None,
                    account_index: None,
                    balance: interest.balance,
                })
                .into_iter()
                .collect()
        })
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn unmanaged_category_has_no_selector() {
        assert!(Category::Unmanaged("DOGE".into()).selector().is_none());
        assert!(Category::Erc20.selector().is_some());
        assert!(Category::Fiat(FiatCurrency::Usd).selector().is_some());
    }

    #[test]
    fn trading_account_defaults_to_zero_balance() {
        let registry = registry();
        let mut state = WalletState::new();
        with_trading(&mut state, &[("BTC", 42)]);
        let ctx = SelectorContext::new(&registry, &state);
        let query = AccountQuery::new(["ETH"]).with_custodial(true);

        let accounts = trading_accounts(&ctx, "ETH", &query).success().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].balance, 0);
        assert_eq!(accounts[0].account_type, AccountType::Custodial);
    }

    #[test]
    fn interest_account_only_when_held() {
        let registry = registry();
        let mut state = WalletState::new();
        with_interest(&mut state, &[("BTC", 7)]);
        let ctx = SelectorContext::new(&registry, &state);
        let query = AccountQuery::new(["BTC"]).with_interest(true);

        assert_eq!(interest_accounts(&ctx, "BTC", &query).success().unwrap().len(), 1);
        assert!(interest_accounts(&ctx, "ETH", &query).success().unwrap().is_empty());
    }

    #[test]
    fn unrequested_kinds_resolve_empty_even_when_loading() {
        let registry = registry();
        let mut state = WalletState::new();
        state.custodial.trading_balances = RemoteData::Loading;
        let ctx = SelectorContext::new(&registry, &state);

        let query = AccountQuery::new(["BTC"]);
        assert_eq!(trading_accounts(&ctx, "BTC", &query), RemoteData::of(vec![]));
    }

    #[test]
    fn combine_keeps_first_non_success() {
        let parts = vec![
            RemoteData::of(vec![]),
            RemoteData::Failure(FetchError::new("down")),
            RemoteData::Loading,
        ];
        assert_eq!(combine(parts), RemoteData::Failure(FetchError::new("down")));
    }

    #[test]
    fn base_coin_uses_parent_chain() {
        let registry = registry();
        let state = WalletState::new();
        let ctx = SelectorContext::new(&registry, &state);
        assert_eq!(ctx.base_coin("USDT"), "ETH");
        assert_eq!(ctx.base_coin("BTC"), "BTC");
    }
}
