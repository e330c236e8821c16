// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coin Selectors - Multi-asset wallet account query layer
//!
//! This crate answers account and balance questions about a wallet from an
//! immutable state snapshot. It performs no I/O: the fetch layer fills the
//! snapshot with [`RemoteData`] values and the selectors only read them.
//!
//! ## Modules
//!
//! - `remote` - `RemoteData` sum type (NotAsked / Loading / Failure / Success)
//! - `registry` - Static coin configs and category membership lists
//! - `classifier` - Priority-ordered coin classification
//! - `selectors` - Per-category selector modules behind `CoinSelector`
//! - `aggregator` - Multi-coin account aggregation and balance lookups
//! - `eligibility` - STX self-custody feature gate
//! - `cache` - LRU memoization of aggregated accounts
//! - `state` - Wallet state snapshot
//!
//! ## Example
//!
//! ```rust,ignore
//! let registry = CoinRegistry::from_env()?;
//! let ctx = SelectorContext::new(&registry, &state);
//! let accounts = get_coin_accounts(&ctx, &AccountQuery::all_accounts(["BTC", "USDT"]));
//! ```

pub mod aggregator;
mod amount;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod registry;
pub mod remote;
pub mod selectors;
pub mod state;
pub mod telemetry;

pub use aggregator::{
    get_coin_accounts, get_coin_accounts_remote, get_interest_balance, get_introduction_text,
    get_trading_balance, select_coin_accounts, AccountsByCoin,
};
pub use cache::CoinAccountsCache;
pub use classifier::{classify, Category, FiatCurrency, NativeChain, CLASSIFICATION_RULES};
pub use eligibility::{is_stx_self_custody_available, SelfCustodyEligibility};
pub use error::{FetchError, RegistryError, StateError};
pub use registry::{CoinConfig, CoinRegistry, CoinTypeMeta, Product};
pub use remote::RemoteData;
pub use selectors::{Account, AccountQuery, AccountType, CoinSelector, SelectorContext};
pub use state::{Remote, WalletState};
