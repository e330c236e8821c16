// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wallet State Snapshot
//!
//! The read-only state tree every selector is evaluated against. The fetch
//! layer populates it; selectors only read it and never trigger requests.
//!
//! ## Slices
//!
//! - **wallet**: HD accounts, imported addresses, ERC-20 token balances and
//!   the second-password (double encryption) flag
//! - **custodial**: trading and interest balances held by the service
//! - **self_custody**: balances served by the dynamic self-custody backend
//! - **profile / options / settings**: inputs to feature gates
//!
//! Per-coin maps are keyed by coin symbol. A coin with no entry reads as
//! `NotAsked`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FetchError, StateError};
use crate::remote::RemoteData;

/// Remote value whose failures come from the fetch layer.
pub type Remote<A> = RemoteData<FetchError, A>;

// =============================================================================
// Wallet Slice
// =============================================================================

/// An HD account derived from the wallet seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdAccount {
    /// Derivation index.
    pub index: u32,
    /// User-visible label.
    pub label: String,
    /// Receive address or extended public key.
    pub address: String,
    /// Balance in minor units.
    #[serde(with = "crate::amount")]
    pub balance: u128,
    /// Archived accounts are hidden from selection.
    #[serde(default)]
    pub archived: bool,
}

/// A single address imported into the wallet outside the HD tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedAddress {
    pub address: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Balance in minor units.
    #[serde(with = "crate::amount")]
    pub balance: u128,
}

/// Balance of an ERC-20 token held on one ETH HD account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccountBalance {
    /// Index of the owning ETH account.
    pub account_index: u32,
    pub label: String,
    /// ETH address holding the token.
    pub address: String,
    /// Token balance in minor units.
    #[serde(with = "crate::amount")]
    pub balance: u128,
}

/// Non-custodial wallet data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletSlice {
    /// Whether the wallet is double encrypted with a second password.
    pub second_password_on: Remote<bool>,
    pub hd_accounts: BTreeMap<String, Remote<Vec<HdAccount>>>,
    pub imported_addresses: BTreeMap<String, Remote<Vec<ImportedAddress>>>,
    pub erc20_balances: BTreeMap<String, Remote<Vec<TokenAccountBalance>>>,
}

// =============================================================================
// Custodial Slice
// =============================================================================

/// Trading balance held by the service for one coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustodialBalance {
    #[serde(with = "crate::amount")]
    pub available: u128,
    #[serde(with = "crate::amount")]
    pub pending: u128,
    #[serde(with = "crate::amount")]
    pub withdrawable: u128,
}

/// Rewards (interest) account balance for one coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterestBalance {
    #[serde(with = "crate::amount")]
    pub balance: u128,
    #[serde(with = "crate::amount")]
    pub pending_interest: u128,
    #[serde(with = "crate::amount")]
    pub total_interest: u128,
    #[serde(with = "crate::amount")]
    pub locked: u128,
}

/// Balances held by the service on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustodialSlice {
    pub trading_balances: Remote<BTreeMap<String, CustodialBalance>>,
    pub interest_balances: Remote<BTreeMap<String, InterestBalance>>,
}

// =============================================================================
// Self-Custody Slice
// =============================================================================

/// Balance reported by the dynamic self-custody backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfCustodyBalance {
    pub label: String,
    pub address: String,
    #[serde(with = "crate::amount")]
    pub balance: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelfCustodySlice {
    pub balances: BTreeMap<String, Remote<Vec<SelfCustodyBalance>>>,
}

// =============================================================================
// Feature Gate Inputs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSlice {
    /// Whether the user carries the Blockstack airdrop tag.
    pub blockstack_tag: Remote<bool>,
}

/// Feature flags published in the wallet options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureFlags {
    pub stx_self_custody_enable_airdrop: bool,
    pub stx_self_custody_enable_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletOptionsSlice {
    pub feature_flags: Remote<FeatureFlags>,
}

/// Per-user invitation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invitations {
    pub stx_self_custody: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsSlice {
    pub invitations: Remote<Invitations>,
}

// =============================================================================
// Root
// =============================================================================

/// Immutable snapshot of the wallet state tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletState {
    /// Bumped by the owner of the store on every change; used for memoization.
    /// `0` marks an unversioned snapshot, which is never memoized.
    pub revision: u64,
    pub wallet: WalletSlice,
    pub custodial: CustodialSlice,
    pub self_custody: SelfCustodySlice,
    pub profile: ProfileSlice,
    pub options: WalletOptionsSlice,
    pub settings: SettingsSlice,
}

impl WalletState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn hd_accounts(&self, coin: &str) -> Remote<Vec<HdAccount>> {
        lookup(&self.wallet.hd_accounts, coin)
    }

    pub fn imported_addresses(&self, coin: &str) -> Remote<Vec<ImportedAddress>> {
        lookup(&self.wallet.imported_addresses, coin)
    }

    pub fn erc20_balances(&self, coin: &str) -> Remote<Vec<TokenAccountBalance>> {
        lookup(&self.wallet.erc20_balances, coin)
    }

    pub fn self_custody_balances(&self, coin: &str) -> Remote<Vec<SelfCustodyBalance>> {
        lookup(&self.self_custody.balances, coin)
    }
}

fn lookup<A: Clone>(map: &BTreeMap<String, Remote<A>>, coin: &str) -> Remote<A> {
    map.get(coin).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_coin_reads_as_not_asked() {
        let state = WalletState::new();
        assert!(state.hd_accounts("BTC").is_not_asked());
        assert!(state.self_custody_balances("STX").is_not_asked());
    }

    #[test]
    fn parses_partial_snapshot() {
        let state = WalletState::from_json_str(
            r#"{
                "revision": 3,
                "wallet": {
                    "hdAccounts": {
                        "BTC": {"status": "success", "data": [
                            {"index": 0, "label": "Private Key Wallet", "address": "xpub6C", "balance": 5000}
                        ]},
                        "ETH": {"status": "loading"}
                    }
                },
                "custodial": {
                    "tradingBalances": {"status": "success", "data": {"BTC": {"available": 10}}}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(state.revision, 3);
        let btc = state.hd_accounts("BTC").success().unwrap();
        assert_eq!(btc[0].balance, 5000);
        assert!(!btc[0].archived);
        assert!(state.hd_accounts("ETH").is_loading());

        let trading = state.custodial.trading_balances.clone().success().unwrap();
        assert_eq!(trading["BTC"].available, 10);
        assert_eq!(trading["BTC"].pending, 0);
        assert!(state.custodial.interest_balances.is_not_asked());
    }

    #[test]
    fn data_before_status_parses() {
        let state = WalletState::from_json_str(
            r#"{
                "wallet": {
                    "erc20Balances": {
                        "MATIC-ERC20": {
                            "data": [{"accountIndex": 0, "label": "Private Key Wallet", "address": "0x742d", "balance": 2000000000000000000}],
                            "status": "success"
                        }
                    }
                },
                "custodial": {
                    "interestBalances": {
                        "data": {"ETH": {"balance": "340282366920938463463374607431768211455"}},
                        "status": "success"
                    }
                }
            }"#,
        )
        .unwrap();

        let matic = state.erc20_balances("MATIC-ERC20").success().unwrap();
        assert_eq!(matic[0].balance, 2_000_000_000_000_000_000);

        let interest = state.custodial.interest_balances.clone().success().unwrap();
        assert_eq!(interest["ETH"].balance, u128::MAX);
    }

    #[test]
    fn snapshot_survives_json_round_trip() {
        let mut state = WalletState::new();
        state.revision = 7;
        state.wallet.hd_accounts.insert(
            "ETH".into(),
            RemoteData::of(vec![HdAccount {
                index: 0,
                label: "Private Key Wallet".into(),
                address: "0x742d".into(),
                balance: u128::MAX,
                archived: false,
            }]),
        );

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(WalletState::from_json_str(&json).unwrap(), state);
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = WalletState::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
    }
}
