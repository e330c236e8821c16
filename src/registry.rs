// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Coin Registry
//!
//! Static coin configuration, loaded once at startup and shared read-only by
//! reference with the classifier and every selector.
//!
//! ## Category Membership
//!
//! Three membership lists are derived from the configs when the registry is
//! built and feed the classifier:
//!
//! | List | Rule |
//! |------|------|
//! | ERC-20 | config has an `erc20Address` |
//! | Custodial | products include `CustodialWalletBalance` but not `PrivateKey`, not fiat |
//! | Dynamic self-custody | products include `DynamicSelfCustody` |
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "symbol": "MATIC-ERC20",
//!     "name": "Polygon",
//!     "precision": 18,
//!     "type": { "name": "ERC20", "erc20Address": "0x7d1a...", "parentChain": "ETH" },
//!     "products": ["PrivateKey", "CustodialWalletBalance"]
//!   }
//! ]
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config;
use crate::error::RegistryError;

/// Maximum fractional digits rendered by [`CoinConfig::format_amount`].
const MAX_DISPLAY_DECIMALS: usize = 8;

/// Category name the asset catalogue uses for fiat currencies.
pub const FIAT_TYPE_NAME: &str = "FIAT";

/// Product capabilities a coin is enabled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    /// Keys are derived from the wallet seed.
    PrivateKey,
    /// The service holds a trading balance on the user's behalf.
    CustodialWalletBalance,
    /// Balances are served by the dynamic self-custody backend.
    DynamicSelfCustody,
    /// The coin can earn rewards in an interest account.
    InterestBalance,
}

/// Category metadata for a coin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTypeMeta {
    /// Category name as published by the asset catalogue (e.g. "COIN", "ERC20", "FIAT").
    pub name: String,
    /// Token contract address for ERC-20 tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erc20_address: Option<String>,
    /// Chain the asset lives on, when it is not a chain itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_chain: Option<String>,
}

/// Static descriptor of a coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinConfig {
    /// Ticker symbol, unique within the registry (e.g. "BTC", "MATIC-ERC20").
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Number of decimal places in one whole unit.
    pub precision: u8,
    /// Category metadata.
    #[serde(rename = "type", default)]
    pub coin_type: CoinTypeMeta,
    /// Enabled products.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Marketing description, shown on the transaction page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CoinConfig {
    pub fn has_product(&self, product: Product) -> bool {
        self.products.contains(&product)
    }

    pub fn is_erc20(&self) -> bool {
        self.coin_type.erc20_address.is_some()
    }

    pub fn is_fiat(&self) -> bool {
        self.coin_type.name.eq_ignore_ascii_case(FIAT_TYPE_NAME)
    }

    /// Custodial-only crypto asset. Fiat balances have their own modules.
    pub fn is_custodial(&self) -> bool {
        self.has_product(Product::CustodialWalletBalance)
            && !self.has_product(Product::PrivateKey)
            && !self.is_fiat()
    }

    pub fn is_dynamic_self_custody(&self) -> bool {
        self.has_product(Product::DynamicSelfCustody)
    }

    /// Render an amount in minor units as a display string.
    ///
    /// Trailing zeros are trimmed and at most 8 fractional digits are kept.
    pub fn format_amount(&self, minor_units: u128) -> String {
        format_units(minor_units, self.precision)
    }
}

/// Format an amount in minor units with the given number of decimals.
///
/// Works on the zero-padded digit string, so any `u8` precision is valid.
fn format_units(amount: u128, decimals: u8) -> String {
    if amount == 0 {
        return "0".to_string();
    }

    let decimals = usize::from(decimals);
    let digits = format!("{:0>width$}", amount, width = decimals + 1);
    let (whole, fraction) = digits.split_at(digits.len() - decimals);

    let truncated = &fraction[..fraction.len().min(MAX_DISPLAY_DECIMALS)];
    let trimmed = truncated.trim_end_matches('0');
    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{trimmed}")
    }
}

/// Immutable registry of coin configs keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct CoinRegistry {
    coins: Vec<CoinConfig>,
    by_symbol: HashMap<String, usize>,
    erc20: Vec<String>,
    custodial: Vec<String>,
    dynamic_self_custody: Vec<String>,
    erc20_set: HashSet<String>,
    custodial_set: HashSet<String>,
    dynamic_self_custody_set: HashSet<String>,
}

impl CoinRegistry {
    /// Build a registry from configs, preserving their order.
    pub fn new(coins: Vec<CoinConfig>) -> Result<Self, RegistryError> {
        let mut registry = CoinRegistry::default();

        for (idx, coin) in coins.iter().enumerate() {
            if coin.symbol.trim().is_empty() {
                return Err(RegistryError::EmptySymbol);
            }
            if registry.by_symbol.insert(coin.symbol.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateSymbol(coin.symbol.clone()));
            }
            if coin.is_erc20() {
                registry.erc20.push(coin.symbol.clone());
            }
            if coin.is_custodial() {
                registry.custodial.push(coin.symbol.clone());
            }
            if coin.is_dynamic_self_custody() {
                registry.dynamic_self_custody.push(coin.symbol.clone());
            }
        }

        registry.erc20_set = registry.erc20.iter().cloned().collect();
        registry.custodial_set = registry.custodial.iter().cloned().collect();
        registry.dynamic_self_custody_set = registry.dynamic_self_custody.iter().cloned().collect();
        registry.coins = coins;

        debug!(
            coins = registry.coins.len(),
            erc20 = registry.erc20.len(),
            custodial = registry.custodial.len(),
            self_custody = registry.dynamic_self_custody.len(),
            "Coin registry built"
        );

        Ok(registry)
    }

    /// Parse a JSON array of coin configs.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let coins: Vec<CoinConfig> = serde_json::from_str(json)?;
        Self::new(coins)
    }

    /// Load a registry from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let registry = Self::from_json_str(&raw)?;
        info!(path = %path.display(), coins = registry.len(), "Loaded coin registry");
        Ok(registry)
    }

    /// Load a registry from the file named by `COIN_REGISTRY_PATH`.
    pub fn from_env() -> Result<Self, RegistryError> {
        Self::from_path(config::coin_registry_path())
    }

    pub fn get(&self, symbol: &str) -> Option<&CoinConfig> {
        self.by_symbol.get(symbol).map(|&idx| &self.coins[idx])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// All configs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &CoinConfig> {
        self.coins.iter()
    }

    /// Symbols registered as ERC-20 tokens.
    pub fn erc20_coins(&self) -> &[String] {
        &self.erc20
    }

    /// Symbols held only custodially.
    pub fn custodial_coins(&self) -> &[String] {
        &self.custodial
    }

    /// Symbols served by the dynamic self-custody backend.
    pub fn dynamic_self_custody_coins(&self) -> &[String] {
        &self.dynamic_self_custody
    }

    pub fn is_erc20(&self, symbol: &str) -> bool {
        self.erc20_set.contains(symbol)
    }

    pub fn is_custodial(&self, symbol: &str) -> bool {
        self.custodial_set.contains(symbol)
    }

    pub fn is_dynamic_self_custody(&self, symbol: &str) -> bool {
        self.dynamic_self_custody_set.contains(symbol)
    }
}
