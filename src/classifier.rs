// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Coin Classification
//!
//! Decides which selector module governs a coin.
//!
//! ## Priority
//!
//! Rules in [`CLASSIFICATION_RULES`] are evaluated top to bottom and the
//! first match wins:
//!
//! 1. ERC-20 token
//! 2. Custodial-only asset
//! 3. Dynamic self-custody asset
//!
//! A coin matching none of them falls back to its own symbol: a native chain
//! module, a fiat module, or [`Category::Unmanaged`] when no module exists.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::{CoinConfig, CoinRegistry};

/// Chains with a dedicated selector module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeChain {
    Btc,
    Bch,
    Eth,
    Xlm,
}

impl NativeChain {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "BTC" => Some(NativeChain::Btc),
            "BCH" => Some(NativeChain::Bch),
            "ETH" => Some(NativeChain::Eth),
            "XLM" => Some(NativeChain::Xlm),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            NativeChain::Btc => "BTC",
            NativeChain::Bch => "BCH",
            NativeChain::Eth => "ETH",
            NativeChain::Xlm => "XLM",
        }
    }
}

/// Fiat currencies with a dedicated selector module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiatCurrency {
    Eur,
    Gbp,
    Usd,
}

impl FiatCurrency {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "EUR" => Some(FiatCurrency::Eur),
            "GBP" => Some(FiatCurrency::Gbp),
            "USD" => Some(FiatCurrency::Usd),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FiatCurrency::Eur => "EUR",
            FiatCurrency::Gbp => "GBP",
            FiatCurrency::Usd => "USD",
        }
    }
}

/// The selector module that governs a coin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Erc20,
    Custodial,
    SelfCustody,
    Native(NativeChain),
    Fiat(FiatCurrency),
    /// No module exists for this symbol; every capability is absent.
    Unmanaged(String),
}

impl Category {
    /// Per-asset default for coins that match no shared category rule.
    pub fn from_symbol(symbol: &str) -> Self {
        if let Some(chain) = NativeChain::from_symbol(symbol) {
            Category::Native(chain)
        } else if let Some(fiat) = FiatCurrency::from_symbol(symbol) {
            Category::Fiat(fiat)
        } else {
            Category::Unmanaged(symbol.to_string())
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Erc20 => write!(f, "ERC20"),
            Category::Custodial => write!(f, "CUSTODIAL"),
            Category::SelfCustody => write!(f, "SELF_CUSTODY"),
            Category::Native(chain) => write!(f, "{}", chain.symbol()),
            Category::Fiat(fiat) => write!(f, "{}", fiat.symbol()),
            Category::Unmanaged(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// One entry of the priority table.
pub struct ClassificationRule {
    pub name: &'static str,
    pub matches: fn(&CoinRegistry, &CoinConfig) -> bool,
    pub category: Category,
}

/// Shared category rules, in priority order.
pub static CLASSIFICATION_RULES: [ClassificationRule; 3] = [
    ClassificationRule {
        name: "erc20",
        matches: |registry, coin| registry.is_erc20(&coin.symbol),
        category: Category::Erc20,
    },
    ClassificationRule {
        name: "custodial",
        matches: |registry, coin| registry.is_custodial(&coin.symbol),
        category: Category::Custodial,
    },
    ClassificationRule {
        name: "self_custody",
        matches: |registry, coin| registry.is_dynamic_self_custody(&coin.symbol),
        category: Category::SelfCustody,
    },
];

/// Classify a coin. Deterministic and side-effect-free.
pub fn classify(registry: &CoinRegistry, coin: &CoinConfig) -> Category {
    for rule in &CLASSIFICATION_RULES {
        if (rule.matches)(registry, coin) {
            debug!(coin = %coin.symbol, rule = rule.name, "Classified coin");
            return rule.category.clone();
        }
    }

    let category = Category::from_symbol(&coin.symbol);
    debug!(coin = %coin.symbol, category = %category, "Classified coin by symbol");
    category
}
