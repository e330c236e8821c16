// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Selector for fiat balances (EUR, GBP, USD).
//!
//! Fiat only exists as a custodial balance: one account per currency, named
//! after the currency.

use crate::state::Remote;

use super::{skipped, Account, AccountQuery, AccountType, CoinSelector, SelectorContext};

pub struct FiatSelector;

impl CoinSelector for FiatSelector {
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        if !query.custodial_accounts {
            return skipped();
        }

        let label = ctx
            .registry
            .get(coin)
            .map(|config| config.name.clone())
            .unwrap_or_else(|| coin.to_string());

        ctx.state
            .custodial
            .trading_balances
            .as_ref()
            .map_err(Clone::clone)
            .map(|balances| {
                let balance = balances.get(coin).copied().unwrap_or_default();
                vec![Account {
                    coin: coin.to_string(),
                    base_coin: coin.to_string(),
                    account_type: AccountType::Custodial,
                    label,
                    address: None,
                    account_index: None,
                    balance: balance.available,
                }]
            })
    }
}
