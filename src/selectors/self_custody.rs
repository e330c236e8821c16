// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Selector for assets served by the dynamic self-custody backend.
//!
//! This module has no transaction page header text.

use crate::state::Remote;

use super::{
    combine, interest_accounts, skipped, trading_accounts, Account, AccountQuery, AccountType,
    CoinSelector, SelectorContext,
};

pub struct SelfCustodySelector;

impl SelfCustodySelector {
    fn wallet_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        if !query.non_custodial_accounts {
            return skipped();
        }

        let base_coin = ctx.base_coin(coin);
        ctx.state.self_custody_balances(coin).map(|balances| {
            balances
                .into_iter()
                .enumerate()
                .map(|(index, entry)| Account {
                    coin: coin.to_string(),
                    base_coin: base_coin.clone(),
                    account_type: AccountType::NonCustodial,
                    label: entry.label,
                    address: Some(entry.address),
                    account_index: u32::try_from(index).ok(),
                    balance: entry.balance,
                })
                .collect()
        })
    }
}

impl CoinSelector for SelfCustodySelector {
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        combine(vec![
            self.wallet_accounts(ctx, coin, query),
            trading_accounts(ctx, coin, query),
            interest_accounts(ctx, coin, query),
        ])
    }
}
