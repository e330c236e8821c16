// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Selector for assets the service only holds on the user's behalf.

use crate::registry::CoinRegistry;
use crate::state::Remote;

use super::{
    combine, interest_accounts, trading_accounts, Account, AccountQuery, CoinSelector,
    SelectorContext,
};

pub struct CustodialSelector;

impl CoinSelector for CustodialSelector {
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        // No keys in the wallet, so non-custodial and imported kinds never apply.
        combine(vec![
            trading_accounts(ctx, coin, query),
            interest_accounts(ctx, coin, query),
        ])
    }

    fn transaction_page_header_text(&self, registry: &CoinRegistry, coin: &str) -> Option<String> {
        registry.get(coin)?.description.clone()
    }
}
