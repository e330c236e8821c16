// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Selector for ERC-20 tokens held on the wallet's ETH accounts.

use crate::registry::CoinRegistry;
use crate::state::Remote;

use super::{
    combine, interest_accounts, skipped, trading_accounts, Account, AccountQuery, AccountType,
    CoinSelector, SelectorContext,
};

pub struct Erc20Selector;

impl Erc20Selector {
    fn token_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        if !query.non_custodial_accounts {
            return skipped();
        }

        let base_coin = ctx.base_coin(coin);
        ctx.state.erc20_balances(coin).map(|balances| {
            balances
                .into_iter()
                .map(|holding| Account {
                    coin: coin.to_string(),
                    base_coin: base_coin.clone(),
                    account_type: AccountType::NonCustodial,
                    label: holding.label,
                    address: Some(holding.address),
                    account_index: Some(holding.account_index),
                    balance: holding.balance,
                })
                .collect()
        })
    }
}

impl CoinSelector for Erc20Selector {
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        combine(vec![
            self.token_accounts(ctx, coin, query),
            trading_accounts(ctx, coin, query),
            interest_accounts(ctx, coin, query),
        ])
    }

    fn transaction_page_header_text(&self, registry: &CoinRegistry, coin: &str) -> Option<String> {
        let config = registry.get(coin)?;
        Some(config.description.clone().unwrap_or_else(|| {
            format!(
                "{} ({}) is an ERC-20 token on the Ethereum network.",
                config.name, config.symbol
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::remote::RemoteData;
    use crate::state::{TokenAccountBalance, WalletState};

    #[test]
    fn token_accounts_settle_on_parent_chain() {
        let registry = registry();
        let mut state = WalletState::new();
        state.wallet.erc20_balances.insert(
            "USDT".into(),
            RemoteData::of(vec![TokenAccountBalance {
                account_index: 0,
                label: "Private Key Wallet".into(),
                address: "0x742d35cc6634c0532925a3b844bc9e7595f4ab12".into(),
                balance: 1_000_000,
            }]),
        );
        let ctx = SelectorContext::new(&registry, &state);

        let query = AccountQuery::new(["USDT"]).with_non_custodial(true);
        let accounts = Erc20Selector.get_accounts(&ctx, "USDT", &query).success().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].base_coin, "ETH");
        assert_eq!(accounts[0].coin, "USDT");
        assert_eq!(accounts[0].balance, 1_000_000);
    }

    #[test]
    fn loading_token_balances_load_the_coin() {
        let registry = registry();
        let mut state = WalletState::new();
        state
            .wallet
            .erc20_balances
            .insert("USDT".into(), RemoteData::Loading);
        let ctx = SelectorContext::new(&registry, &state);

        let query = AccountQuery::all_accounts(["USDT"]);
        assert!(Erc20Selector.get_accounts(&ctx, "USDT", &query).is_loading());
    }

    #[test]
    fn header_text_falls_back_to_generated_sentence() {
        let registry = registry();
        assert_eq!(
            Erc20Selector.transaction_page_header_text(&registry, "USDT").as_deref(),
            Some("Tether (USDT) is an ERC-20 token on the Ethereum network.")
        );
        assert!(Erc20Selector.transaction_page_header_text(&registry, "NOPE").is_none());
    }
}
