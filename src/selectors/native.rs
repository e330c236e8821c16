// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Selectors for chains with their own HD wallet module (BTC, BCH, ETH, XLM).

use crate::registry::CoinRegistry;
use crate::state::{HdAccount, ImportedAddress, Remote};

use super::{
    combine, interest_accounts, skipped, trading_accounts, Account, AccountQuery, AccountType,
    CoinSelector, SelectorContext,
};

/// Non-archived HD accounts of `coin`, when non-custodial accounts are requested.
fn hd_wallet_accounts(
    ctx: &SelectorContext<'_>,
    coin: &str,
    query: &AccountQuery,
) -> Remote<Vec<Account>> {
    if !query.non_custodial_accounts {
        return skipped();
    }

    ctx.state.hd_accounts(coin).map(|accounts| {
        accounts
            .into_iter()
            .filter(|account| !account.archived)
            .map(|account| hd_account(coin, account))
            .collect()
    })
}

fn hd_account(coin: &str, account: HdAccount) -> Account {
    Account {
        coin: coin.to_string(),
        base_coin: coin.to_string(),
        account_type: AccountType::NonCustodial,
        label: account.label,
        address: Some(account.address),
        account_index: Some(account.index),
        balance: account.balance,
    }
}

/// Imported addresses of `coin`, when requested.
fn imported_address_accounts(
    ctx: &SelectorContext<'_>,
    coin: &str,
    query: &AccountQuery,
) -> Remote<Vec<Account>> {
    if !query.imported_addresses {
        return skipped();
    }

    ctx.state.imported_addresses(coin).map(|addresses| {
        addresses
            .into_iter()
            .map(|imported| imported_account(coin, imported))
            .collect()
    })
}

fn imported_account(coin: &str, imported: ImportedAddress) -> Account {
    Account {
        coin: coin.to_string(),
        base_coin: coin.to_string(),
        account_type: AccountType::ImportedAddress,
        label: imported.label.unwrap_or_else(|| imported.address.clone()),
        address: Some(imported.address),
        account_index: None,
        balance: imported.balance,
    }
}

/// UTXO chains expose imported addresses next to HD accounts.
fn utxo_accounts(
    ctx: &SelectorContext<'_>,
    coin: &str,
    query: &AccountQuery,
) -> Remote<Vec<Account>> {
    combine(vec![
        hd_wallet_accounts(ctx, coin, query),
        imported_address_accounts(ctx, coin, query),
        trading_accounts(ctx, coin, query),
        interest_accounts(ctx, coin, query),
    ])
}

/// Account-model chains have no imported addresses.
fn account_model_accounts(
    ctx: &SelectorContext<'_>,
    coin: &str,
    query: &AccountQuery,
) -> Remote<Vec<Account>> {
    combine(vec![
        hd_wallet_accounts(ctx, coin, query),
        trading_accounts(ctx, coin, query),
        interest_accounts(ctx, coin, query),
    ])
}

pub struct BtcSelector;

impl CoinSelector for BtcSelector {
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        utxo_accounts(ctx, coin, query)
    }

    fn transaction_page_header_text(&self, _registry: &CoinRegistry, _coin: &str) -> Option<String> {
        Some(
            "Bitcoin (BTC) is the original crypto and the internet's first digital money."
                .to_string(),
        )
    }
}

pub struct BchSelector;

impl CoinSelector for BchSelector {
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        utxo_accounts(ctx, coin, query)
    }

    fn transaction_page_header_text(&self, _registry: &CoinRegistry, _coin: &str) -> Option<String> {
        Some(
            "Bitcoin Cash (BCH) is a fork of Bitcoin built for fast, low-cost everyday payments."
                .to_string(),
        )
    }
}

pub struct EthSelector;

impl CoinSelector for EthSelector {
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        account_model_accounts(ctx, coin, query)
    }

    fn transaction_page_header_text(&self, _registry: &CoinRegistry, _coin: &str) -> Option<String> {
        Some(
            "Ethereum (ETH) is a currency and a computing platform. Developers use it to build \
             decentralized applications and issue new crypto assets."
                .to_string(),
        )
    }
}

pub struct XlmSelector;

impl CoinSelector for XlmSelector {
    fn get_accounts(
        &self,
        ctx: &SelectorContext<'_>,
        coin: &str,
        query: &AccountQuery,
    ) -> Remote<Vec<Account>> {
        account_model_accounts(ctx, coin, query)
    }

    fn transaction_page_header_text(&self, _registry: &CoinRegistry, _coin: &str) -> Option<String> {
        Some(
            "Stellar (XLM) connects banks, payment systems and people for low-cost, \
             cross-border transactions."
                .to_string(),
        )
    }
}
