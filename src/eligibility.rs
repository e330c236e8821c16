// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # STX Self-Custody Eligibility
//!
//! Combines four independently fetched inputs into one decision.
//!
//! ## Rules
//!
//! 1. Double encryption on (or not yet known) vetoes immediately.
//! 2. Unresolved inputs take their defaults: feature flags off, tag absent,
//!    invitations enabled.
//! 3. Eligible when invitations are enabled and either the user carries the
//!    airdrop tag with the airdrop flag on, or the enable-all flag is on.

use tracing::debug;

use crate::state::{FeatureFlags, Invitations, WalletState};

/// Resolved inputs to the self-custody gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfCustodyEligibility {
    pub double_encrypted: bool,
    pub feature_flags: FeatureFlags,
    pub tagged: bool,
    pub invitations: Invitations,
}

impl SelfCustodyEligibility {
    /// Read the inputs from a snapshot, applying defaults to unresolved values.
    pub fn from_state(state: &WalletState) -> Self {
        Self {
            double_encrypted: state.wallet.second_password_on.clone().get_or_else(true),
            feature_flags: state.options.feature_flags.clone().get_or_default(),
            tagged: state.profile.blockstack_tag.clone().get_or_else(false),
            invitations: state
                .settings
                .invitations
                .clone()
                .get_or_else(Invitations {
                    stx_self_custody: true,
                }),
        }
    }

    pub fn is_available(&self) -> bool {
        if self.double_encrypted {
            return false;
        }

        if !self.invitations.stx_self_custody {
            return false;
        }

        (self.tagged && self.feature_flags.stx_self_custody_enable_airdrop)
            || self.feature_flags.stx_self_custody_enable_all
    }
}

/// Whether self-custody of STX is available to this user.
pub fn is_stx_self_custody_available(state: &WalletState) -> bool {
    let eligibility = SelfCustodyEligibility::from_state(state);
    if eligibility.double_encrypted {
        debug!("STX self-custody unavailable: wallet is double encrypted");
        return false;
    }

    let available = eligibility.is_available();
    debug!(
        available,
        tagged = eligibility.tagged,
        invited = eligibility.invitations.stx_self_custody,
        "STX self-custody eligibility evaluated"
    );
    available
}
