//! Recovery of assets sent to the farm by mistake
//!
//! Only unmanaged balances are recoverable. The stake and reward mints are
//! hard-blocked, and native lamports are swept down to the rent-exempt floor
//! the farm account needs to keep existing.

use anchor_lang::prelude::*;

use crate::error::FarmError;
use crate::state::FarmConfig;

/// Lamports that can leave the farm account without dropping it below `rent_floor`.
#[inline]
pub fn recoverable_lamports(balance: u64, rent_floor: u64) -> u64 {
    balance.saturating_sub(rent_floor)
}

/// Reject recovery of the stake or reward asset.
pub fn require_unmanaged_mint(farm: &FarmConfig, mint: &Pubkey) -> Result<()> {
    require!(!farm.is_managed_mint(mint), FarmError::ManagedAssetRecovery);
    Ok(())
}

/// Token amount a sweep of `balance` units of `mint` moves out of the farm.
///
/// The whole balance of an unmanaged mint; zero means there is nothing to do.
pub fn recoverable_tokens(farm: &FarmConfig, mint: &Pubkey, balance: u64) -> Result<u64> {
    require_unmanaged_mint(farm, mint)?;
    Ok(balance)
}
