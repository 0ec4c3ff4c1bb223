//! PDA seeds and program-wide constants

use anchor_lang::prelude::*;

/// Farm configuration PDA: `[FARM_SEED, stake_mint, reward_mint]`
#[constant]
pub const FARM_SEED: &[u8] = b"farm";

/// Stake asset vault PDA: `[STAKE_VAULT_SEED, farm]`
#[constant]
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";

/// Reward asset vault PDA: `[REWARD_VAULT_SEED, farm]`
#[constant]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Per-account stake record PDA: `[STAKE_ACCOUNT_SEED, farm, owner]`
#[constant]
pub const STAKE_ACCOUNT_SEED: &[u8] = b"stake";

/// Largest mint decimals for which `10^decimals` still fits in a u64.
pub const MAX_STAKE_DECIMALS: u8 = 19;
