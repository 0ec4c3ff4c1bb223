//! Events for Stake Farm

use anchor_lang::prelude::*;

#[event]
pub struct FarmInitialized {
    pub farm: Pubkey,
    pub authority: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub liquidity_sink: Pubkey,
    pub min_lock_ticks: u64,
    pub tick: u64,
}

#[event]
pub struct FarmConfigured {
    pub farm: Pubkey,
    pub reward_rate: u64,
    pub capacity: u64,
    pub reserve_top_up: u64,
    pub reward_reserve: u64,
    pub tick: u64,
}

#[event]
pub struct MinLockTicksSet {
    pub farm: Pubkey,
    pub min_lock_ticks: u64,
    pub tick: u64,
}

#[event]
pub struct Deposited {
    pub farm: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub total_staked: u64,
    pub reward_paid: u64,
    pub tick: u64,
}

#[event]
pub struct Withdrawn {
    pub farm: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub total_staked: u64,
    pub reward_paid: u64,
    pub tick: u64,
}

#[event]
pub struct RewardsHarvested {
    pub farm: Pubkey,
    pub owner: Pubkey,
    pub reward_paid: u64,
    pub reward_reserve: u64,
    pub tick: u64,
}

#[event]
pub struct SurplusCommitted {
    pub farm: Pubkey,
    pub liquidity_sink: Pubkey,
    pub amount: u64,
    pub tick: u64,
}

#[event]
pub struct NativeRecovered {
    pub farm: Pubkey,
    pub authority: Pubkey,
    pub lamports: u64,
    pub tick: u64,
}

#[event]
pub struct TokenRecovered {
    pub farm: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub tick: u64,
}
