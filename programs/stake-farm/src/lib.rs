//! Stake Farm
//!
//! Accounts stake one SPL asset and accrue another at a fixed rate per slot
//! per staked unit. Reward is settled on every deposit, withdrawal and
//! harvest; principal is locked for a minimum number of slots after each
//! deposit and the pool enforces a total capacity.

#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod recovery;
pub mod state;
pub mod token_ops;


pub use instructions::*;
use ledger::FarmInfo;

declare_id!("9nUFfeVCXtBzjLRZD2YWCgmHjmq7fdCLwnJUpK4dtS6y");

#[program]
pub mod stake_farm {
    use super::*;

    pub fn initialize_farm(ctx: Context<InitializeFarm>, min_lock_ticks: u64) -> Result<()> {
        instructions::initialize_farm::handler(ctx, min_lock_ticks)
    }

    /// Update reward rate, capacity and reserve. Zero leaves a value unchanged.
    pub fn configure(
        ctx: Context<Configure>,
        reward_rate: u64,
        capacity: u64,
        reserve_top_up: u64,
    ) -> Result<()> {
        instructions::admin::configure::handler(ctx, reward_rate, capacity, reserve_top_up)
    }

    pub fn set_min_lock_ticks(ctx: Context<SetMinLockTicks>, min_lock_ticks: u64) -> Result<()> {
        instructions::admin::set_min_lock_ticks::handler(ctx, min_lock_ticks)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    pub fn harvest_rewards(ctx: Context<HarvestRewards>) -> Result<()> {
        instructions::harvest::handler(ctx)
    }

    pub fn recover_native(ctx: Context<RecoverNative>) -> Result<()> {
        instructions::admin::recover_native::handler(ctx)
    }

    pub fn recover_token(ctx: Context<RecoverToken>) -> Result<()> {
        instructions::admin::recover_token::handler(ctx)
    }

    // ========== Views ==========

    pub fn calculate_rewards(ctx: Context<StakeView>) -> Result<u64> {
        instructions::views::calculate_rewards_handler(ctx)
    }

    pub fn get_total_blocks_since_last_reward(ctx: Context<StakeView>) -> Result<u64> {
        instructions::views::total_blocks_since_last_reward_handler(ctx)
    }

    pub fn get_info(ctx: Context<StakeView>) -> Result<FarmInfo> {
        instructions::views::info_handler(ctx)
    }

    pub fn get_total_staked(ctx: Context<StakeView>) -> Result<u64> {
        instructions::views::total_staked_handler(ctx)
    }

    pub fn can_withdraw_from(ctx: Context<StakeView>) -> Result<u64> {
        instructions::views::can_withdraw_from_handler(ctx)
    }

    pub fn get_remaining_capacity(ctx: Context<FarmView>) -> Result<u64> {
        instructions::views::remaining_capacity_handler(ctx)
    }

    pub fn get_total_reward_reserve(ctx: Context<FarmView>) -> Result<u64> {
        instructions::views::total_reward_reserve_handler(ctx)
    }
}
