//! Read-only views
//!
//! Each view returns its value through Anchor return data and never mutates
//! state. Clients may equally deserialize the accounts and call the
//! `ledger` functions directly.
//!
//! `stake_account` is optional on the per-account views. A caller who has
//! never deposited passes `None` and is reported as an empty record: zero
//! stake and zero pending reward alongside the pool-wide figures.

use anchor_lang::prelude::*;

use crate::constants::FARM_SEED;
use crate::error::FarmError;
use crate::ledger::{self, current_tick, FarmInfo};
use crate::state::{FarmConfig, StakeAccount};

#[derive(Accounts)]
pub struct FarmView<'info> {
    #[account(
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
    )]
    pub farm: Account<'info, FarmConfig>,
}

#[derive(Accounts)]
pub struct StakeView<'info> {
    #[account(
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
    )]
    pub farm: Account<'info, FarmConfig>,

    #[account(has_one = farm @ FarmError::Unauthorized)]
    pub stake_account: Option<Account<'info, StakeAccount>>,
}

impl StakeView<'_> {
    fn stake(&self) -> StakeAccount {
        ledger::stake_or_empty(self.stake_account.as_deref())
    }
}

pub fn calculate_rewards_handler(ctx: Context<StakeView>) -> Result<u64> {
    ledger::calculate_rewards(&ctx.accounts.farm, &ctx.accounts.stake(), current_tick()?)
}

pub fn total_blocks_since_last_reward_handler(ctx: Context<StakeView>) -> Result<u64> {
    Ok(ledger::total_blocks_since_last_reward(
        &ctx.accounts.stake(),
        current_tick()?,
    ))
}

pub fn info_handler(ctx: Context<StakeView>) -> Result<FarmInfo> {
    ledger::farm_info(&ctx.accounts.farm, &ctx.accounts.stake(), current_tick()?)
}

pub fn total_staked_handler(ctx: Context<StakeView>) -> Result<u64> {
    Ok(ctx.accounts.stake().staked_amount)
}

pub fn can_withdraw_from_handler(ctx: Context<StakeView>) -> Result<u64> {
    Ok(ledger::can_withdraw_from(
        &ctx.accounts.farm,
        &ctx.accounts.stake(),
    ))
}

pub fn remaining_capacity_handler(ctx: Context<FarmView>) -> Result<u64> {
    Ok(ctx.accounts.farm.remaining_capacity())
}

pub fn total_reward_reserve_handler(ctx: Context<FarmView>) -> Result<u64> {
    Ok(ctx.accounts.farm.reward_reserve)
}
