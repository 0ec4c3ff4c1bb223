//! Harvest Rewards Instruction
//!
//! Settles and pays pending reward without touching principal. If the stake
//! vault holds more than the farm has booked as staked (stray transfers,
//! dust), the excess is forwarded to the liquidity sink.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{FARM_SEED, REWARD_VAULT_SEED, STAKE_ACCOUNT_SEED, STAKE_VAULT_SEED};
use crate::error::FarmError;
use crate::events::{RewardsHarvested, SurplusCommitted};
use crate::ledger::{self, current_tick};
use crate::state::{FarmConfig, StakeAccount};
use crate::token_ops::{self, FarmSigner};

#[derive(Accounts)]
pub struct HarvestRewards<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
        has_one = liquidity_sink @ FarmError::InvalidLiquiditySink,
    )]
    pub farm: Account<'info, FarmConfig>,

    #[account(
        mut,
        seeds = [STAKE_ACCOUNT_SEED, farm.key().as_ref(), owner.key().as_ref()],
        bump = stake_account.bump,
        has_one = owner @ FarmError::Unauthorized,
        has_one = farm @ FarmError::Unauthorized,
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        seeds = [STAKE_VAULT_SEED, farm.key().as_ref()],
        bump = farm.stake_vault_bump,
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, farm.key().as_ref()],
        bump = farm.reward_vault_bump,
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_reward_account.mint == farm.reward_mint @ FarmError::InvalidMint,
    )]
    pub owner_reward_account: Account<'info, TokenAccount>,

    /// Surplus destination captured at initialization.
    #[account(mut)]
    pub liquidity_sink: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<HarvestRewards>) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    let stake_account = &mut ctx.accounts.stake_account;
    let tick = current_tick()?;

    let outcome = ledger::harvest(farm, stake_account, tick, ctx.accounts.stake_vault.amount)?;

    farm.exit(&crate::ID)?;
    stake_account.exit(&crate::ID)?;

    let signer = FarmSigner::from(&**farm);

    token_ops::push(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.owner_reward_account.to_account_info(),
        farm.to_account_info(),
        &signer,
        outcome.reward,
    )?;

    emit!(RewardsHarvested {
        farm: farm.key(),
        owner: stake_account.owner,
        reward_paid: outcome.reward,
        reward_reserve: farm.reward_reserve,
        tick,
    });

    msg!("Harvest successful");
    msg!("Reward paid: {}", outcome.reward);

    if outcome.surplus > 0 {
        token_ops::push(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.stake_vault.to_account_info(),
            ctx.accounts.liquidity_sink.to_account_info(),
            farm.to_account_info(),
            &signer,
            outcome.surplus,
        )?;

        emit!(SurplusCommitted {
            farm: farm.key(),
            liquidity_sink: farm.liquidity_sink,
            amount: outcome.surplus,
            tick,
        });

        msg!("Surplus committed to liquidity: {}", outcome.surplus);
    }

    Ok(())
}
