//! Withdraw Instruction
//!
//! Returns staked tokens to the owner once the lock period measured from the
//! most recent deposit has elapsed. Pending reward is settled and paid in the
//! same instruction.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{FARM_SEED, REWARD_VAULT_SEED, STAKE_ACCOUNT_SEED, STAKE_VAULT_SEED};
use crate::error::FarmError;
use crate::events::Withdrawn;
use crate::ledger::{self, current_tick};
use crate::state::{FarmConfig, StakeAccount};
use crate::token_ops::{self, FarmSigner};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
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

    /// Receives the withdrawn stake tokens.
    #[account(
        mut,
        constraint = owner_stake_account.mint == farm.stake_mint @ FarmError::InvalidMint,
    )]
    pub owner_stake_account: Account<'info, TokenAccount>,

    /// Receives any reward settled by this withdrawal.
    #[account(
        mut,
        constraint = owner_reward_account.mint == farm.reward_mint @ FarmError::InvalidMint,
    )]
    pub owner_reward_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    let stake_account = &mut ctx.accounts.stake_account;
    let tick = current_tick()?;

    let reward = ledger::withdraw(farm, stake_account, amount, tick)?;

    farm.exit(&crate::ID)?;
    stake_account.exit(&crate::ID)?;

    let signer = FarmSigner::from(&**farm);

    token_ops::push(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.owner_stake_account.to_account_info(),
        farm.to_account_info(),
        &signer,
        amount,
    )?;

    token_ops::push(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.owner_reward_account.to_account_info(),
        farm.to_account_info(),
        &signer,
        reward,
    )?;

    emit!(Withdrawn {
        farm: farm.key(),
        owner: stake_account.owner,
        amount,
        staked_amount: stake_account.staked_amount,
        total_staked: farm.total_staked,
        reward_paid: reward,
        tick,
    });

    msg!("Withdrawal successful");
    msg!("Amount: {}", amount);
    msg!("Reward paid: {}", reward);

    Ok(())
}
