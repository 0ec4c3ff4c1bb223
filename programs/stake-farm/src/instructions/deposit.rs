//! Deposit Instruction
//!
//! Stakes tokens into the farm. Any reward pending on the existing balance is
//! settled and paid first, and the account's lock period restarts at the
//! current tick.
//!
//! # Ordering
//! 1. Validate amount and capacity
//! 2. Settle, credit stake, reset lock basis (ledger)
//! 3. Persist farm and stake account
//! 4. Pull stake tokens, pay reward

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{FARM_SEED, REWARD_VAULT_SEED, STAKE_ACCOUNT_SEED, STAKE_VAULT_SEED};
use crate::error::FarmError;
use crate::events::Deposited;
use crate::ledger::{self, current_tick};
use crate::state::{FarmConfig, StakeAccount};
use crate::token_ops::{self, FarmSigner};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
    )]
    pub farm: Account<'info, FarmConfig>,

    /// Created on the owner's first deposit.
    #[account(
        init_if_needed,
        payer = owner,
        space = StakeAccount::LEN,
        seeds = [STAKE_ACCOUNT_SEED, farm.key().as_ref(), owner.key().as_ref()],
        bump,
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

    /// Source of the deposited stake tokens.
    #[account(
        mut,
        constraint = owner_stake_account.mint == farm.stake_mint @ FarmError::InvalidMint,
    )]
    pub owner_stake_account: Account<'info, TokenAccount>,

    /// Receives any reward settled by this deposit.
    #[account(
        mut,
        constraint = owner_reward_account.mint == farm.reward_mint @ FarmError::InvalidMint,
    )]
    pub owner_reward_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    let stake_account = &mut ctx.accounts.stake_account;
    let owner = ctx.accounts.owner.key();
    let tick = current_tick()?;

    if !stake_account.is_initialized() {
        stake_account.initialize(owner, farm.key(), tick, ctx.bumps.stake_account);
    }

    // ========== LEDGER ==========

    let reward = ledger::deposit(farm, stake_account, amount, tick)?;

    farm.exit(&crate::ID)?;
    stake_account.exit(&crate::ID)?;

    // ========== TOKEN TRANSFERS ==========

    token_ops::pull(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.owner_stake_account.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    token_ops::push(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.owner_reward_account.to_account_info(),
        farm.to_account_info(),
        &FarmSigner::from(&**farm),
        reward,
    )?;

    emit!(Deposited {
        farm: farm.key(),
        owner,
        amount,
        staked_amount: stake_account.staked_amount,
        total_staked: farm.total_staked,
        reward_paid: reward,
        tick,
    });

    msg!("Deposit successful");
    msg!("Amount: {}", amount);
    msg!("Reward paid: {}", reward);
    msg!("Unlocks at tick: {}", ledger::can_withdraw_from(farm, stake_account));

    Ok(())
}
