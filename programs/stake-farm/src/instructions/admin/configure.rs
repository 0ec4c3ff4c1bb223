//! Configure Farm Instruction
//!
//! Updates reward rate and capacity and tops up the reward reserve. Zero in
//! any argument leaves that parameter as it is. The top-up is pulled from the
//! authority's reward token account after the parameters are updated.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{FARM_SEED, REWARD_VAULT_SEED};
use crate::error::FarmError;
use crate::events::FarmConfigured;
use crate::ledger::current_tick;
use crate::state::FarmConfig;
use crate::token_ops;

#[derive(Accounts)]
pub struct Configure<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
        has_one = authority @ FarmError::Unauthorized,
    )]
    pub farm: Account<'info, FarmConfig>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, farm.key().as_ref()],
        bump = farm.reward_vault_bump,
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Funds the reserve top-up.
    #[account(
        mut,
        constraint = authority_reward_account.mint == farm.reward_mint @ FarmError::InvalidMint,
    )]
    pub authority_reward_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<Configure>,
    reward_rate: u64,
    capacity: u64,
    reserve_top_up: u64,
) -> Result<()> {
    let farm = &mut ctx.accounts.farm;

    farm.apply_configuration(reward_rate, capacity, reserve_top_up)?;
    farm.exit(&crate::ID)?;

    token_ops::pull(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.authority_reward_account.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.authority.to_account_info(),
        reserve_top_up,
    )?;

    emit!(FarmConfigured {
        farm: farm.key(),
        reward_rate: farm.reward_rate,
        capacity: farm.capacity,
        reserve_top_up,
        reward_reserve: farm.reward_reserve,
        tick: current_tick()?,
    });

    msg!("Farm configured");
    msg!("Reward rate: {}", farm.reward_rate);
    msg!("Capacity: {}", farm.capacity);
    msg!("Reward reserve: {}", farm.reward_reserve);

    Ok(())
}
