//! Recover Foreign Token Instruction
//!
//! Sweeps the entire balance of a farm-owned token account holding an asset
//! the farm does not manage. The stake and reward mints are rejected so this
//! can never drain depositor principal or the reward reserve.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::FARM_SEED;
use crate::error::FarmError;
use crate::events::TokenRecovered;
use crate::ledger::current_tick;
use crate::recovery::recoverable_tokens;
use crate::state::FarmConfig;
use crate::token_ops::{self, FarmSigner};

#[derive(Accounts)]
pub struct RecoverToken<'info> {
    #[account(
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
        has_one = authority @ FarmError::Unauthorized,
    )]
    pub farm: Account<'info, FarmConfig>,

    /// Token account held by the farm PDA for the stray asset.
    #[account(
        mut,
        constraint = foreign_token_account.owner == farm.key() @ FarmError::Unauthorized,
    )]
    pub foreign_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = authority_token_account.mint == foreign_token_account.mint @ FarmError::InvalidMint,
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RecoverToken>) -> Result<()> {
    let farm = &ctx.accounts.farm;
    let mint = ctx.accounts.foreign_token_account.mint;

    let amount = recoverable_tokens(farm, &mint, ctx.accounts.foreign_token_account.amount)?;
    if amount == 0 {
        msg!("No token balance to recover");
        return Ok(());
    }

    token_ops::push(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.foreign_token_account.to_account_info(),
        ctx.accounts.authority_token_account.to_account_info(),
        farm.to_account_info(),
        &FarmSigner::from(&**farm),
        amount,
    )?;

    emit!(TokenRecovered {
        farm: farm.key(),
        authority: ctx.accounts.authority.key(),
        mint,
        amount,
        tick: current_tick()?,
    });

    msg!("Recovered {} tokens of mint {}", amount, mint);
    Ok(())
}
