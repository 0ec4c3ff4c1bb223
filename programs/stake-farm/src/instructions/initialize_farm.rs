//! Initialize Farm Instruction

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{FARM_SEED, REWARD_VAULT_SEED, STAKE_VAULT_SEED};
use crate::error::FarmError;
use crate::events::FarmInitialized;
use crate::ledger::current_tick;
use crate::state::FarmConfig;

#[derive(Accounts)]
pub struct InitializeFarm<'info> {
    #[account(
        init,
        payer = authority,
        space = FarmConfig::LEN,
        seeds = [FARM_SEED, stake_mint.key().as_ref(), reward_mint.key().as_ref()],
        bump
    )]
    pub farm: Box<Account<'info, FarmConfig>>,

    #[account(
        init,
        payer = authority,
        token::mint = stake_mint,
        token::authority = farm,
        seeds = [STAKE_VAULT_SEED, farm.key().as_ref()],
        bump
    )]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        token::mint = reward_mint,
        token::authority = farm,
        seeds = [REWARD_VAULT_SEED, farm.key().as_ref()],
        bump
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    pub stake_mint: Box<Account<'info, Mint>>,

    pub reward_mint: Box<Account<'info, Mint>>,

    /// Receives surplus stake asset during harvests.
    #[account(
        constraint = liquidity_sink.mint == stake_mint.key() @ FarmError::InvalidMint,
    )]
    pub liquidity_sink: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<InitializeFarm>, min_lock_ticks: u64) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    let tick = current_tick()?;

    farm.initialize(
        ctx.accounts.authority.key(),
        ctx.accounts.stake_mint.key(),
        ctx.accounts.reward_mint.key(),
        ctx.accounts.stake_mint.decimals,
        ctx.accounts.stake_vault.key(),
        ctx.accounts.reward_vault.key(),
        ctx.accounts.liquidity_sink.key(),
        min_lock_ticks,
        (
            ctx.bumps.farm,
            ctx.bumps.stake_vault,
            ctx.bumps.reward_vault,
        ),
    )?;

    emit!(FarmInitialized {
        farm: farm.key(),
        authority: farm.authority,
        stake_mint: farm.stake_mint,
        reward_mint: farm.reward_mint,
        liquidity_sink: farm.liquidity_sink,
        min_lock_ticks,
        tick,
    });

    msg!("Farm initialized");
    msg!("Stake unit: {}", farm.stake_unit);
    msg!("Min lock ticks: {}", min_lock_ticks);
    Ok(())
}
