//! Recover Native Currency Instruction
//!
//! The farm exposes no entry point that accepts lamports, so anything above
//! the rent-exempt floor arrived by direct transfer and belongs to nobody.
//! Sweeps that excess to the authority.

use anchor_lang::prelude::*;
use solana_program::native_token::lamports_to_sol;

use crate::constants::FARM_SEED;
use crate::error::FarmError;
use crate::events::NativeRecovered;
use crate::ledger::current_tick;
use crate::recovery::recoverable_lamports;
use crate::state::FarmConfig;

#[derive(Accounts)]
pub struct RecoverNative<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
        has_one = authority @ FarmError::Unauthorized,
    )]
    pub farm: Account<'info, FarmConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<RecoverNative>) -> Result<()> {
    let farm_info = ctx.accounts.farm.to_account_info();
    let authority_info = ctx.accounts.authority.to_account_info();

    let rent_floor = Rent::get()?.minimum_balance(farm_info.data_len());
    let lamports = recoverable_lamports(farm_info.lamports(), rent_floor);

    if lamports == 0 {
        msg!("No native balance to recover");
        return Ok(());
    }

    let authority_balance = authority_info
        .lamports()
        .checked_add(lamports)
        .ok_or(error!(FarmError::ArithmeticOverflow))?;

    **farm_info.try_borrow_mut_lamports()? -= lamports;
    **authority_info.try_borrow_mut_lamports()? = authority_balance;

    emit!(NativeRecovered {
        farm: farm_info.key(),
        authority: authority_info.key(),
        lamports,
        tick: current_tick()?,
    });

    msg!("Recovered {} SOL", lamports_to_sol(lamports));
    Ok(())
}
