//! Set Minimum Lock Instruction

use anchor_lang::prelude::*;

use crate::constants::FARM_SEED;
use crate::error::FarmError;
use crate::events::MinLockTicksSet;
use crate::ledger::current_tick;
use crate::state::FarmConfig;

#[derive(Accounts)]
pub struct SetMinLockTicks<'info> {
    #[account(
        mut,
        seeds = [FARM_SEED, farm.stake_mint.as_ref(), farm.reward_mint.as_ref()],
        bump = farm.bump,
        has_one = authority @ FarmError::Unauthorized,
    )]
    pub farm: Account<'info, FarmConfig>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SetMinLockTicks>, min_lock_ticks: u64) -> Result<()> {
    let farm = &mut ctx.accounts.farm;

    farm.set_min_lock_ticks(min_lock_ticks);

    emit!(MinLockTicksSet {
        farm: farm.key(),
        min_lock_ticks,
        tick: current_tick()?,
    });

    msg!("Min lock ticks set to {}", min_lock_ticks);
    Ok(())
}
