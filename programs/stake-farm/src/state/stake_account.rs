//! Per-account stake record
//!
//! One record per (farm, owner), created on first deposit and never closed;
//! a zero balance is its terminal state.

use anchor_lang::prelude::*;

/// Stake record for a single participant.
///
/// PDA Seeds: `[b"stake", farm.key().as_ref(), owner.key().as_ref()]`
#[account]
#[derive(Default, Debug)]
pub struct StakeAccount {
    /// Participant that owns the stake
    pub owner: Pubkey,

    /// Parent farm
    pub farm: Pubkey,

    /// Stake asset held on the owner's behalf
    pub staked_amount: u64,

    /// Tick at which reward was last settled
    pub last_settlement_tick: u64,

    /// Tick of the most recent deposit; the lock period runs from here
    pub lock_basis_tick: u64,

    /// Lifetime reward paid to this account
    pub total_harvested: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl StakeAccount {
    pub const LEN: usize = 8 // discriminator
        + 32 // owner
        + 32 // farm
        + 8  // staked_amount
        + 8  // last_settlement_tick
        + 8  // lock_basis_tick
        + 8  // total_harvested
        + 1; // bump

    /// Bind a freshly created record to its owner and farm.
    pub fn initialize(&mut self, owner: Pubkey, farm: Pubkey, now: u64, bump: u8) {
        self.owner = owner;
        self.farm = farm;
        self.staked_amount = 0;
        self.last_settlement_tick = now;
        self.lock_basis_tick = now;
        self.total_harvested = 0;
        self.bump = bump;
    }

    /// `init_if_needed` hands back a zeroed record on first use.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.farm != Pubkey::default()
    }

    /// Accrual window: ticks since the last settlement.
    #[inline]
    pub fn ticks_since_settlement(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_settlement_tick)
    }

    /// First tick at which the account may withdraw.
    #[inline]
    pub fn unlock_tick(&self, min_lock_ticks: u64) -> u64 {
        self.lock_basis_tick.saturating_add(min_lock_ticks)
    }

    #[inline]
    pub fn is_unlocked(&self, now: u64, min_lock_ticks: u64) -> bool {
        now >= self.unlock_tick(min_lock_ticks)
    }
}
