//! Farm configuration state account
//!
//! Holds the pool-wide side of the accrual ledger: reward rate, capacity,
//! lock period, reward reserve and the running stake total. Every mutating
//! method uses checked arithmetic and validates before it writes.

use anchor_lang::prelude::*;

use crate::constants::MAX_STAKE_DECIMALS;
use crate::error::FarmError;

/// Pool state singleton.
///
/// PDA Seeds: `[b"farm", stake_mint.key().as_ref(), reward_mint.key().as_ref()]`
#[account]
#[derive(Default, Debug)]
pub struct FarmConfig {
    /// Farm authority (owner) - configures the farm and recovers stray assets
    pub authority: Pubkey,

    /// SPL mint of the asset being staked
    pub stake_mint: Pubkey,

    /// SPL mint of the asset paid out as reward
    pub reward_mint: Pubkey,

    /// Stake vault PDA address (cached for convenience)
    pub stake_vault: Pubkey,

    /// Reward vault PDA address (cached for convenience)
    pub reward_vault: Pubkey,

    /// Token account that receives surplus stake asset during harvests
    pub liquidity_sink: Pubkey,

    /// Reward units accrued per tick per whole unit of stake asset
    pub reward_rate: u64,

    /// Maximum total stake the farm accepts
    pub capacity: u64,

    /// Reward asset set aside for payouts
    pub reward_reserve: u64,

    /// Ticks a deposit must age before the account may withdraw
    pub min_lock_ticks: u64,

    /// Sum of every account's staked amount
    pub total_staked: u64,

    /// `10^decimals` of the stake mint (fixed-point denominator)
    pub stake_unit: u64,

    /// Lifetime stake deposited
    pub total_deposited: u64,

    /// Lifetime stake withdrawn
    pub total_withdrawn: u64,

    /// Lifetime reward paid out
    pub total_rewards_paid: u64,

    /// Lifetime surplus forwarded to the liquidity sink
    pub total_surplus_committed: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Stake vault bump seed
    pub stake_vault_bump: u8,

    /// Reward vault bump seed
    pub reward_vault_bump: u8,

    /// Schema version
    pub version: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u64; 8],
}

impl FarmConfig {
    pub const LEN: usize = 8 // discriminator
        + 32 // authority
        + 32 // stake_mint
        + 32 // reward_mint
        + 32 // stake_vault
        + 32 // reward_vault
        + 32 // liquidity_sink
        + 8  // reward_rate
        + 8  // capacity
        + 8  // reward_reserve
        + 8  // min_lock_ticks
        + 8  // total_staked
        + 8  // stake_unit
        + 8  // total_deposited
        + 8  // total_withdrawn
        + 8  // total_rewards_paid
        + 8  // total_surplus_committed
        + 1  // bump
        + 1  // stake_vault_bump
        + 1  // reward_vault_bump
        + 1  // version
        + 8 * 8; // reserved

    pub const VERSION: u8 = 1;

    /// Initialize farm configuration.
    ///
    /// Rate, capacity and reserve start at zero; the authority sets them
    /// through `configure`.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        stake_mint: Pubkey,
        reward_mint: Pubkey,
        stake_decimals: u8,
        stake_vault: Pubkey,
        reward_vault: Pubkey,
        liquidity_sink: Pubkey,
        min_lock_ticks: u64,
        bumps: (u8, u8, u8),
    ) -> Result<()> {
        require!(stake_mint != reward_mint, FarmError::InvalidMint);

        self.authority = authority;
        self.stake_mint = stake_mint;
        self.reward_mint = reward_mint;
        self.stake_vault = stake_vault;
        self.reward_vault = reward_vault;
        self.liquidity_sink = liquidity_sink;
        self.reward_rate = 0;
        self.capacity = 0;
        self.reward_reserve = 0;
        self.min_lock_ticks = min_lock_ticks;
        self.total_staked = 0;
        self.stake_unit = stake_unit_for(stake_decimals)?;
        self.total_deposited = 0;
        self.total_withdrawn = 0;
        self.total_rewards_paid = 0;
        self.total_surplus_committed = 0;
        (self.bump, self.stake_vault_bump, self.reward_vault_bump) = bumps;
        self.version = Self::VERSION;
        self._reserved = [0u64; 8];
        Ok(())
    }

    /// Apply an owner configuration update.
    ///
    /// A zero in any position leaves that parameter unchanged. The top-up is
    /// additive and is applied after rate and capacity.
    pub fn apply_configuration(
        &mut self,
        reward_rate: u64,
        capacity: u64,
        reserve_top_up: u64,
    ) -> Result<()> {
        let reward_reserve = self
            .reward_reserve
            .checked_add(reserve_top_up)
            .ok_or(error!(FarmError::ArithmeticOverflow))?;

        if reward_rate > 0 {
            self.reward_rate = reward_rate;
        }
        if capacity > 0 {
            self.capacity = capacity;
        }
        self.reward_reserve = reward_reserve;
        Ok(())
    }

    /// Replace the lock period. Zero is a valid value here.
    #[inline]
    pub fn set_min_lock_ticks(&mut self, min_lock_ticks: u64) {
        self.min_lock_ticks = min_lock_ticks;
    }

    /// Stake the farm can still accept. Zero once capacity is reached or lowered below the total.
    #[inline]
    pub fn remaining_capacity(&self) -> u64 {
        self.capacity.saturating_sub(self.total_staked)
    }

    /// Total stake after accepting `amount`, or `CapacityExceeded`.
    pub fn staked_after_deposit(&self, amount: u64) -> Result<u64> {
        let total = self
            .total_staked
            .checked_add(amount)
            .ok_or(error!(FarmError::CapacityExceeded))?;
        require!(total <= self.capacity, FarmError::CapacityExceeded);
        Ok(total)
    }

    /// Remove `amount` from the reward reserve for a payout.
    pub fn debit_reserve(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.reward_reserve, FarmError::ReserveExhausted);
        self.reward_reserve -= amount;
        self.total_rewards_paid = self.total_rewards_paid.saturating_add(amount);
        Ok(())
    }

    /// Lifetime counters saturate so recording never fails after settlement.
    pub fn record_deposit(&mut self, new_total_staked: u64, amount: u64) {
        self.total_deposited = self.total_deposited.saturating_add(amount);
        self.total_staked = new_total_staked;
    }

    pub fn record_withdrawal(&mut self, new_total_staked: u64, amount: u64) {
        self.total_withdrawn = self.total_withdrawn.saturating_add(amount);
        self.total_staked = new_total_staked;
    }

    pub fn record_surplus(&mut self, amount: u64) {
        self.total_surplus_committed = self.total_surplus_committed.saturating_add(amount);
    }

    /// Whether `mint` is one of the two assets the farm owes to depositors.
    #[inline]
    pub fn is_managed_mint(&self, mint: &Pubkey) -> bool {
        *mint == self.stake_mint || *mint == self.reward_mint
    }
}

/// Fixed-point denominator for a stake mint with `decimals` places.
pub fn stake_unit_for(decimals: u8) -> Result<u64> {
    require!(decimals <= MAX_STAKE_DECIMALS, FarmError::InvalidMint);
    10u64
        .checked_pow(decimals as u32)
        .ok_or(error!(FarmError::InvalidMint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(capacity: u64) -> FarmConfig {
        let mut farm = FarmConfig::default();
        farm.initialize(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            9,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            12,
            (255, 254, 253),
        )
        .unwrap();
        farm.apply_configuration(100, capacity, 0).unwrap();
        farm
    }

    #[test]
    fn test_farm_config_size() {
        assert!(FarmConfig::LEN >= 8 + 32 * 6 + 8 * 10 + 4 + 64);
    }

    #[test]
    fn test_initialize_rejects_identical_mints() {
        let mint = Pubkey::new_unique();
        let mut farm = FarmConfig::default();
        let result = farm.initialize(
            Pubkey::new_unique(),
            mint,
            mint,
            9,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
            (1, 2, 3),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_stake_unit_for_decimals() {
        assert_eq!(stake_unit_for(0).unwrap(), 1);
        assert_eq!(stake_unit_for(9).unwrap(), 1_000_000_000);
        assert_eq!(stake_unit_for(19).unwrap(), 10_000_000_000_000_000_000);
        assert!(stake_unit_for(20).is_err());
    }

    #[test]
    fn test_capacity_boundary() {
        let mut farm = configured(1_000);
        farm.total_staked = 400;

        assert_eq!(farm.staked_after_deposit(600).unwrap(), 1_000);
        assert!(farm.staked_after_deposit(601).is_err());
        assert!(farm.staked_after_deposit(u64::MAX).is_err());
    }

    #[test]
    fn test_remaining_capacity_saturates() {
        let mut farm = configured(1_000);
        farm.total_staked = 1_000;
        farm.apply_configuration(0, 500, 0).unwrap();
        assert_eq!(farm.capacity, 500);
        assert_eq!(farm.remaining_capacity(), 0);
    }

    #[test]
    fn test_debit_reserve_never_overdraws() {
        let mut farm = configured(1_000);
        farm.apply_configuration(0, 0, 50).unwrap();

        assert!(farm.debit_reserve(51).is_err());
        assert_eq!(farm.reward_reserve, 50);

        farm.debit_reserve(50).unwrap();
        assert_eq!(farm.reward_reserve, 0);
        assert_eq!(farm.total_rewards_paid, 50);
    }

    #[test]
    fn test_managed_mints() {
        let farm = configured(1);
        assert!(farm.is_managed_mint(&farm.stake_mint));
        assert!(farm.is_managed_mint(&farm.reward_mint));
        assert!(!farm.is_managed_mint(&Pubkey::new_unique()));
    }
}
