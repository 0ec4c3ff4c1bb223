//! Accrual Ledger
//!
//! Pure accounting over [`FarmConfig`] and [`StakeAccount`]. Instruction
//! handlers call into this module to mutate state, persist the accounts and
//! only then move tokens, so every token CPI observes finalized ledger state.
//!
//! # Accrual
//! ```text
//! pending = (now - last_settlement_tick) * reward_rate * staked_amount / stake_unit
//! ```
//! `stake_unit` is `10^decimals` of the stake mint. Intermediate products are
//! computed in u128 and division truncates.
//!
//! # Settlement
//! Every balance-changing operation starts with [`settle`], which pays the
//! pending reward out of the reserve and moves `last_settlement_tick` to
//! `now`, even when nothing is owed.

use anchor_lang::prelude::*;

use crate::error::FarmError;
use crate::state::{FarmConfig, StakeAccount};

/// Snapshot returned by the `get_info` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FarmInfo {
    /// Reward the caller would receive if settled now
    pub pending_rewards: u64,
    /// Stake held for the caller
    pub staked: u64,
    pub reward_rate: u64,
    pub total_staked: u64,
    pub reward_reserve: u64,
    pub capacity: u64,
}

/// Token movements owed after a harvest has been booked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Harvest {
    /// Reward asset to pay the account
    pub reward: u64,
    /// Stake asset to forward to the liquidity sink
    pub surplus: u64,
}

/// Current tick of the host clock.
pub fn current_tick() -> Result<u64> {
    Ok(Clock::get()?.slot)
}

/// Reward accrued by `staked` units over `elapsed` ticks at `reward_rate`.
pub fn accrued_reward(elapsed: u64, reward_rate: u64, staked: u64, stake_unit: u64) -> Result<u64> {
    if elapsed == 0 || reward_rate == 0 || staked == 0 {
        return Ok(0);
    }
    require!(stake_unit > 0, FarmError::InvalidMint);

    let reward = (elapsed as u128)
        .checked_mul(reward_rate as u128)
        .and_then(|v| v.checked_mul(staked as u128))
        .ok_or(error!(FarmError::ArithmeticOverflow))?
        / stake_unit as u128;

    u64::try_from(reward).map_err(|_| error!(FarmError::ArithmeticOverflow))
}

/// Pending reward for `stake` at `now`. Zero when `now` is the last settlement tick.
pub fn calculate_rewards(farm: &FarmConfig, stake: &StakeAccount, now: u64) -> Result<u64> {
    accrued_reward(
        stake.ticks_since_settlement(now),
        farm.reward_rate,
        stake.staked_amount,
        farm.stake_unit,
    )
}

/// Settle pending reward for `stake` at `now`.
///
/// Debits the reserve and returns the amount the caller must transfer to the
/// owner. Fails without touching state if the reserve cannot cover it.
pub fn settle(farm: &mut FarmConfig, stake: &mut StakeAccount, now: u64) -> Result<u64> {
    require!(now >= stake.last_settlement_tick, FarmError::InvalidTick);

    let reward = calculate_rewards(farm, stake, now)?;
    if reward > 0 {
        farm.debit_reserve(reward)?;
        stake.total_harvested = stake.total_harvested.saturating_add(reward);
    }
    stake.last_settlement_tick = now;

    Ok(reward)
}

/// Book a deposit of `amount`. Returns the reward paid by the settlement step.
pub fn deposit(
    farm: &mut FarmConfig,
    stake: &mut StakeAccount,
    amount: u64,
    now: u64,
) -> Result<u64> {
    require!(amount > 0, FarmError::InvalidAmount);
    let total_staked = farm.staked_after_deposit(amount)?;
    let staked_amount = stake
        .staked_amount
        .checked_add(amount)
        .ok_or(error!(FarmError::ArithmeticOverflow))?;

    let reward = settle(farm, stake, now)?;

    stake.staked_amount = staked_amount;
    stake.lock_basis_tick = now;
    farm.record_deposit(total_staked, amount);

    Ok(reward)
}

/// Book a withdrawal of `amount`. Returns the reward paid by the settlement step.
///
/// Balance and lock are checked independently so callers can tell
/// `InsufficientBalance` from `LockNotExpired`.
pub fn withdraw(
    farm: &mut FarmConfig,
    stake: &mut StakeAccount,
    amount: u64,
    now: u64,
) -> Result<u64> {
    require!(amount > 0, FarmError::InvalidAmount);
    require!(amount <= stake.staked_amount, FarmError::InsufficientBalance);
    require!(
        stake.is_unlocked(now, farm.min_lock_ticks),
        FarmError::LockNotExpired
    );
    let total_staked = farm
        .total_staked
        .checked_sub(amount)
        .ok_or(error!(FarmError::ArithmeticOverflow))?;

    let reward = settle(farm, stake, now)?;

    stake.staked_amount -= amount;
    farm.record_withdrawal(total_staked, amount);

    Ok(reward)
}

/// Book a standalone harvest.
///
/// `stake_vault_balance` is the farm's stake asset holding; anything above
/// `total_staked` is surplus owed to the liquidity sink.
pub fn harvest(
    farm: &mut FarmConfig,
    stake: &mut StakeAccount,
    now: u64,
    stake_vault_balance: u64,
) -> Result<Harvest> {
    let reward = settle(farm, stake, now)?;

    let surplus = stake_vault_balance.saturating_sub(farm.total_staked);
    if surplus > 0 {
        farm.record_surplus(surplus);
    }

    Ok(Harvest { reward, surplus })
}

/// Ticks elapsed since the account's last settlement.
#[inline]
pub fn total_blocks_since_last_reward(stake: &StakeAccount, now: u64) -> u64 {
    stake.ticks_since_settlement(now)
}

/// First tick at which the account may withdraw.
#[inline]
pub fn can_withdraw_from(farm: &FarmConfig, stake: &StakeAccount) -> u64 {
    stake.unlock_tick(farm.min_lock_ticks)
}

/// Record to report for a caller, empty if they have never deposited.
pub fn stake_or_empty(stake: Option<&StakeAccount>) -> StakeAccount {
    stake.cloned().unwrap_or_default()
}

pub fn farm_info(farm: &FarmConfig, stake: &StakeAccount, now: u64) -> Result<FarmInfo> {
    Ok(FarmInfo {
        pending_rewards: calculate_rewards(farm, stake, now)?,
        staked: stake.staked_amount,
        reward_rate: farm.reward_rate,
        total_staked: farm.total_staked,
        reward_reserve: farm.reward_reserve,
        capacity: farm.capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: u64 = 1_000_000_000;

    fn farm(rate: u64, capacity: u64, reserve: u64, min_lock: u64) -> FarmConfig {
        let mut farm = FarmConfig::default();
        farm.initialize(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            9,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            min_lock,
            (255, 255, 255),
        )
        .unwrap();
        farm.apply_configuration(rate, capacity, reserve).unwrap();
        farm
    }

    fn account(now: u64) -> StakeAccount {
        let mut stake = StakeAccount::default();
        stake.initialize(Pubkey::new_unique(), Pubkey::new_unique(), now, 254);
        stake
    }

    #[test]
    fn test_accrued_reward_is_linear() {
        let one = accrued_reward(1, 7, 3 * UNIT, UNIT).unwrap();
        let ten = accrued_reward(10, 7, 3 * UNIT, UNIT).unwrap();
        assert_eq!(one, 21);
        assert_eq!(ten, 210);
    }

    #[test]
    fn test_accrued_reward_truncates() {
        // 1 tick * rate 1 * half a unit = 0.5 -> 0
        assert_eq!(accrued_reward(1, 1, UNIT / 2, UNIT).unwrap(), 0);
    }

    #[test]
    fn test_accrued_reward_overflow() {
        assert!(accrued_reward(u64::MAX, u64::MAX, u64::MAX, 1).is_err());
    }

    #[test]
    fn test_settle_advances_tick_without_reward() {
        let mut farm = farm(0, 1_000 * UNIT, 0, 0);
        let mut stake = account(5);

        let paid = settle(&mut farm, &mut stake, 9).unwrap();
        assert_eq!(paid, 0);
        assert_eq!(stake.last_settlement_tick, 9);
    }

    #[test]
    fn test_settle_rejects_past_tick() {
        let mut farm = farm(1, 1_000 * UNIT, 0, 0);
        let mut stake = account(10);
        assert!(settle(&mut farm, &mut stake, 9).is_err());
        assert_eq!(stake.last_settlement_tick, 10);
    }

    #[test]
    fn test_settle_fails_whole_when_reserve_short() {
        let mut farm = farm(100, 1_000 * UNIT, 50, 0);
        let mut stake = account(0);
        deposit(&mut farm, &mut stake, UNIT, 0).unwrap();

        // 1 tick * 100 * 1 unit = 100 > 50
        assert!(settle(&mut farm, &mut stake, 1).is_err());
        assert_eq!(stake.last_settlement_tick, 0);
        assert_eq!(farm.reward_reserve, 50);
        assert_eq!(stake.total_harvested, 0);
    }

    #[test]
    fn test_deposit_settles_before_increasing_stake() {
        let mut farm = farm(10, 1_000 * UNIT, 1_000_000, 0);
        let mut stake = account(0);

        assert_eq!(deposit(&mut farm, &mut stake, 2 * UNIT, 0).unwrap(), 0);
        // Accrues on the old balance (2 units) for 5 ticks
        assert_eq!(deposit(&mut farm, &mut stake, 3 * UNIT, 5).unwrap(), 100);
        assert_eq!(stake.staked_amount, 5 * UNIT);
        assert_eq!(farm.total_staked, 5 * UNIT);
        assert_eq!(farm.reward_reserve, 1_000_000 - 100);
    }

    #[test]
    fn test_deposit_zero_rejected() {
        let mut farm = farm(10, 1_000, 0, 0);
        let mut stake = account(0);
        assert!(deposit(&mut farm, &mut stake, 0, 1).is_err());
        assert_eq!(stake.last_settlement_tick, 0);
    }

    #[test]
    fn test_deposit_over_capacity_leaves_state_untouched() {
        let mut farm = farm(10, 100, 1_000, 0);
        let mut stake = account(0);
        deposit(&mut farm, &mut stake, 60, 0).unwrap();

        assert!(deposit(&mut farm, &mut stake, 41, 3).is_err());
        assert_eq!(stake.staked_amount, 60);
        assert_eq!(stake.last_settlement_tick, 0);
        assert_eq!(farm.total_staked, 60);
    }

    #[test]
    fn test_withdraw_checks_balance_and_lock_separately() {
        let mut farm = farm(0, 1_000, 0, 12);
        let mut stake = account(0);
        deposit(&mut farm, &mut stake, 100, 0).unwrap();

        let too_much = withdraw(&mut farm, &mut stake, 101, 50).unwrap_err();
        assert_eq!(too_much, error!(FarmError::InsufficientBalance));

        let too_early = withdraw(&mut farm, &mut stake, 100, 11).unwrap_err();
        assert_eq!(too_early, error!(FarmError::LockNotExpired));

        withdraw(&mut farm, &mut stake, 100, 12).unwrap();
        assert_eq!(stake.staked_amount, 0);
        assert_eq!(farm.total_staked, 0);
        assert_eq!(farm.total_withdrawn, 100);
    }

    #[test]
    fn test_harvest_reports_surplus() {
        let mut farm = farm(0, 1_000, 0, 0);
        let mut stake = account(0);
        deposit(&mut farm, &mut stake, 400, 0).unwrap();

        let outcome = harvest(&mut farm, &mut stake, 3, 400).unwrap();
        assert_eq!(outcome, Harvest { reward: 0, surplus: 0 });

        let outcome = harvest(&mut farm, &mut stake, 4, 425).unwrap();
        assert_eq!(outcome.surplus, 25);
        assert_eq!(farm.total_surplus_committed, 25);
        assert_eq!(stake.last_settlement_tick, 4);
    }

    #[test]
    fn test_farm_info_for_caller_without_record() {
        let mut farm = farm(5, 1_000 * UNIT, 10_000, 12);
        let mut depositor = account(0);
        deposit(&mut farm, &mut depositor, 4 * UNIT, 0).unwrap();

        let empty = stake_or_empty(None);
        assert_eq!(calculate_rewards(&farm, &empty, 40).unwrap(), 0);
        assert_eq!(
            farm_info(&farm, &empty, 40).unwrap(),
            FarmInfo {
                pending_rewards: 0,
                staked: 0,
                reward_rate: 5,
                total_staked: 4 * UNIT,
                reward_reserve: 10_000,
                capacity: 1_000 * UNIT,
            }
        );
        assert_eq!(stake_or_empty(Some(&depositor)).staked_amount, 4 * UNIT);
    }

    #[test]
    fn test_farm_info_snapshot() {
        let mut farm = farm(5, 1_000 * UNIT, 10_000, 0);
        let mut stake = account(0);
        deposit(&mut farm, &mut stake, 4 * UNIT, 0).unwrap();

        let info = farm_info(&farm, &stake, 3).unwrap();
        assert_eq!(
            info,
            FarmInfo {
                pending_rewards: 60,
                staked: 4 * UNIT,
                reward_rate: 5,
                total_staked: 4 * UNIT,
                reward_reserve: 10_000,
                capacity: 1_000 * UNIT,
            }
        );
    }
}
