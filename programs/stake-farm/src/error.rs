//! Error types for Stake Farm
//!
//! Codes are assigned in declaration order; append new variants at the end.

use anchor_lang::prelude::*;

#[error_code]
pub enum FarmError {
    // ========== Access Control ==========

    /// Caller is not the farm authority
    #[msg("Unauthorized: caller is not farm authority")]
    Unauthorized, // 6000

    // ========== Deposit / Withdraw ==========

    /// Amount must be greater than zero
    #[msg("Invalid amount: must be greater than zero")]
    InvalidAmount, // 6001

    /// Deposit would push total stake past the farm capacity
    #[msg("Deposit exceeds remaining farm capacity")]
    CapacityExceeded, // 6002

    /// Withdrawal amount exceeds the account's staked balance
    #[msg("Insufficient staked balance. Try again later")]
    InsufficientBalance, // 6003

    /// Withdrawal attempted before the lock period elapsed
    #[msg("Withdrawal is too early: lock period has not expired")]
    LockNotExpired, // 6004

    // ========== Rewards ==========

    /// Pending reward exceeds what the reward reserve holds
    #[msg("Reward reserve exhausted")]
    ReserveExhausted, // 6005

    /// Settlement tick is earlier than the account's last settlement
    #[msg("Tick is earlier than the last settlement")]
    InvalidTick, // 6006

    // ========== Token Movement ==========

    /// Token transfer did not complete
    #[msg("Token transfer failed")]
    TransferFailed, // 6007

    /// Mint does not match farm configuration
    #[msg("Token mint does not match farm configuration")]
    InvalidMint, // 6008

    /// Recovery may not target the stake or reward asset
    #[msg("Managed stake and reward assets cannot be recovered")]
    ManagedAssetRecovery, // 6009

    // ========== Arithmetic ==========

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6010

    // ========== Liquidity ==========

    /// Liquidity sink does not match farm configuration
    #[msg("Liquidity sink does not match farm configuration")]
    InvalidLiquiditySink, // 6011
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        assert_eq!(u32::from(FarmError::Unauthorized), 6000);
        assert_eq!(u32::from(FarmError::ArithmeticOverflow), 6010);
        assert_eq!(u32::from(FarmError::InvalidLiquiditySink), 6011);
    }
}
