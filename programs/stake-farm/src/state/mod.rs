//! State account definitions for Stake Farm

pub mod farm_config;
pub mod stake_account;

pub use farm_config::FarmConfig;
pub use stake_account::StakeAccount;
