//! Instruction handlers for Stake Farm

pub mod admin;
pub mod deposit;
pub mod harvest;
pub mod initialize_farm;
pub mod views;
pub mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use harvest::*;
pub use initialize_farm::*;
pub use views::*;
pub use withdraw::*;
