//! Authority-only instructions for Stake Farm

pub mod configure;
pub mod recover_native;
pub mod recover_token;
pub mod set_min_lock_ticks;

pub use configure::*;
pub use recover_native::*;
pub use recover_token::*;
pub use set_min_lock_ticks::*;
