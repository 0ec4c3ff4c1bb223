//! SPL token movements
//!
//! Thin wrappers over `anchor_spl::token::transfer`. Failures from the token
//! program are logged and surfaced as `FarmError::TransferFailed`; the
//! enclosing transaction is rolled back by the runtime.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::FARM_SEED;
use crate::error::FarmError;

/// Move `amount` from a user-owned account, signed by the user.
pub fn pull<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = Transfer {
        from,
        to,
        authority,
    };
    let cpi_ctx = CpiContext::new(token_program, cpi_accounts);
    token::transfer(cpi_ctx, amount).map_err(transfer_failed)
}

/// Move `amount` out of a farm-owned vault, signed by the farm PDA.
pub fn push<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    farm: AccountInfo<'info>,
    signer: &FarmSigner,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let bump = [signer.bump];
    let farm_seeds = &[
        FARM_SEED,
        signer.stake_mint.as_ref(),
        signer.reward_mint.as_ref(),
        &bump,
    ];
    let signer_seeds = &[&farm_seeds[..]];

    let cpi_accounts = Transfer {
        from,
        to,
        authority: farm,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount).map_err(transfer_failed)
}

/// Seed material for signing as the farm PDA, copied out of `FarmConfig`
/// so the account can stay mutably borrowed.
#[derive(Clone, Copy, Debug)]
pub struct FarmSigner {
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub bump: u8,
}

impl From<&crate::state::FarmConfig> for FarmSigner {
    fn from(farm: &crate::state::FarmConfig) -> Self {
        Self {
            stake_mint: farm.stake_mint,
            reward_mint: farm.reward_mint,
            bump: farm.bump,
        }
    }
}

fn transfer_failed(err: anchor_lang::error::Error) -> anchor_lang::error::Error {
    msg!("Token transfer failed: {}", err);
    error!(FarmError::TransferFailed)
}
