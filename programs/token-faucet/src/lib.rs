//! Token Faucet - single-claim SPL token distribution

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

#[cfg(not(target_os = "solana"))]
pub mod client;


use instructions::*;

declare_id!("ExK6syinQPaNvxeF4QzwMhxrhg7rVxEvdcvfC4f4yjND");

#[program]
pub mod token_faucet {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, faucet_bump: u8) -> Result<()> {
        instructions::initialize::handler(ctx, faucet_bump)
    }

    /// Mint one token to the requester's holding account, once per identity.
    /// At most `MAX_CLAIMERS` identities can ever claim.
    pub fn claim(ctx: Context<Claim>, mint_authority_bump: u8) -> Result<()> {
        instructions::claim::handler(ctx, mint_authority_bump)
    }
}
