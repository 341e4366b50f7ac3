//! Events emitted by the Token Faucet

use anchor_lang::prelude::*;

/// Emitted once, when mint and claim ledger are created.
#[event]
pub struct FaucetInitialized {
    pub faucet: Pubkey,
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub funder: Pubkey,
    pub max_claimers: u32,
    pub timestamp: i64,
}

/// Emitted for every successful claim.
#[event]
pub struct TokensClaimed {
    pub faucet: Pubkey,
    pub requester: Pubkey,
    pub holding_account: Pubkey,
    pub amount: u64,
    pub total_claimers: u32,
    pub timestamp: i64,
}
