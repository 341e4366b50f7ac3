//! Faucet mint parameters
//!
//! The mint itself is a plain SPL mint account. This module pins the values
//! it is created with and the checks applied to it before every mint.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;

use crate::constants::{CLAIM_AMOUNT, FAUCET_DECIMALS, MINT_AUTHORITY_SEED};
use crate::error::FaucetError;

/// Expected configuration of the faucet mint.
///
/// PDA Seeds: `[b"mint"]`, authority PDA Seeds: `[b"mint-authority"]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintLedger {
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub mint_authority_bump: u8,
}

impl MintLedger {
    pub const DECIMALS: u8 = FAUCET_DECIMALS;

    pub fn new(mint: Pubkey, mint_authority: Pubkey, mint_authority_bump: u8) -> Self {
        Self {
            mint,
            mint_authority,
            mint_authority_bump,
        }
    }

    /// Require the supplied mint to be this ledger's mint.
    pub fn require_mint(&self, mint: &Pubkey) -> Result<()> {
        require_keys_eq!(*mint, self.mint, FaucetError::InvalidDerivedAddress);
        Ok(())
    }

    /// Require the mint's recorded authority to be the program-derived one.
    pub fn require_authority(&self, recorded: &COption<Pubkey>) -> Result<()> {
        require!(
            *recorded == COption::Some(self.mint_authority),
            FaucetError::InvalidDerivedAddress
        );
        Ok(())
    }

    /// Whole tokens represented by `amount` base units.
    pub fn ui_amount(amount: u64) -> f64 {
        amount as f64 / 10u64.pow(Self::DECIMALS as u32) as f64
    }
}

/// Get mint authority seeds for signing (when bump is known)
pub fn mint_authority_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [MINT_AUTHORITY_SEED, bump]
}

/// One claim is exactly one whole token.
const _: () = assert!(CLAIM_AMOUNT == 10u64.pow(FAUCET_DECIMALS as u32));
