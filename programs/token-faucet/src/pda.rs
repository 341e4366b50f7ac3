//! Program-derived addresses of the faucet
//!
//! Every piece of global faucet state lives at an address computed from a
//! fixed seed label and the program id. The canonical bump (the first bump,
//! searching down from 255, that yields an off-curve point) is stored in the
//! dependent accounts and re-verified on every use, so the program can sign
//! for these addresses without any private key existing for them.

use anchor_lang::prelude::*;

use crate::constants::{FAUCET_SEED, MINT_AUTHORITY_SEED, MINT_SEED};
use crate::error::FaucetError;

/// Derive the faucet mint address.
pub fn find_mint_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED], program_id)
}

/// Derive the mint authority address.
pub fn find_mint_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], program_id)
}

/// Derive the claim ledger address.
pub fn find_faucet_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FAUCET_SEED], program_id)
}

/// Re-derive `seed` with a caller-supplied `bump` and require it to land on
/// `expected`.
pub fn verify_bump(seed: &[u8], bump: u8, expected: &Pubkey, program_id: &Pubkey) -> Result<()> {
    let derived = Pubkey::create_program_address(&[seed, &[bump]], program_id)
        .map_err(|_| error!(FaucetError::InvalidBump))?;
    require_keys_eq!(derived, *expected, FaucetError::InvalidBump);
    Ok(())
}

/// All derived addresses of one faucet deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaucetAddresses {
    pub mint: Pubkey,
    pub mint_bump: u8,
    pub mint_authority: Pubkey,
    pub mint_authority_bump: u8,
    pub faucet: Pubkey,
    pub faucet_bump: u8,
}

impl FaucetAddresses {
    pub fn derive(program_id: &Pubkey) -> Self {
        let (mint, mint_bump) = find_mint_address(program_id);
        let (mint_authority, mint_authority_bump) = find_mint_authority_address(program_id);
        let (faucet, faucet_bump) = find_faucet_address(program_id);
        Self {
            mint,
            mint_bump,
            mint_authority,
            mint_authority_bump,
            faucet,
            faucet_bump,
        }
    }
}
