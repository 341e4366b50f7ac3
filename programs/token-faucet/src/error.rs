//! Error types for the Token Faucet
//!
//! Error codes are stable across versions for client compatibility.

use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    // ========== Lifecycle Errors ==========

    /// Mint or faucet ledger already exists
    #[msg("Faucet has already been initialized")]
    AlreadyInitialized, // 6000

    /// Requester is already recorded in the claim ledger
    #[msg("This wallet has already claimed tokens from the faucet.")]
    AlreadyClaimed, // 6001

    // ========== Derivation Errors ==========

    /// Supplied bump does not re-derive the expected address
    #[msg("Invalid bump: seeds do not derive the supplied address")]
    InvalidBump, // 6002

    /// Supplied account is not the program-derived account on record
    #[msg("Account is not the expected program-derived address")]
    InvalidDerivedAddress, // 6003

    // ========== Token Account Errors ==========

    /// Holding account not owned by requester or not for the faucet mint
    #[msg("Holding account must belong to the requester and hold the faucet mint")]
    InvalidHoldingAccount, // 6004

    // ========== Capacity Errors ==========

    /// Claim ledger has no room for another identity
    #[msg("Faucet claim ledger is full")]
    FaucetFull, // 6005

    /// Arithmetic overflow occurred
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6006
}
