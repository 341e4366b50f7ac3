//! Claim ledger account
//!
//! Records every identity that has received tokens from the faucet.
//!
//! # Anti-Double-Claim Mechanism
//! 1. Claim handler looks the requester up in `has_claimed`
//! 2. If present → reject with `AlreadyClaimed`, nothing is minted
//! 3. If absent → mint and append in the same transaction
//!
//! Every claim writes this account, so the runtime serializes claims on its
//! write lock and a repeated claim always observes the earlier append.

use anchor_lang::prelude::*;

use crate::constants::CLAIM_AMOUNT;
use crate::error::FaucetError;
use crate::state::MintLedger;

/// Faucet ledger.
///
/// PDA Seeds: `[b"faucet"]`
#[account]
pub struct FaucetState {
    /// PDA bump seed of this account
    pub bump: u8,

    /// Faucet mint (PDA `[b"mint"]`)
    pub mint: Pubkey,

    /// Mint authority (PDA `[b"mint-authority"]`)
    pub mint_authority: Pubkey,

    /// PDA bump seed of the mint authority
    pub mint_authority_bump: u8,

    /// Identity that paid for initialization
    pub funder: Pubkey,

    /// Capacity of `has_claimed`
    /// This MUST match what was used in space() calculation
    pub max_claimers: u32,

    /// Base units minted through the faucet
    pub total_distributed: u64,

    /// Identities that have claimed, in claim order
    pub has_claimed: Vec<Pubkey>,
}

impl FaucetState {
    /// Calculate space for a ledger holding up to `max_claimers` identities
    pub fn space(max_claimers: u32) -> usize {
        8                                   // discriminator
        + 1                                 // bump
        + 32                                // mint
        + 32                                // mint_authority
        + 1                                 // mint_authority_bump
        + 32                                // funder
        + 4                                 // max_claimers
        + 8                                 // total_distributed
        + 4                                 // has_claimed vec length prefix
        + (32 * max_claimers as usize)      // has_claimed entries
    }

    /// Initialize an empty ledger.
    ///
    /// A freshly created account is zeroed, so a recorded bump or mint means
    /// the ledger was already set up.
    pub fn initialize(
        &mut self,
        bump: u8,
        mint: Pubkey,
        mint_authority: Pubkey,
        mint_authority_bump: u8,
        funder: Pubkey,
        max_claimers: u32,
    ) -> Result<()> {
        require!(
            self.bump == 0 && self.mint == Pubkey::default(),
            FaucetError::AlreadyInitialized
        );

        self.bump = bump;
        self.mint = mint;
        self.mint_authority = mint_authority;
        self.mint_authority_bump = mint_authority_bump;
        self.funder = funder;
        self.max_claimers = max_claimers;
        self.total_distributed = 0;
        self.has_claimed = Vec::new();
        Ok(())
    }

    /// Check if identity has claimed
    pub fn has_claimed(&self, identity: &Pubkey) -> bool {
        self.has_claimed.contains(identity)
    }

    /// Reject identities that already claimed, and claims past capacity.
    pub fn require_eligible(&self, identity: &Pubkey) -> Result<()> {
        require!(!self.has_claimed(identity), FaucetError::AlreadyClaimed);
        require!(
            (self.has_claimed.len() as u32) < self.max_claimers,
            FaucetError::FaucetFull
        );
        Ok(())
    }

    /// Record a successful claim of `CLAIM_AMOUNT`.
    pub fn record_claim(&mut self, identity: Pubkey) -> Result<()> {
        self.require_eligible(&identity)?;

        self.total_distributed = self
            .total_distributed
            .checked_add(CLAIM_AMOUNT)
            .ok_or(error!(FaucetError::ArithmeticOverflow))?;
        self.has_claimed.push(identity);

        Ok(())
    }

    /// Number of identities that have claimed
    pub fn claimer_count(&self) -> u32 {
        self.has_claimed.len() as u32
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.max_claimers.saturating_sub(self.claimer_count())
    }

    /// Mint configuration on record
    pub fn mint_ledger(&self) -> MintLedger {
        MintLedger::new(self.mint, self.mint_authority, self.mint_authority_bump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_CLAIMERS;
    use crate::tests::{expect_error, fresh_ledger};

    #[test]
    fn test_space_covers_capacity() {
        // bump + 100 keys at minimum
        assert!(FaucetState::space(MAX_CLAIMERS) >= 8 + 1 + 32 * 100);
        assert_eq!(
            FaucetState::space(2) - FaucetState::space(1),
            32,
            "each claimer costs one pubkey"
        );
    }

    #[test]
    fn test_initialize_twice_fails() {
        let mut ledger = fresh_ledger(4);
        expect_error(
            ledger.initialize(
                254,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                253,
                Pubkey::new_unique(),
                4,
            ),
            FaucetError::AlreadyInitialized,
        );
        assert!(ledger.has_claimed.is_empty());
    }

    #[test]
    fn test_record_claim_appends_in_order() {
        let mut ledger = fresh_ledger(4);
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        ledger.record_claim(a).unwrap();
        ledger.record_claim(b).unwrap();

        assert_eq!(ledger.has_claimed, vec![a, b]);
        assert_eq!(ledger.total_distributed, 2 * CLAIM_AMOUNT);
        assert_eq!(ledger.remaining_capacity(), 2);
    }

    #[test]
    fn test_duplicate_claim_leaves_ledger_untouched() {
        let mut ledger = fresh_ledger(4);
        let a = Pubkey::new_unique();
        ledger.record_claim(a).unwrap();

        expect_error(ledger.record_claim(a), FaucetError::AlreadyClaimed);

        assert_eq!(ledger.has_claimed, vec![a]);
        assert_eq!(ledger.total_distributed, CLAIM_AMOUNT);
    }

    #[test]
    fn test_full_ledger_rejects_new_identity() {
        let mut ledger = fresh_ledger(1);
        ledger.record_claim(Pubkey::new_unique()).unwrap();

        expect_error(
            ledger.record_claim(Pubkey::new_unique()),
            FaucetError::FaucetFull,
        );
        assert_eq!(ledger.claimer_count(), 1);
    }

    #[test]
    fn test_already_claimed_wins_over_full() {
        let mut ledger = fresh_ledger(1);
        let a = Pubkey::new_unique();
        ledger.record_claim(a).unwrap();

        expect_error(ledger.require_eligible(&a), FaucetError::AlreadyClaimed);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut ledger = fresh_ledger(4);
        ledger.total_distributed = u64::MAX;

        expect_error(
            ledger.record_claim(Pubkey::new_unique()),
            FaucetError::ArithmeticOverflow,
        );
        assert!(ledger.has_claimed.is_empty());
    }
}
