//! Claim Instruction
//!
//! Mints `CLAIM_AMOUNT` base units to a requester's holding account and
//! records the requester in the claim ledger. Each identity can claim once.
//!
//! # Verification Flow
//! 1. Re-derive the faucet address from its stored bump
//! 2. Re-derive the mint authority from the caller-supplied bump
//! 3. Check mint and mint authority against the ledger's record
//! 4. Check the holding account belongs to the requester for this mint
//! 5. Reject identities already in the ledger
//! 6. Mint, signed by the mint authority PDA
//! 7. Append the requester to the ledger
//!
//! Minting and recording run in the same transaction, so either both land or
//! neither does.
//!
//! The ledger is allocated for `MAX_CLAIMERS` identities at initialization
//! and never grows; once it is full every new identity fails with
//! `FaucetFull`.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{CLAIM_AMOUNT, FAUCET_SEED, MINT_AUTHORITY_SEED};
use crate::error::FaucetError;
use crate::events::TokensClaimed;
use crate::pda;
use crate::state::{mint_ledger::mint_authority_seeds, FaucetState, MintLedger};

/// Accounts for claim instruction.
#[derive(Accounts)]
#[instruction(mint_authority_bump: u8)]
pub struct Claim<'info> {
    /// Claim ledger.
    #[account(mut)]
    pub faucet: Box<Account<'info, FaucetState>>,

    /// Faucet mint.
    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: re-derived from `mint_authority_bump` in the handler
    pub mint_authority: UncheckedAccount<'info>,

    /// Requester's token account for the faucet mint (receives the reward).
    #[account(mut)]
    pub holding_account: Box<Account<'info, TokenAccount>>,

    /// Identity claiming tokens (signs transaction).
    pub requester: Signer<'info>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Handler for claim instruction.
///
/// # Arguments
/// * `mint_authority_bump` - Bump of the `[b"mint-authority"]` PDA
pub fn handler(ctx: Context<Claim>, mint_authority_bump: u8) -> Result<()> {
    let requester = ctx.accounts.requester.key();
    let holding_account = ctx.accounts.holding_account.key();

    // ========== VALIDATION ==========

    let request = ClaimRequest {
        faucet: ctx.accounts.faucet.key(),
        mint: ctx.accounts.mint.key(),
        mint_recorded_authority: ctx.accounts.mint.mint_authority,
        mint_authority: ctx.accounts.mint_authority.key(),
        mint_authority_bump,
        holding_owner: ctx.accounts.holding_account.owner,
        holding_mint: ctx.accounts.holding_account.mint,
        requester,
    };
    validate_claim(&ctx.accounts.faucet, &request, ctx.program_id)?;

    // ========== MINT ==========

    let bump = [mint_authority_bump];
    let authority_seeds = mint_authority_seeds(&bump);
    let signer_seeds = &[&authority_seeds[..]];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.holding_account.to_account_info(),
        authority: ctx.accounts.mint_authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::mint_to(cpi_ctx, CLAIM_AMOUNT)?;

    // ========== STATE UPDATE ==========

    let faucet = &mut ctx.accounts.faucet;
    faucet.record_claim(requester)?;

    emit!(TokensClaimed {
        faucet: faucet.key(),
        requester,
        holding_account,
        amount: CLAIM_AMOUNT,
        total_claimers: faucet.claimer_count(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Claim successful");
    msg!("Requester: {}", requester);
    msg!("Minted {} tokens", MintLedger::ui_amount(CLAIM_AMOUNT));
    msg!(
        "Claimers: {} / {} ({} left)",
        faucet.claimer_count(),
        faucet.max_claimers,
        faucet.remaining_capacity()
    );

    Ok(())
}

/// Keys and bump a claim is validated against, as read from its accounts.
#[derive(Clone, Copy, Debug)]
pub struct ClaimRequest {
    pub faucet: Pubkey,
    pub mint: Pubkey,
    /// Authority recorded inside the mint account
    pub mint_recorded_authority: COption<Pubkey>,
    pub mint_authority: Pubkey,
    pub mint_authority_bump: u8,
    pub holding_owner: Pubkey,
    pub holding_mint: Pubkey,
    pub requester: Pubkey,
}

/// Every check a claim must pass before anything is minted.
///
/// The faucet bump (stored) and the mint authority bump (caller-supplied)
/// are verified independently.
pub fn validate_claim(state: &FaucetState, request: &ClaimRequest, program_id: &Pubkey) -> Result<()> {
    pda::verify_bump(FAUCET_SEED, state.bump, &request.faucet, program_id)?;
    pda::verify_bump(
        MINT_AUTHORITY_SEED,
        request.mint_authority_bump,
        &request.mint_authority,
        program_id,
    )?;

    let ledger = state.mint_ledger();
    ledger.require_mint(&request.mint)?;
    require_keys_eq!(
        request.mint_authority,
        ledger.mint_authority,
        FaucetError::InvalidDerivedAddress
    );
    ledger.require_authority(&request.mint_recorded_authority)?;

    require_holding_account(
        &request.holding_owner,
        &request.holding_mint,
        &request.requester,
        &ledger.mint,
    )?;

    state.require_eligible(&request.requester)
}

/// Holding account must be owned by the requester and hold the faucet mint.
pub fn require_holding_account(
    owner: &Pubkey,
    mint: &Pubkey,
    requester: &Pubkey,
    faucet_mint: &Pubkey,
) -> Result<()> {
    require_keys_eq!(*owner, *requester, FaucetError::InvalidHoldingAccount);
    require_keys_eq!(*mint, *faucet_mint, FaucetError::InvalidHoldingAccount);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::expect_error;

    #[test]
    fn test_holding_account_accepted() {
        let requester = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert!(require_holding_account(&requester, &mint, &requester, &mint).is_ok());
    }

    #[test]
    fn test_holding_account_wrong_owner() {
        let requester = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        expect_error(
            require_holding_account(&Pubkey::new_unique(), &mint, &requester, &mint),
            FaucetError::InvalidHoldingAccount,
        );
    }

    #[test]
    fn test_holding_account_wrong_mint() {
        let requester = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        expect_error(
            require_holding_account(&requester, &Pubkey::new_unique(), &requester, &mint),
            FaucetError::InvalidHoldingAccount,
        );
    }
}
