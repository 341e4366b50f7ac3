//! Initialize Instruction
//!
//! Creates the faucet mint and the claim ledger at their derived addresses.
//! Callable once per deployment by any funding identity; a repeated call is
//! rejected by the system program because both accounts already exist.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{FAUCET_SEED, MAX_CLAIMERS, MINT_AUTHORITY_SEED, MINT_SEED};
use crate::error::FaucetError;
use crate::events::FaucetInitialized;
use crate::state::{FaucetState, MintLedger};

#[derive(Accounts)]
#[instruction(faucet_bump: u8)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = funder,
        seeds = [MINT_SEED],
        bump,
        mint::decimals = MintLedger::DECIMALS,
        mint::authority = mint_authority,
    )]
    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: PDA used only as mint authority, holds no data
    #[account(seeds = [MINT_AUTHORITY_SEED], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = funder,
        space = FaucetState::space(MAX_CLAIMERS),
        seeds = [FAUCET_SEED],
        bump
    )]
    pub faucet: Box<Account<'info, FaucetState>>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<Initialize>, faucet_bump: u8) -> Result<()> {
    require!(faucet_bump == ctx.bumps.faucet, FaucetError::InvalidBump);

    let mint = ctx.accounts.mint.key();
    let mint_authority = ctx.accounts.mint_authority.key();
    let funder = ctx.accounts.funder.key();
    let faucet = &mut ctx.accounts.faucet;

    faucet.initialize(
        faucet_bump,
        mint,
        mint_authority,
        ctx.bumps.mint_authority,
        funder,
        MAX_CLAIMERS,
    )?;

    emit!(FaucetInitialized {
        faucet: faucet.key(),
        mint,
        mint_authority,
        funder,
        max_claimers: MAX_CLAIMERS,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Faucet initialized");
    msg!("Mint: {}", mint);
    msg!("Mint authority: {}", mint_authority);
    msg!("Faucet: {} (bump {})", faucet.key(), faucet_bump);

    Ok(())
}
