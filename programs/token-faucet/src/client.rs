//! Off-chain helpers
//!
//! Instruction builders and account decoders for deployment scripts and
//! clients. Nothing here talks to a cluster; callers bring their own RPC
//! connection and signer.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, sysvar};
use anchor_lang::{system_program, InstructionData};
use anchor_spl::associated_token::{get_associated_token_address, spl_associated_token_account};
use anchor_spl::token::{self, TokenAccount};

use crate::pda::FaucetAddresses;
use crate::state::FaucetState;

/// Build the one-time `initialize` instruction paid for by `funder`.
pub fn initialize_instruction(program_id: &Pubkey, funder: &Pubkey) -> Instruction {
    let addrs = FaucetAddresses::derive(program_id);

    let accounts = crate::accounts::Initialize {
        mint: addrs.mint,
        mint_authority: addrs.mint_authority,
        faucet: addrs.faucet,
        funder: *funder,
        system_program: system_program::ID,
        token_program: token::ID,
        rent: sysvar::rent::ID,
    };

    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(None),
        data: crate::instruction::Initialize {
            faucet_bump: addrs.faucet_bump,
        }
        .data(),
    }
}

/// Build a `claim` instruction crediting the requester's associated token
/// account.
pub fn claim_instruction(program_id: &Pubkey, requester: &Pubkey) -> Instruction {
    let addrs = FaucetAddresses::derive(program_id);

    let accounts = crate::accounts::Claim {
        faucet: addrs.faucet,
        mint: addrs.mint,
        mint_authority: addrs.mint_authority,
        holding_account: get_associated_token_address(requester, &addrs.mint),
        requester: *requester,
        token_program: token::ID,
    };

    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(None),
        data: crate::instruction::Claim {
            mint_authority_bump: addrs.mint_authority_bump,
        }
        .data(),
    }
}

/// Create the requester's holding account; must land before `claim`.
pub fn create_holding_account_instruction(
    program_id: &Pubkey,
    payer: &Pubkey,
    owner: &Pubkey,
) -> Instruction {
    let addrs = FaucetAddresses::derive(program_id);
    spl_associated_token_account::instruction::create_associated_token_account(
        payer,
        owner,
        &addrs.mint,
        &token::ID,
    )
}

/// Holding account address of `owner` for this faucet's mint.
pub fn holding_address(program_id: &Pubkey, owner: &Pubkey) -> Pubkey {
    let addrs = FaucetAddresses::derive(program_id);
    get_associated_token_address(owner, &addrs.mint)
}

/// Decode the claim ledger from raw account data.
pub fn decode_faucet_state(data: &[u8]) -> Result<FaucetState> {
    FaucetState::try_deserialize(&mut &data[..])
}

/// Decode the base-unit balance of a holding account.
pub fn decode_holding_balance(data: &[u8]) -> Result<u64> {
    let account = TokenAccount::try_deserialize(&mut &data[..])?;
    Ok(account.amount)
}
