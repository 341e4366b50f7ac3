//! Seeds and fixed parameters of the faucet

/// PDA seed of the faucet mint.
pub const MINT_SEED: &[u8] = b"mint";

/// PDA seed of the program-owned mint authority.
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";

/// PDA seed of the claim ledger.
pub const FAUCET_SEED: &[u8] = b"faucet";

/// Decimal precision of the faucet token.
pub const FAUCET_DECIMALS: u8 = 6;

/// Base units minted per successful claim (1.0 token at 6 decimals).
pub const CLAIM_AMOUNT: u64 = 1_000_000;

/// Number of identities the claim ledger is allocated for. The ledger does
/// not grow: claim number `MAX_CLAIMERS + 1` fails with `FaucetFull`.
pub const MAX_CLAIMERS: u32 = 100;
