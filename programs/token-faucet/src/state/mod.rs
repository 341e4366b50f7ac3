//! State account definitions for the Token Faucet

pub mod faucet_state;
pub mod mint_ledger;

pub use faucet_state::FaucetState;
pub use mint_ledger::MintLedger;
