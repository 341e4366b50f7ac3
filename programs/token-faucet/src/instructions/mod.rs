//! Instruction handlers for the Token Faucet

pub mod claim;
pub mod initialize;

pub use claim::*;
pub use initialize::*;
