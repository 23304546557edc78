//! On-chain checks for signature-authorized fee withdrawals: ed25519
//! verification via NEAR host functions and a per-recipient nonce store.

pub mod nonce;
mod verify;

pub use nonce::NonceStore;
pub use verify::{SignedWithdrawal, verify_withdrawal};
