//! Signing-message construction and key helpers for the Uniqly marketplace.
//! No NEAR SDK dependency, so off-chain signers build the exact bytes the
//! contract verifies.

mod crypto;
mod error;
mod message;

pub use crypto::{raw_ed25519_public_key, raw_ed25519_signature};
pub use error::AuthError;
pub use message::{FeeWithdrawal, WITHDRAW_FEE_DOMAIN};
