//! Ed25519 verification of fee-withdrawal authorizations.

use near_sdk::{AccountId, CurveType, PublicKey, env};
use uniqly_types::{AuthError, FeeWithdrawal};

pub struct SignedWithdrawal<'a> {
    pub recipient: &'a AccountId,
    pub payment_token: &'a AccountId,
    pub amount: u128,
    pub nonce: u64,
    pub signer: &'a PublicKey,
    pub signature: &'a [u8],
}

/// Verifies the signature over the withdrawal tuple, bound to
/// `env::current_account_id()` so it cannot be replayed on another market.
pub fn verify_withdrawal(params: &SignedWithdrawal<'_>) -> Result<(), AuthError> {
    if params.signer.curve_type() != CurveType::ED25519 {
        return Err(AuthError::UnsupportedCurve);
    }
    let pk_bytes = uniqly_types::raw_ed25519_public_key(params.signer.as_bytes())?;
    let sig_bytes = uniqly_types::raw_ed25519_signature(params.signature)?;

    let message = FeeWithdrawal {
        recipient: params.recipient.as_str(),
        payment_token: params.payment_token.as_str(),
        amount: params.amount,
        nonce: params.nonce,
    }
    .signing_message(env::current_account_id().as_str());

    let message_hash = env::sha256_array(&message);
    if !env::ed25519_verify(&sig_bytes, message_hash, &pk_bytes) {
        return Err(AuthError::SignatureInvalid);
    }
    Ok(())
}
