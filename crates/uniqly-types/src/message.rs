//! Message layout for signature-authorized fee withdrawals.

use serde_json::{Value, json};

pub const WITHDRAW_FEE_DOMAIN: &str = "uniqly:withdraw_fee:v1";

/// The tuple a fee signer authorizes: who may pull how much of which token.
#[derive(Debug, Clone, Copy)]
pub struct FeeWithdrawal<'a> {
    pub recipient: &'a str,
    pub payment_token: &'a str,
    pub amount: u128,
    pub nonce: u64,
}

impl FeeWithdrawal<'_> {
    /// Field order is fixed (`preserve_order`); integers are strings so JS
    /// signers do not lose precision.
    pub fn payload(&self) -> Value {
        json!({
            "recipient": self.recipient,
            "payment_token": self.payment_token,
            "amount": self.amount.to_string(),
            "nonce": self.nonce.to_string(),
        })
    }

    /// `{WITHDRAW_FEE_DOMAIN}:{market_id}\0{payload_json}`. Signers sign the
    /// sha256 of these bytes.
    pub fn signing_message(&self, market_id: &str) -> Vec<u8> {
        let payload = self.payload().to_string();
        let mut message = format!("{WITHDRAW_FEE_DOMAIN}:{market_id}").into_bytes();
        message.reserve_exact(1 + payload.len());
        message.push(0);
        message.extend_from_slice(payload.as_bytes());
        message
    }
}
