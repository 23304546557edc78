use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::FEE;

pub fn emit_fee_withdrawn(recipient: &AccountId, payment_token: &AccountId, amount: u128) {
    EventBuilder::new(FEE, "fee_withdrawn", recipient)
        .field("payment_token", payment_token)
        .field("amount", amount)
        .emit();
}

pub fn emit_fee_withdrawal_failed(recipient: &AccountId, payment_token: &AccountId, amount: u128) {
    EventBuilder::new(FEE, "fee_withdrawal_failed", recipient)
        .field("payment_token", payment_token)
        .field("recredited", amount)
        .emit();
}
