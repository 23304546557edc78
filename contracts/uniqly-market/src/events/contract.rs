use near_sdk::{AccountId, PublicKey};

use super::builder::EventBuilder;
use super::CONTRACT;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_fee_signer_changed(owner_id: &AccountId, fee_signer: Option<&PublicKey>) {
    let signer = fee_signer.map(String::from);
    EventBuilder::new(CONTRACT, "fee_signer_changed", owner_id)
        .field_opt("fee_signer", signer.as_ref())
        .emit();
}

pub fn emit_payment_token_added(owner_id: &AccountId, token: &AccountId, fee_rate: u32, updated: bool) {
    EventBuilder::new(CONTRACT, "payment_token_added", owner_id)
        .field("token", token)
        .field("fee_rate", fee_rate)
        .field("updated", updated)
        .emit();
}

pub fn emit_nft_token_added(owner_id: &AccountId, token: &AccountId) {
    EventBuilder::new(CONTRACT, "nft_token_added", owner_id)
        .field("token", token)
        .emit();
}
