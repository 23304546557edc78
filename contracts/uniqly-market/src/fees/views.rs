use crate::*;

use super::withdraw::FEE_NONCES;

#[near]
impl Contract {
    pub fn get_fee_collected(&self, payment_token: AccountId) -> U128 {
        U128(self.fee_collected.get(&payment_token).copied().unwrap_or(0))
    }

    /// Last nonce `account_id` consumed with the current fee signer.
    pub fn get_fee_withdrawal_nonce(&self, account_id: AccountId) -> U64 {
        let nonce = self
            .fee_signer
            .as_ref()
            .map(|signer| FEE_NONCES.last(&account_id, signer))
            .unwrap_or(0);
        U64(nonce)
    }
}
