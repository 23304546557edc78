use near_sdk::json_types::Base64VecU8;
use uniqly_auth::{NonceStore, SignedWithdrawal};

use crate::*;

pub(crate) const FEE_NONCES: NonceStore = NonceStore::new(FEE_NONCE_PREFIX);

#[near]
impl Contract {
    /// Sends the whole collected fee balance of `payment_token` to the owner.
    #[payable]
    #[handle_result]
    pub fn withdraw_market_fee(&mut self, payment_token: AccountId) -> Result<Promise, MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let amount = self.debit_fee(&payment_token, None)?;
        Ok(self.payout_fee(payment_token, self.owner_id.clone(), amount))
    }

    /// Withdraws `amount` of collected fees to the caller, authorized by the
    /// fee signer's ed25519 signature over (caller, token, amount, nonce).
    /// Each nonce must exceed the last one the caller used with this signer.
    #[payable]
    #[handle_result]
    pub fn withdraw_fee(
        &mut self,
        payment_token: AccountId,
        amount: U128,
        nonce: U64,
        signature: Base64VecU8,
    ) -> Result<Promise, MarketplaceError> {
        crate::guards::check_one_yocto()?;
        let recipient = env::predecessor_account_id();
        let amount = self.internal_withdraw_fee(&recipient, &payment_token, amount.0, nonce.0, &signature.0)?;
        Ok(self.payout_fee(payment_token, recipient, amount))
    }

    #[private]
    pub fn resolve_fee_withdrawal(&mut self, payment_token: AccountId, recipient: AccountId, amount: U128) -> bool {
        let paid = env::promise_results_count() == 1 && env::promise_result_checked(0, 64).is_ok();
        self.finish_fee_withdrawal(&payment_token, &recipient, amount.0, paid)
    }
}

impl Contract {
    /// Debits `amount` (or the full balance) from the vault.
    pub(crate) fn debit_fee(&mut self, payment_token: &AccountId, amount: Option<u128>) -> Result<u128, MarketplaceError> {
        let balance = self.fee_collected.get(payment_token).copied().unwrap_or(0);
        let amount = amount.unwrap_or(balance);
        if balance == 0 || amount == 0 {
            return Err(MarketplaceError::nothing_to_withdraw());
        }
        if amount > balance {
            return Err(MarketplaceError::InvalidState(format!(
                "Insufficient fee balance: {} available",
                balance
            )));
        }
        if amount == balance {
            self.fee_collected.remove(payment_token);
        } else {
            self.fee_collected.insert(payment_token.clone(), balance - amount);
        }
        Ok(amount)
    }

    pub(crate) fn internal_withdraw_fee(
        &mut self,
        recipient: &AccountId,
        payment_token: &AccountId,
        amount: u128,
        nonce: u64,
        signature: &[u8],
    ) -> Result<u128, MarketplaceError> {
        let signer = self
            .fee_signer
            .clone()
            .ok_or_else(|| MarketplaceError::Unauthorized("Fee signer not configured".into()))?;
        uniqly_auth::verify_withdrawal(&SignedWithdrawal {
            recipient,
            payment_token,
            amount,
            nonce,
            signer: &signer,
            signature,
        })?;
        FEE_NONCES.check_fresh(recipient, &signer, nonce)?;
        let amount = self.debit_fee(payment_token, Some(amount))?;
        FEE_NONCES.consume(recipient, &signer, nonce);
        Ok(amount)
    }

    fn payout_fee(&self, payment_token: AccountId, recipient: AccountId, amount: u128) -> Promise {
        payments::transfer(&payment_token, &recipient, amount).then(
            Self::ext(env::current_account_id())
                .with_static_gas(Gas::from_tgas(GAS_RESOLVE_FEE_WITHDRAWAL_TGAS))
                .resolve_fee_withdrawal(payment_token, recipient, U128(amount)),
        )
    }

    /// A failed payout puts the amount back into the vault.
    pub(crate) fn finish_fee_withdrawal(
        &mut self,
        payment_token: &AccountId,
        recipient: &AccountId,
        amount: u128,
        paid: bool,
    ) -> bool {
        if paid {
            events::emit_fee_withdrawn(recipient, payment_token, amount);
        } else {
            self.credit_fee(payment_token, amount);
            events::emit_fee_withdrawal_failed(recipient, payment_token, amount);
        }
        paid
    }
}
