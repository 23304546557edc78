use crate::*;

#[near]
impl Contract {
    /// Registers `token` (or `"near"` for native NEAR) as a payment token.
    /// Re-adding an existing token replaces its fee rate.
    #[payable]
    #[handle_result]
    pub fn add_payment_token(&mut self, token: AccountId, fee_rate: u32) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        let owner_id = env::predecessor_account_id();
        self.check_contract_owner(&owner_id)?;
        self.internal_add_payment_token(&owner_id, token, fee_rate)
    }

    #[payable]
    #[handle_result]
    pub fn add_nft_token(&mut self, token: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.nft_tokens.insert(token.clone()) {
            events::emit_nft_token_added(&self.owner_id, &token);
        }
        Ok(())
    }
}

impl Contract {
    pub(crate) fn internal_add_payment_token(
        &mut self,
        owner_id: &AccountId,
        token: AccountId,
        fee_rate: u32,
    ) -> Result<(), MarketplaceError> {
        if fee_rate > MAX_FEE_RATE {
            return Err(MarketplaceError::InvalidInput(format!(
                "Fee rate exceeds maximum ({} of {})",
                MAX_FEE_RATE, FEE_DENOMINATOR
            )));
        }
        let updated = self.payment_tokens.insert(token.clone(), fee_rate).is_some();
        events::emit_payment_token_added(owner_id, &token, fee_rate, updated);
        Ok(())
    }

    pub(crate) fn check_nft_token(&self, nft_token: &AccountId) -> Result<(), MarketplaceError> {
        if !self.nft_tokens.contains(nft_token) {
            return Err(MarketplaceError::wrong_nft_token());
        }
        Ok(())
    }

    pub(crate) fn check_payment_token(&self, payment_token: &AccountId) -> Result<(), MarketplaceError> {
        if !self.payment_tokens.contains_key(payment_token) {
            return Err(MarketplaceError::wrong_payment_token());
        }
        Ok(())
    }

    /// 0 for tokens that are no longer registered.
    pub(crate) fn fee_rate(&self, payment_token: &AccountId) -> u32 {
        self.payment_tokens.get(payment_token).copied().unwrap_or(0)
    }
}
