use crate::guards::is_native;
use crate::*;

/// `msg` of `ft_transfer_call` when bidding with a NEP-141 token.
#[near(serializers = [json])]
pub struct BidMessage {
    pub nft_token: AccountId,
    pub token_id: TokenId,
}

#[near]
impl Contract {
    /// NEP-141 receiver: the transferred amount is a bid on the offer named in
    /// `msg`. The whole amount is kept on success; a rejected bid fails the
    /// call so the token contract refunds the sender.
    #[handle_result]
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> Result<PromiseOrValue<U128>, MarketplaceError> {
        let payment_token = env::predecessor_account_id();
        if is_native(&payment_token) {
            return Err(MarketplaceError::wrong_payment_token());
        }
        let target: BidMessage = near_sdk::serde_json::from_str(&msg)
            .map_err(|_| MarketplaceError::InvalidInput("Invalid bid message".into()))?;
        self.internal_bid(&sender_id, payment_token.as_str(), &target.nft_token, &target.token_id, amount.0)?;
        Ok(PromiseOrValue::Value(U128(0)))
    }
}
