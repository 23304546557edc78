use crate::*;

#[near(serializers = [json])]
pub struct PaymentTokenView {
    pub token: AccountId,
    /// Parts per million of the gross sale price.
    pub fee_rate: u32,
}

#[near]
impl Contract {
    pub fn get_payment_tokens(&self) -> Vec<PaymentTokenView> {
        self.payment_tokens
            .iter()
            .map(|(token, fee_rate)| PaymentTokenView {
                token: token.clone(),
                fee_rate: *fee_rate,
            })
            .collect()
    }

    pub fn get_payment_token_fee(&self, token: AccountId) -> Option<u32> {
        self.payment_tokens.get(&token).copied()
    }

    pub fn get_nft_tokens(&self) -> Vec<AccountId> {
        self.nft_tokens.iter().cloned().collect()
    }
}
