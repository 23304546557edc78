use near_sdk::json_types::U128;
use near_sdk::{AccountId, ext_contract, near};

/// Subset of the NEP-171 `Token` view the market reads; unknown fields are ignored.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
}

// The traits only feed `ext_contract`; nothing implements them.
#[allow(dead_code)]
#[ext_contract(ext_nft)]
pub trait ExtNftContract {
    fn nft_token(&self, token_id: String) -> Option<Token>;

    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    );
}

#[allow(dead_code)]
#[ext_contract(ext_ft)]
pub trait ExtFtContract {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}
