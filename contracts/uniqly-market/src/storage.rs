use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    PaymentTokens,
    NftTokens,
    Offers,
    OfferIndex,
    OffersBySeller,
    OffersBySellerInner { account_id_hash: Vec<u8> },
    SellerOfferIndex,
    BidsByUser,
    BidsByUserInner { account_id_hash: Vec<u8> },
    BidIndex,
    FeeCollected,
}
