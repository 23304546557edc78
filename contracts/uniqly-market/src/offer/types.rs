use crate::*;

pub type TokenId = String;

pub fn offer_key(nft_token: &AccountId, token_id: &str) -> String {
    format!("{}{}{}", nft_token, DELIMETER, token_id)
}

/// Listing terms supplied by `sell` and `resell`.
///
/// `end_time == 0` lists a buy-now offer (`min_step` and `max_price` must be 0).
/// Otherwise it is an auction (`min_step > 0`) closing at `end_time`
/// (nanoseconds); a non-zero `max_price` adds a buy-now cap.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct OfferTerms {
    pub payment_token: AccountId,
    pub price: U128,
    pub max_price: U128,
    pub min_step: U128,
    pub end_time: U64,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Offer {
    pub nft_token: AccountId,
    pub token_id: TokenId,
    pub payment_token: AccountId,
    pub seller: AccountId,
    pub price: u128,
    pub max_price: u128,
    pub min_step: u128,
    pub end_time: u64,
    pub highest_bidder: Option<AccountId>,
    pub highest_bid: u128,
}

impl Offer {
    pub fn new(seller: AccountId, nft_token: AccountId, token_id: TokenId, terms: OfferTerms) -> Self {
        Self {
            nft_token,
            token_id,
            payment_token: terms.payment_token,
            seller,
            price: terms.price.0,
            max_price: terms.max_price.0,
            min_step: terms.min_step.0,
            end_time: terms.end_time.0,
            highest_bidder: None,
            highest_bid: 0,
        }
    }

    pub fn key(&self) -> String {
        offer_key(&self.nft_token, &self.token_id)
    }

    /// Replaces the terms and drops any bid state.
    pub(crate) fn relist(&mut self, terms: OfferTerms) {
        self.payment_token = terms.payment_token;
        self.price = terms.price.0;
        self.max_price = terms.max_price.0;
        self.min_step = terms.min_step.0;
        self.end_time = terms.end_time.0;
        self.highest_bidder = None;
        self.highest_bid = 0;
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct OfferView {
    pub nft_token: AccountId,
    pub token_id: TokenId,
    pub payment_token: AccountId,
    pub seller: AccountId,
    pub price: U128,
    pub max_price: U128,
    pub min_step: U128,
    pub end_time: U64,
    pub highest_bidder: Option<AccountId>,
    pub highest_bid: U128,
    pub minimum_bid: U128,
    pub is_ended: bool,
}

impl OfferView {
    pub fn new(offer: &Offer, now: u64) -> Self {
        Self {
            nft_token: offer.nft_token.clone(),
            token_id: offer.token_id.clone(),
            payment_token: offer.payment_token.clone(),
            seller: offer.seller.clone(),
            price: U128(offer.price),
            max_price: U128(offer.max_price),
            min_step: U128(offer.min_step),
            end_time: U64(offer.end_time),
            highest_bidder: offer.highest_bidder.clone(),
            highest_bid: U128(offer.highest_bid),
            minimum_bid: U128(offer.minimum_bid()),
            is_ended: offer.is_ended(now),
        }
    }
}
