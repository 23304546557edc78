use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::OFFER;
use crate::Offer;
use crate::fees::SaleProceeds;

pub fn emit_offer_listed(offer: &Offer) {
    EventBuilder::new(OFFER, "offer_listed", &offer.seller)
        .field("nft_token", &offer.nft_token)
        .field("token_id", &offer.token_id)
        .field("payment_token", &offer.payment_token)
        .field("price", offer.price)
        .field("max_price", offer.max_price)
        .field("min_step", offer.min_step)
        .field("end_time", offer.end_time)
        .emit();
}

pub fn emit_listing_failed(seller: &AccountId, nft_token: &AccountId, token_id: &str, reason: &str) {
    EventBuilder::new(OFFER, "listing_failed", seller)
        .field("nft_token", nft_token)
        .field("token_id", token_id)
        .field("reason", reason)
        .emit();
}

pub fn emit_offer_relisted(offer: &Offer, previous_seller: &AccountId, sale: Option<&SaleProceeds>) {
    EventBuilder::new(OFFER, "offer_relisted", &offer.seller)
        .field("nft_token", &offer.nft_token)
        .field("token_id", &offer.token_id)
        .field("previous_seller", previous_seller)
        .field("payment_token", &offer.payment_token)
        .field("price", offer.price)
        .field("max_price", offer.max_price)
        .field("min_step", offer.min_step)
        .field("end_time", offer.end_time)
        .field_opt("settled_price", sale.map(|s| s.gross))
        .field_opt("market_fee", sale.map(|s| s.fee))
        .emit();
}

pub fn emit_bid_made(bidder: &AccountId, offer: &Offer, settled: bool) {
    EventBuilder::new(OFFER, "bid_made", bidder)
        .field("nft_token", &offer.nft_token)
        .field("token_id", &offer.token_id)
        .field("payment_token", &offer.payment_token)
        .field("amount", offer.highest_bid)
        .field("end_time", offer.end_time)
        .field("settled", settled)
        .emit();
}

pub fn emit_offer_claimed(receiver: &AccountId, offer: &Offer, sale: Option<&SaleProceeds>) {
    EventBuilder::new(OFFER, "offer_claimed", receiver)
        .field("nft_token", &offer.nft_token)
        .field("token_id", &offer.token_id)
        .field("seller", &offer.seller)
        .field("receiver", receiver)
        .field_opt("price", sale.map(|s| s.gross))
        .field_opt("market_fee", sale.map(|s| s.fee))
        .field_opt("seller_proceeds", sale.map(|s| s.proceeds))
        .emit();
}

pub fn emit_claim_failed(receiver: &AccountId, offer: &Offer) {
    EventBuilder::new(OFFER, "claim_failed", receiver)
        .field("nft_token", &offer.nft_token)
        .field("token_id", &offer.token_id)
        .field("receiver", receiver)
        .emit();
}
