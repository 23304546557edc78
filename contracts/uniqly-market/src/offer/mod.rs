mod store;
mod types;
mod views;

pub(crate) use store::OfferStore;
pub use types::{Offer, OfferTerms, OfferView, TokenId, offer_key};
