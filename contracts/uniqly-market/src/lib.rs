use near_sdk::json_types::{U64, U128};
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue, PublicKey, env, near};

pub mod constants;
mod errors;
mod guards;
mod storage;

mod events;
mod external;
mod payments;

mod bid;
mod offer;
mod registry;

mod auction;
mod fees;

mod admin;
mod ft_receiver;
mod upgrade;

#[cfg(test)]
mod tests;

pub use admin::{MarketConfig, MarketConfigView};
pub use bid::Bid;
pub use constants::*;
pub use errors::MarketplaceError;
pub use offer::{Offer, OfferTerms, OfferView, TokenId, offer_key};
pub use registry::PaymentTokenView;
pub use storage::StorageKey;

use bid::BidLedger;
use offer::OfferStore;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub config: MarketConfig,
    // Authorizes `withdraw_fee`; None disables signed withdrawals.
    pub fee_signer: Option<PublicKey>,

    /// Payment token -> fee rate in parts per million.
    pub payment_tokens: IterableMap<AccountId, u32>,
    pub nft_tokens: IterableSet<AccountId>,

    pub(crate) offers: OfferStore,
    pub(crate) bids: BidLedger,

    pub(crate) fee_collected: LookupMap<AccountId, u128>,
}
