use crate::guards::is_native;
use crate::*;

#[near]
impl Contract {
    /// Bids on a native-NEAR offer; the attached deposit is the bid.
    #[payable]
    #[handle_result]
    pub fn bid(&mut self, nft_token: AccountId, token_id: TokenId, amount: U128) -> Result<(), MarketplaceError> {
        let offer = self
            .offers
            .get(&offer_key(&nft_token, &token_id))
            .ok_or_else(MarketplaceError::not_on_market)?;
        if !is_native(&offer.payment_token) {
            return Err(MarketplaceError::wrong_payment_token());
        }
        if env::attached_deposit().as_yoctonear() != amount.0 {
            return Err(MarketplaceError::InsufficientDeposit(
                "Attached deposit must equal the bid amount".into(),
            ));
        }
        self.internal_bid(&env::predecessor_account_id(), NATIVE_TOKEN, &nft_token, &token_id, amount.0)
    }
}

impl Contract {
    /// Shared by native and NEP-141 bids. `paid_with` is what actually funded
    /// the bid; refunds of the outbid leader are sent immediately.
    pub(crate) fn internal_bid(
        &mut self,
        bidder: &AccountId,
        paid_with: &str,
        nft_token: &AccountId,
        token_id: &str,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        let key = offer_key(nft_token, token_id);
        let now = env::block_timestamp();
        let prolong = self.config.offer_prolong_ns;

        let offer = self.offers.get_mut(&key).ok_or_else(MarketplaceError::not_on_market)?;
        if offer.payment_token.as_str() != paid_with {
            return Err(MarketplaceError::wrong_payment_token());
        }
        if offer.is_ended(now) {
            return Err(MarketplaceError::too_late());
        }
        if &offer.seller == bidder {
            return Err(MarketplaceError::InvalidInput("Seller cannot bid on own offer".into()));
        }
        let outcome = offer.accept_bid(bidder, amount, now, prolong)?;
        let offer = offer.clone();

        if let Some((previous, refund)) = outcome.outbid {
            if &previous != bidder {
                self.bids.remove(&previous, &key);
            }
            payments::send(&offer.payment_token, &previous, refund);
        }
        self.bids.record(bidder, Bid::leading(&offer));
        events::emit_bid_made(bidder, &offer, outcome.settled);
        Ok(())
    }
}
