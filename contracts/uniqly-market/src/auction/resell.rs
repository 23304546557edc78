use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Relists an NFT already held by the market. The seller may relist an
    /// offer nobody bid on once it is no longer running; a winner may relist
    /// what they won, which settles their purchase first.
    #[payable]
    #[handle_result]
    pub fn resell(&mut self, nft_token: AccountId, token_id: TokenId, terms: OfferTerms) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.internal_resell(&env::predecessor_account_id(), &nft_token, &token_id, terms)
    }
}

impl Contract {
    pub(crate) fn internal_resell(
        &mut self,
        caller: &AccountId,
        nft_token: &AccountId,
        token_id: &str,
        terms: OfferTerms,
    ) -> Result<(), MarketplaceError> {
        let key = offer_key(nft_token, token_id);
        let offer = self
            .offers
            .get(&key)
            .cloned()
            .ok_or_else(MarketplaceError::not_on_market)?;

        if offer.end_time != 0 && !offer.is_ended(env::block_timestamp()) {
            return Err(MarketplaceError::too_early());
        }
        self.check_payment_token(&terms.payment_token)?;
        if terms.end_time.0 != 0 {
            self.check_end_time(terms.end_time.0)?;
        }
        if terms.max_price.0 != 0 && terms.max_price.0 < terms.price.0 {
            return Err(MarketplaceError::max_price_below_price());
        }
        let entitled = offer.highest_bidder.as_ref().unwrap_or(&offer.seller);
        if caller != entitled {
            return Err(MarketplaceError::not_yours());
        }
        Self::check_offer_mode(&terms)?;

        let sale = match &offer.highest_bidder {
            Some(winner) => {
                self.bids.remove(winner, &key);
                let sale = self.settle_sale(&offer);
                self.offers.reassign(&key, winner);
                Some(sale)
            }
            None => None,
        };

        let relisted = self
            .offers
            .get_mut(&key)
            .ok_or_else(|| MarketplaceError::InternalError("Offer vanished during resell".into()))?;
        relisted.relist(terms);
        let relisted = relisted.clone();
        events::emit_offer_relisted(&relisted, &offer.seller, sale.as_ref());
        Ok(())
    }
}
