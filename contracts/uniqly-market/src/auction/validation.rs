use crate::*;

impl Contract {
    /// `end_time` must leave at least one prolong window and stay within
    /// `max_offer_time_ns` of now.
    pub(crate) fn check_end_time(&self, end_time: u64) -> Result<(), MarketplaceError> {
        let now = env::block_timestamp();
        let earliest = now.saturating_add(self.config.offer_prolong_ns);
        let latest = now.saturating_add(self.config.max_offer_time_ns);
        if end_time < earliest || end_time > latest {
            return Err(MarketplaceError::wrong_timestamp());
        }
        Ok(())
    }

    /// Mode rules keyed on `end_time`: 0 is buy-now (no step, no cap),
    /// anything else an auction with a step and an optional cap >= price.
    /// The `end_time` window itself is `check_end_time`'s job.
    pub(crate) fn check_offer_mode(terms: &OfferTerms) -> Result<(), MarketplaceError> {
        if terms.end_time.0 == 0 {
            if terms.min_step.0 != 0 {
                return Err(MarketplaceError::min_step_set());
            }
            if terms.max_price.0 != 0 {
                return Err(MarketplaceError::max_price_set());
            }
            return Ok(());
        }
        if terms.min_step.0 == 0 {
            return Err(MarketplaceError::min_step_not_set());
        }
        if terms.max_price.0 != 0 && terms.max_price.0 < terms.price.0 {
            return Err(MarketplaceError::max_price_set());
        }
        Ok(())
    }

    pub(crate) fn check_listing(&self, nft_token: &AccountId, terms: &OfferTerms) -> Result<(), MarketplaceError> {
        self.check_nft_token(nft_token)?;
        self.check_payment_token(&terms.payment_token)?;
        Self::check_offer_mode(terms)?;
        if terms.end_time.0 != 0 {
            self.check_end_time(terms.end_time.0)?;
        }
        Ok(())
    }
}
