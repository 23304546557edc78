use crate::*;

#[near]
impl Contract {
    pub fn get_offer_by_token(&self, nft_token: AccountId, token_id: TokenId) -> Option<OfferView> {
        let now = env::block_timestamp();
        self.offers
            .get(&offer_key(&nft_token, &token_id))
            .map(|offer| OfferView::new(offer, now))
    }

    /// Smallest amount `bid` accepts right now: the exact price for buy-now
    /// offers, otherwise the current floor plus `min_step`.
    #[handle_result]
    pub fn get_minimum_bid(&self, nft_token: AccountId, token_id: TokenId) -> Result<U128, MarketplaceError> {
        self.offers
            .get(&offer_key(&nft_token, &token_id))
            .map(|offer| U128(offer.minimum_bid()))
            .ok_or_else(MarketplaceError::not_on_market)
    }

    pub fn get_all_offers(&self) -> Vec<OfferView> {
        let now = env::block_timestamp();
        self.offers.iter().map(|offer| OfferView::new(offer, now)).collect()
    }

    pub fn get_offers_count(&self) -> u64 {
        self.offers.len() as u64
    }

    pub fn get_offers_count_by_user(&self, account_id: AccountId) -> u64 {
        self.offers.count_by_seller(&account_id) as u64
    }

    #[handle_result]
    pub fn get_offers_by_range(&self, start: u32, end: u32) -> Result<Vec<OfferView>, MarketplaceError> {
        let now = env::block_timestamp();
        Ok(self
            .offers
            .range(start, end)?
            .into_iter()
            .map(|offer| OfferView::new(offer, now))
            .collect())
    }

    #[handle_result]
    pub fn get_offers_of_by_range(
        &self,
        account_id: AccountId,
        start: u32,
        end: u32,
    ) -> Result<Vec<OfferView>, MarketplaceError> {
        let now = env::block_timestamp();
        Ok(self
            .offers
            .range_by_seller(&account_id, start, end)?
            .into_iter()
            .map(|offer| OfferView::new(offer, now))
            .collect())
    }
}
