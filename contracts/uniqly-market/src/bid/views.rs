use crate::*;

#[near]
impl Contract {
    pub fn get_bids_of(&self, account_id: AccountId) -> Vec<Bid> {
        self.bids.all(&account_id)
    }

    pub fn get_bids_count(&self, account_id: AccountId) -> u64 {
        self.bids.count(&account_id) as u64
    }

    #[handle_result]
    pub fn get_bids_by_range(
        &self,
        account_id: AccountId,
        start: u32,
        end: u32,
    ) -> Result<Vec<Bid>, MarketplaceError> {
        self.bids.range(&account_id, start, end)
    }
}
