use near_sdk::store::Vector;

use crate::guards::hash_account_id;
use crate::*;

/// A user's outstanding (leading) bid on one offer.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub nft_token: AccountId,
    pub token_id: TokenId,
    pub payment_token: AccountId,
    pub amount: U128,
}

impl Bid {
    pub fn leading(offer: &Offer) -> Self {
        Self {
            nft_token: offer.nft_token.clone(),
            token_id: offer.token_id.clone(),
            payment_token: offer.payment_token.clone(),
            amount: U128(offer.highest_bid),
        }
    }

    fn offer_key(&self) -> String {
        offer_key(&self.nft_token, &self.token_id)
    }
}

fn ledger_key(bidder: &AccountId, offer_key: &str) -> String {
    format!("{}\0{}", offer_key, bidder)
}

/// Per-user dense sequences of bids, at most one per offer.
#[near]
pub struct BidLedger {
    by_user: LookupMap<AccountId, Vector<Bid>>,
    position: LookupMap<String, u32>,
}

impl BidLedger {
    pub fn new() -> Self {
        Self {
            by_user: LookupMap::new(StorageKey::BidsByUser),
            position: LookupMap::new(StorageKey::BidIndex),
        }
    }

    /// Inserts or overwrites `bidder`'s record for the bid's offer.
    pub fn record(&mut self, bidder: &AccountId, bid: Bid) {
        let key = ledger_key(bidder, &bid.offer_key());
        let mut bids = self.by_user.remove(bidder).unwrap_or_else(|| {
            Vector::new(StorageKey::BidsByUserInner {
                account_id_hash: hash_account_id(bidder),
            })
        });
        match self.position.get(&key).copied() {
            Some(pos) if pos < bids.len() => {
                if let Some(slot) = bids.get_mut(pos) {
                    *slot = bid;
                }
            }
            _ => {
                self.position.insert(key, bids.len());
                bids.push(bid);
            }
        }
        self.by_user.insert(bidder.clone(), bids);
    }

    pub fn remove(&mut self, bidder: &AccountId, offer_key: &str) -> Option<Bid> {
        let pos = self.position.remove(&ledger_key(bidder, offer_key))?;
        let mut bids = self.by_user.remove(bidder)?;
        let removed = (pos < bids.len()).then(|| bids.swap_remove(pos));
        if let Some(moved) = bids.get(pos) {
            self.position.insert(ledger_key(bidder, &moved.offer_key()), pos);
        }
        if !bids.is_empty() {
            self.by_user.insert(bidder.clone(), bids);
        }
        removed
    }

    pub fn get(&self, bidder: &AccountId, offer_key: &str) -> Option<&Bid> {
        let pos = *self.position.get(&ledger_key(bidder, offer_key))?;
        self.by_user.get(bidder)?.get(pos)
    }

    pub fn count(&self, bidder: &AccountId) -> u32 {
        self.by_user.get(bidder).map(|bids| bids.len()).unwrap_or(0)
    }

    pub fn all(&self, bidder: &AccountId) -> Vec<Bid> {
        self.by_user
            .get(bidder)
            .map(|bids| bids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Inclusive `[start, end]`; `end` must be a valid position.
    pub fn range(&self, bidder: &AccountId, start: u32, end: u32) -> Result<Vec<Bid>, MarketplaceError> {
        if end >= self.count(bidder) {
            return Err(MarketplaceError::range_length_error());
        }
        let Some(bids) = self.by_user.get(bidder) else {
            return Err(MarketplaceError::range_length_error());
        };
        Ok((start..=end).filter_map(|i| bids.get(i).cloned()).collect())
    }
}
