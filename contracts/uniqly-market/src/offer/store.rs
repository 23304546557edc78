use near_sdk::store::Vector;

use crate::guards::hash_account_id;
use crate::*;

/// Dense, enumerable set of active offers.
///
/// Offers live in one `Vector` with a key -> position index; each seller has
/// its own dense `Vector` of keys. Removal swaps the last element into the
/// hole in both, so positions `0..len` are always occupied.
#[near]
pub struct OfferStore {
    offers: Vector<Offer>,
    index: LookupMap<String, u32>,
    by_seller: LookupMap<AccountId, Vector<String>>,
    seller_index: LookupMap<String, u32>,
}

impl OfferStore {
    pub fn new() -> Self {
        Self {
            offers: Vector::new(StorageKey::Offers),
            index: LookupMap::new(StorageKey::OfferIndex),
            by_seller: LookupMap::new(StorageKey::OffersBySeller),
            seller_index: LookupMap::new(StorageKey::SellerOfferIndex),
        }
    }

    pub fn len(&self) -> u32 {
        self.offers.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Offer> {
        let pos = *self.index.get(key)?;
        self.offers.get(pos)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Offer> {
        let pos = *self.index.get(key)?;
        self.offers.get_mut(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter()
    }

    pub fn insert(&mut self, offer: Offer) -> Result<(), MarketplaceError> {
        let key = offer.key();
        if self.index.contains_key(&key) {
            return Err(MarketplaceError::already_on_market());
        }
        self.link_seller(&offer.seller, &key);
        self.index.insert(key, self.offers.len());
        self.offers.push(offer);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<Offer> {
        let pos = self.index.remove(key)?;
        let offer = self.offers.swap_remove(pos);
        if let Some(moved) = self.offers.get(pos) {
            self.index.insert(moved.key(), pos);
        }
        self.unlink_seller(&offer.seller, key);
        Some(offer)
    }

    /// Moves an offer into `new_seller`'s sequence and rewrites its seller.
    pub fn reassign(&mut self, key: &str, new_seller: &AccountId) {
        let Some(old_seller) = self.get(key).map(|o| o.seller.clone()) else {
            return;
        };
        if &old_seller == new_seller {
            return;
        }
        self.unlink_seller(&old_seller, key);
        self.link_seller(new_seller, key);
        if let Some(offer) = self.get_mut(key) {
            offer.seller = new_seller.clone();
        }
    }

    pub fn count_by_seller(&self, seller: &AccountId) -> u32 {
        self.by_seller.get(seller).map(|keys| keys.len()).unwrap_or(0)
    }

    /// Inclusive `[start, end]`; `end` must be a valid position.
    pub fn range(&self, start: u32, end: u32) -> Result<Vec<&Offer>, MarketplaceError> {
        if end >= self.offers.len() {
            return Err(MarketplaceError::end_over_length());
        }
        Ok((start..=end).filter_map(|i| self.offers.get(i)).collect())
    }

    pub fn range_by_seller(
        &self,
        seller: &AccountId,
        start: u32,
        end: u32,
    ) -> Result<Vec<&Offer>, MarketplaceError> {
        let Some(keys) = self.by_seller.get(seller) else {
            return Err(MarketplaceError::end_over_length());
        };
        if end >= keys.len() {
            return Err(MarketplaceError::end_over_length());
        }
        Ok((start..=end)
            .filter_map(|i| keys.get(i))
            .filter_map(|key| self.get(key))
            .collect())
    }

    fn link_seller(&mut self, seller: &AccountId, key: &str) {
        let mut keys = self.by_seller.remove(seller).unwrap_or_else(|| {
            Vector::new(StorageKey::OffersBySellerInner {
                account_id_hash: hash_account_id(seller),
            })
        });
        self.seller_index.insert(key.to_owned(), keys.len());
        keys.push(key.to_owned());
        self.by_seller.insert(seller.clone(), keys);
    }

    fn unlink_seller(&mut self, seller: &AccountId, key: &str) {
        let Some(pos) = self.seller_index.remove(key) else {
            return;
        };
        let Some(mut keys) = self.by_seller.remove(seller) else {
            return;
        };
        if pos < keys.len() {
            keys.swap_remove(pos);
            if let Some(moved) = keys.get(pos) {
                self.seller_index.insert(moved.clone(), pos);
            }
        }
        if !keys.is_empty() {
            self.by_seller.insert(seller.clone(), keys);
        }
    }
}
