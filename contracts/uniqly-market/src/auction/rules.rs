use crate::*;

/// Result of an accepted bid.
#[derive(Debug, PartialEq)]
pub(crate) struct BidOutcome {
    /// Previous leader and the amount owed back to them.
    pub outbid: Option<(AccountId, u128)>,
    /// The bid hit the buy-now price and closed the offer.
    pub settled: bool,
}

impl Offer {
    pub fn is_buy_now(&self) -> bool {
        self.min_step == 0
    }

    /// `end_time == 0` never expires on its own.
    pub fn is_ended(&self, now: u64) -> bool {
        self.end_time != 0 && now >= self.end_time
    }

    pub fn minimum_bid(&self) -> u128 {
        if self.is_buy_now() {
            return self.price;
        }
        let floor = if self.highest_bidder.is_some() {
            self.highest_bid
        } else {
            self.price
        };
        floor.saturating_add(self.min_step)
    }

    /// Applies `amount` from `bidder` to a running offer.
    ///
    /// Buy-now offers and hybrid offers reaching `max_price` only take the
    /// exact price and close at `now`. Auction bids must clear
    /// `minimum_bid()`; a bid landing inside the last `prolong` nanoseconds
    /// pushes `end_time` out by `prolong`. Leaves the offer untouched on error.
    pub(crate) fn accept_bid(
        &mut self,
        bidder: &AccountId,
        amount: u128,
        now: u64,
        prolong: u64,
    ) -> Result<BidOutcome, MarketplaceError> {
        let settled = if self.is_buy_now() {
            if amount != self.price {
                return Err(MarketplaceError::need_exact_value());
            }
            true
        } else if self.max_price != 0 && amount >= self.max_price {
            if amount != self.max_price {
                return Err(MarketplaceError::need_exact_value());
            }
            true
        } else {
            if amount < self.minimum_bid() {
                return Err(MarketplaceError::bid_too_low());
            }
            false
        };

        let previous_bid = self.highest_bid;
        let outbid = self
            .highest_bidder
            .replace(bidder.clone())
            .map(|prev| (prev, previous_bid));
        self.highest_bid = amount;

        if settled {
            self.end_time = now;
        } else if self.end_time.saturating_sub(now) < prolong {
            self.end_time = self.end_time.saturating_add(prolong);
        }

        Ok(BidOutcome { outbid, settled })
    }
}
