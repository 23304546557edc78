use crate::external::ext_nft;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Closes an offer and delivers the NFT: to the winner once the offer has
    /// ended (callable by winner or seller), or back to the seller when nobody
    /// bid. Proceeds and the market fee settle after delivery.
    #[payable]
    #[handle_result]
    pub fn claim(&mut self, nft_token: AccountId, token_id: TokenId) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        let (offer, receiver) = self.internal_claim(&env::predecessor_account_id(), &nft_token, &token_id)?;
        Ok(ext_nft::ext(offer.nft_token.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(GAS_NFT_TRANSFER_TGAS))
            .nft_transfer(receiver.clone(), offer.token_id.clone(), None, None)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_CLAIM_TGAS))
                    .resolve_claim(offer, receiver),
            ))
    }

    #[private]
    pub fn resolve_claim(&mut self, offer: Offer, receiver: AccountId) -> bool {
        let delivered = env::promise_results_count() == 1 && env::promise_result_checked(0, 16).is_ok();
        self.finish_claim(offer, receiver, delivered)
    }
}

impl Contract {
    /// Validates the claim and takes the offer (and the winner's bid record)
    /// out of the market before the NFT is sent.
    pub(crate) fn internal_claim(
        &mut self,
        caller: &AccountId,
        nft_token: &AccountId,
        token_id: &str,
    ) -> Result<(Offer, AccountId), MarketplaceError> {
        let key = offer_key(nft_token, token_id);
        let offer = self.offers.get(&key).ok_or_else(MarketplaceError::not_on_market)?;

        let receiver = match &offer.highest_bidder {
            Some(winner) => {
                if caller != winner && caller != &offer.seller {
                    return Err(MarketplaceError::not_yours());
                }
                if !offer.is_ended(env::block_timestamp()) {
                    return Err(MarketplaceError::too_early());
                }
                winner.clone()
            }
            None => {
                if caller != &offer.seller {
                    return Err(MarketplaceError::not_yours());
                }
                offer.seller.clone()
            }
        };

        let offer = self
            .offers
            .remove(&key)
            .ok_or_else(MarketplaceError::not_on_market)?;
        if let Some(winner) = &offer.highest_bidder {
            self.bids.remove(winner, &key);
        }
        Ok((offer, receiver))
    }

    /// Settles a delivered claim, or puts the offer back when the NFT
    /// transfer failed.
    pub(crate) fn finish_claim(&mut self, offer: Offer, receiver: AccountId, delivered: bool) -> bool {
        if !delivered {
            events::emit_claim_failed(&receiver, &offer);
            if let Some(winner) = &offer.highest_bidder {
                self.bids.record(winner, Bid::leading(&offer));
            }
            if self.offers.insert(offer).is_err() {
                env::log_str("Claim rollback: offer slot already taken");
            }
            return false;
        }

        let sale = offer.highest_bidder.is_some().then(|| self.settle_sale(&offer));
        events::emit_offer_claimed(&receiver, &offer, sale.as_ref());
        true
    }
}
