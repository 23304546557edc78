use crate::external::{Token, ext_nft};
use crate::guards::{check_at_least_one_yocto, check_token_id};
use crate::*;

#[near]
impl Contract {
    /// Lists an NFT the caller owns. The market must hold an approval on it
    /// (`approval_id`); custody moves to the market and the offer goes live
    /// once that transfer succeeds.
    #[payable]
    #[handle_result]
    pub fn sell(
        &mut self,
        nft_token: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        terms: OfferTerms,
    ) -> Result<Promise, MarketplaceError> {
        check_at_least_one_yocto()?;
        check_token_id(&token_id)?;
        self.check_listing(&nft_token, &terms)?;
        if self.offers.contains(&offer_key(&nft_token, &token_id)) {
            return Err(MarketplaceError::already_on_market());
        }

        let seller = env::predecessor_account_id();
        Ok(ext_nft::ext(nft_token.clone())
            .with_static_gas(Gas::from_tgas(GAS_NFT_TOKEN_TGAS))
            .nft_token(token_id.clone())
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_PROCESS_SELL_TGAS))
                    .process_sell(seller, nft_token, token_id, approval_id, terms),
            ))
    }

    // Security boundary: only the current token owner may list; custody transfer uses the owner's approval.
    #[private]
    pub fn process_sell(
        &mut self,
        seller: AccountId,
        nft_token: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        terms: OfferTerms,
    ) -> PromiseOrValue<bool> {
        if env::promise_results_count() != 1 {
            events::emit_listing_failed(&seller, &nft_token, &token_id, "expected 1 promise result");
            return PromiseOrValue::Value(false);
        }
        let owner = match env::promise_result_checked(0, MAX_TOKEN_VIEW_LEN) {
            Ok(value) => match near_sdk::serde_json::from_slice::<Option<Token>>(&value) {
                Ok(Some(token)) if token.token_id == token_id => token.owner_id,
                Ok(Some(_)) => {
                    events::emit_listing_failed(&seller, &nft_token, &token_id, "token id mismatch");
                    return PromiseOrValue::Value(false);
                }
                Ok(None) => {
                    events::emit_listing_failed(&seller, &nft_token, &token_id, "token not found");
                    return PromiseOrValue::Value(false);
                }
                Err(_) => {
                    events::emit_listing_failed(&seller, &nft_token, &token_id, "could not parse token");
                    return PromiseOrValue::Value(false);
                }
            },
            Err(_) => {
                events::emit_listing_failed(&seller, &nft_token, &token_id, "token lookup failed");
                return PromiseOrValue::Value(false);
            }
        };
        if owner != seller {
            events::emit_listing_failed(&seller, &nft_token, &token_id, "caller is not the token owner");
            return PromiseOrValue::Value(false);
        }

        ext_nft::ext(nft_token.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(GAS_NFT_TRANSFER_TGAS))
            .nft_transfer(env::current_account_id(), token_id.clone(), approval_id, None)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_CUSTODY_TGAS))
                    .resolve_custody(seller, nft_token, token_id, terms),
            )
            .into()
    }

    #[private]
    pub fn resolve_custody(
        &mut self,
        seller: AccountId,
        nft_token: AccountId,
        token_id: TokenId,
        terms: OfferTerms,
    ) -> bool {
        let in_custody = env::promise_results_count() == 1 && env::promise_result_checked(0, 16).is_ok();
        self.finish_custody(seller, nft_token, token_id, terms, in_custody)
    }
}

impl Contract {
    /// Publishes the offer once the market holds the NFT. If the slot was
    /// taken meanwhile the NFT goes back to the seller.
    pub(crate) fn finish_custody(
        &mut self,
        seller: AccountId,
        nft_token: AccountId,
        token_id: TokenId,
        terms: OfferTerms,
        in_custody: bool,
    ) -> bool {
        if !in_custody {
            events::emit_listing_failed(&seller, &nft_token, &token_id, "nft transfer failed");
            return false;
        }
        let offer = Offer::new(seller.clone(), nft_token.clone(), token_id.clone(), terms);
        let listed = offer.clone();
        if self.offers.insert(offer).is_err() {
            let _ = ext_nft::ext(nft_token.clone())
                .with_attached_deposit(ONE_YOCTO)
                .with_static_gas(Gas::from_tgas(GAS_NFT_TRANSFER_TGAS))
                .nft_transfer(seller.clone(), token_id.clone(), None, None);
            events::emit_listing_failed(&seller, &nft_token, &token_id, "token already on market");
            return false;
        }
        events::emit_offer_listed(&listed);
        true
    }
}
