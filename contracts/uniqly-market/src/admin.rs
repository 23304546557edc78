use crate::*;

/// Offer timing bounds, fixed at deployment.
#[near(serializers = [borsh])]
#[derive(Clone, Copy, Debug)]
pub struct MarketConfig {
    /// Latest allowed `end_time`, relative to listing time.
    pub max_offer_time_ns: u64,
    /// Anti-snipe window; also the shortest allowed auction.
    pub offer_prolong_ns: u64,
}

#[near(serializers = [json])]
pub struct MarketConfigView {
    pub max_offer_time_ns: U64,
    pub offer_prolong_ns: U64,
}

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        max_offer_time_ns: U64,
        offer_prolong_ns: U64,
        fee_signer: Option<PublicKey>,
    ) -> Self {
        assert!(
            max_offer_time_ns.0 > offer_prolong_ns.0,
            "max_offer_time_ns must exceed offer_prolong_ns"
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            config: MarketConfig {
                max_offer_time_ns: max_offer_time_ns.0,
                offer_prolong_ns: offer_prolong_ns.0,
            },
            fee_signer,
            payment_tokens: IterableMap::new(StorageKey::PaymentTokens),
            nft_tokens: IterableSet::new(StorageKey::NftTokens),
            offers: OfferStore::new(),
            bids: BidLedger::new(),
            fee_collected: LookupMap::new(StorageKey::FeeCollected),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner);
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    /// Key whose signatures authorize `withdraw_fee`; `None` turns signed
    /// withdrawals off. Rotating the key starts a fresh nonce sequence.
    #[payable]
    #[handle_result]
    pub fn set_fee_signer(&mut self, fee_signer: Option<PublicKey>) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.fee_signer = fee_signer;
        events::emit_fee_signer_changed(&self.owner_id, self.fee_signer.as_ref());
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_fee_signer(&self) -> Option<&PublicKey> {
        self.fee_signer.as_ref()
    }

    pub fn get_config(&self) -> MarketConfigView {
        MarketConfigView {
            max_offer_time_ns: U64(self.config.max_offer_time_ns),
            offer_prolong_ns: U64(self.config.offer_prolong_ns),
        }
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
