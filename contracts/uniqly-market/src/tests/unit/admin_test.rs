use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn new_stores_config_and_owner() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    let config = contract.get_config();
    assert_eq!(config.max_offer_time_ns.0, MAX_OFFER_TIME);
    assert_eq!(config.offer_prolong_ns.0, PROLONG);
    assert!(contract.get_fee_signer().is_none());
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(contract.get_offers_count(), 0);
}

#[test]
#[should_panic(expected = "max_offer_time_ns must exceed offer_prolong_ns")]
fn new_rejects_prolong_longer_than_max_offer_time() {
    testing_env!(context(owner()).build());
    Contract::new(owner(), U64(PROLONG), U64(MAX_OFFER_TIME), None);
}

// --- transfer_ownership ---

#[test]
fn transfer_ownership_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(stranger()).unwrap();
    assert_eq!(contract.get_owner(), &stranger());
    assert_eq!(event_operations(), vec!["owner_transferred"]);
}

#[test]
fn transfer_ownership_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());
    let err = contract.transfer_ownership(seller()).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

#[test]
fn transfer_ownership_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let err = contract.transfer_ownership(stranger()).unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
}

#[test]
fn transfer_ownership_to_self_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

#[test]
fn new_owner_controls_registry() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(stranger()).unwrap();

    testing_env!(context_with_deposit(owner(), 1).build());
    assert!(contract.add_nft_token("other-nft.near".parse().unwrap()).is_err());

    testing_env!(context_with_deposit(stranger(), 1).build());
    assert!(contract.add_nft_token("other-nft.near".parse().unwrap()).is_ok());
}

// --- set_fee_signer ---

#[test]
fn set_fee_signer_round_trip() {
    let mut contract = new_contract();
    let (_, key) = fee_signer_keypair(7);

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_fee_signer(Some(key.clone())).unwrap();
    assert_eq!(contract.get_fee_signer(), Some(&key));
    assert_eq!(event_operations(), vec!["fee_signer_changed"]);

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_fee_signer(None).unwrap();
    assert!(contract.get_fee_signer().is_none());
}

#[test]
fn set_fee_signer_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(bidder(), 1).build());
    let err = contract.set_fee_signer(None).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

// --- update_contract ---

#[test]
fn update_contract_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());
    let err = expect_err(contract.update_contract());
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

#[test]
fn update_contract_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let err = expect_err(contract.update_contract());
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
}
