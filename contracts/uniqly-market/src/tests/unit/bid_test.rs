use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- auction bids ---

#[test]
fn auction_bids_must_clear_min_step() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 1_000, 1, NOW + WEEK));

    assert_err(bid_near(&mut contract, bidder(), "0", 500), "Bid too low");
    bid_near(&mut contract, bidder(), "0", 501).unwrap();
    assert_err(bid_near(&mut contract, rival(), "0", 501), "Bid too low");
    bid_near(&mut contract, rival(), "0", 502).unwrap();

    let offer = offer(&contract, "0");
    assert_eq!(offer.highest_bidder, Some(rival()));
    assert_eq!(offer.highest_bid, 502);
}

#[test]
fn outbid_leader_loses_ledger_entry() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 1_000, 1, NOW + WEEK));

    bid_near(&mut contract, bidder(), "0", 600).unwrap();
    assert_eq!(contract.get_bids_count(bidder()), 1);
    assert!(native_payouts().is_empty());

    bid_near(&mut contract, rival(), "0", 700).unwrap();
    assert_eq!(event_operations(), vec!["bid_made"]);
    assert_eq!(native_payouts(), vec![(bidder(), 600)]);
    assert_eq!(contract.get_bids_count(bidder()), 0);
    let bids = contract.get_bids_of(rival());
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].amount.0, 700);
    assert_eq!(bids[0].token_id, "0");
    assert_eq!(bids[0].payment_token, native());
}

#[test]
fn outbid_ft_leader_refunded_with_ft_transfer() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "1", auction(ft(), 500, 0, 1, NOW + WEEK));

    bid_ft(&mut contract, bidder(), "1", 600).unwrap();
    bid_ft(&mut contract, rival(), "1", 700).unwrap();

    assert_eq!(ft_payouts(), vec![(ft(), bidder(), 600)]);
    assert!(native_payouts().is_empty());
}

#[test]
fn leader_raising_own_bid_gets_previous_bid_back() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 0, 1, NOW + WEEK));

    bid_near(&mut contract, bidder(), "0", 700).unwrap();
    bid_near(&mut contract, bidder(), "0", 1_000).unwrap();

    assert_eq!(native_payouts(), vec![(bidder(), 700)]);
    assert_eq!(contract.get_bids_of(bidder())[0].amount.0, 1_000);
}

#[test]
fn leader_raising_own_bid_keeps_one_record() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(ft(), 500, 0, 5, NOW + WEEK));

    bid_ft(&mut contract, bidder(), "0", 600).unwrap();
    bid_ft(&mut contract, bidder(), "0", 605).unwrap();

    let bids = contract.get_bids_of(bidder());
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].amount.0, 605);
}

#[test]
fn bid_at_max_price_settles_and_closes() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 1_000, 1, NOW + WEEK));

    bid_near(&mut contract, bidder(), "0", 600).unwrap();
    bid_near(&mut contract, rival(), "0", 700).unwrap();
    bid_near(&mut contract, bidder(), "0", 1_000).unwrap();

    let offer = offer(&contract, "0");
    assert_eq!(offer.highest_bidder, Some(bidder()));
    assert_eq!(offer.highest_bid, 1_000);
    assert_eq!(offer.end_time, NOW);
    assert!(contract.get_offer_by_token(nft(), "0".into()).unwrap().is_ended);

    assert_err(bid_near(&mut contract, rival(), "0", 1_100), "Too late");
}

#[test]
fn bid_after_end_time_is_too_late() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 0, 1, NOW + WEEK));

    at(bidder(), NOW + WEEK, 600);
    assert_err(contract.bid(nft(), "0".into(), U128(600)), "Too late");
}

// --- hybrid offers ---

#[test]
fn hybrid_offer_only_takes_exact_cap() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "2", auction(ft(), 300, 30_000, 10, NOW + WEEK));

    assert_err(bid_ft(&mut contract, bidder(), "2", 200), "Bid too low");
    bid_ft(&mut contract, bidder(), "2", 1_000).unwrap();
    assert_err(bid_ft(&mut contract, rival(), "2", 30_001), "Need exact value");
    bid_ft(&mut contract, rival(), "2", 30_000).unwrap();

    let view = contract.get_offer_by_token(nft(), "2".into()).unwrap();
    assert_eq!(view.highest_bid.0, 30_000);
    assert_eq!(view.highest_bidder, Some(rival()));
    assert!(view.is_ended);
    assert_eq!(contract.get_minimum_bid(nft(), "2".into()).unwrap().0, 30_010);
}

// --- buy-now offers ---

#[test]
fn buy_now_requires_exact_price() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "3", buy_now(native(), 5_000));
    assert_eq!(contract.get_minimum_bid(nft(), "3".into()).unwrap().0, 5_000);

    assert_err(bid_near(&mut contract, bidder(), "3", 4_000), "Need exact value");
    assert_err(bid_near(&mut contract, bidder(), "3", 6_000), "Need exact value");
    bid_near(&mut contract, bidder(), "3", 5_000).unwrap();

    let offer = offer(&contract, "3");
    assert_eq!(offer.highest_bidder, Some(bidder()));
    assert_eq!(offer.end_time, NOW);

    assert_err(bid_near(&mut contract, rival(), "3", 5_000), "Too late");
}

#[test]
fn unsold_buy_now_never_expires() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "3", buy_now(ft(), 5_000));

    testing_env!(context(ft()).block_timestamp(NOW + 52 * WEEK).build());
    let msg = near_sdk::serde_json::json!({ "nft_token": nft(), "token_id": "3" }).to_string();
    assert!(contract.ft_on_transfer(bidder(), U128(5_000), msg).is_ok());
}

// --- anti-snipe ---

#[test]
fn late_bid_extends_end_time() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 0, 1, NOW + WEEK));

    let late = NOW + WEEK - 100 * SECOND;
    at(bidder(), late, 600);
    contract.bid(nft(), "0".into(), U128(600)).unwrap();
    assert_eq!(offer(&contract, "0").end_time, NOW + WEEK + PROLONG);

    // Still open past the first deadline.
    at(rival(), NOW + WEEK + 10 * SECOND, 700);
    contract.bid(nft(), "0".into(), U128(700)).unwrap();
    assert_eq!(offer(&contract, "0").end_time, NOW + WEEK + 2 * PROLONG);
}

#[test]
fn early_bid_keeps_end_time() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 0, 1, NOW + WEEK));
    bid_near(&mut contract, bidder(), "0", 600).unwrap();
    assert_eq!(offer(&contract, "0").end_time, NOW + WEEK);
}

// --- rejections ---

#[test]
fn bid_on_unlisted_token_fails() {
    let mut contract = new_contract();
    assert_err(bid_near(&mut contract, bidder(), "9", 600), "Token not on market");
    assert_err(bid_ft(&mut contract, bidder(), "9", 600), "Token not on market");
}

#[test]
fn seller_cannot_bid() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 0, 1, NOW + WEEK));
    let err = bid_near(&mut contract, seller(), "0", 600).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

#[test]
fn bid_must_use_offer_payment_token() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 0, 1, NOW + WEEK));
    list(&mut contract, seller(), "1", auction(ft(), 500, 0, 1, NOW + WEEK));

    assert_err(bid_ft(&mut contract, bidder(), "0", 600), "Wrong payment token");
    assert_err(bid_near(&mut contract, bidder(), "1", 600), "Wrong payment token");

    let other_ft: AccountId = "dai.near".parse().unwrap();
    testing_env!(context(other_ft).build());
    let msg = near_sdk::serde_json::json!({ "nft_token": nft(), "token_id": "1" }).to_string();
    assert_err(contract.ft_on_transfer(bidder(), U128(600), msg), "Wrong payment token");
}

#[test]
fn native_bid_deposit_must_match_amount() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 0, 1, NOW + WEEK));

    testing_env!(context_with_deposit(bidder(), 599).build());
    let err = contract.bid(nft(), "0".into(), U128(600)).unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
    assert!(offer(&contract, "0").highest_bidder.is_none());
}

#[test]
fn ft_on_transfer_rejects_malformed_msg() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "1", auction(ft(), 500, 0, 1, NOW + WEEK));
    testing_env!(context(ft()).build());
    let err = contract
        .ft_on_transfer(bidder(), U128(600), "not json".into())
        .err().unwrap();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

#[test]
fn ft_on_transfer_rejects_native_sentinel_caller() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "0", auction(native(), 500, 0, 1, NOW + WEEK));
    testing_env!(context(native()).build());
    let msg = near_sdk::serde_json::json!({ "nft_token": nft(), "token_id": "0" }).to_string();
    assert_err(contract.ft_on_transfer(bidder(), U128(600), msg), "Wrong payment token");
}

#[test]
fn ft_bid_consumes_full_amount() {
    let mut contract = new_contract();
    list(&mut contract, seller(), "1", auction(ft(), 500, 0, 1, NOW + WEEK));
    testing_env!(context(ft()).build());
    let msg = near_sdk::serde_json::json!({ "nft_token": nft(), "token_id": "1" }).to_string();
    let result = contract.ft_on_transfer(bidder(), U128(600), msg).unwrap();
    assert!(matches!(result, PromiseOrValue::Value(U128(0))));
}

// --- Offer::accept_bid ---

fn bare_offer(price: u128, max_price: u128, min_step: u128, end_time: u64) -> Offer {
    Offer::new(
        seller(),
        nft(),
        "0".into(),
        auction(ft(), price, max_price, min_step, end_time),
    )
}

#[test]
fn accept_bid_reports_outbid_leader() {
    let mut offer = bare_offer(100, 0, 10, NOW + WEEK);
    let first = offer.accept_bid(&bidder(), 110, NOW, PROLONG).unwrap();
    assert_eq!(first.outbid, None);
    assert!(!first.settled);

    let second = offer.accept_bid(&rival(), 120, NOW, PROLONG).unwrap();
    assert_eq!(second.outbid, Some((bidder(), 110)));
    assert_eq!(offer.minimum_bid(), 130);
}

#[test]
fn rejected_bid_leaves_offer_untouched() {
    let mut offer = bare_offer(100, 0, 10, NOW + WEEK);
    offer.accept_bid(&bidder(), 110, NOW, PROLONG).unwrap();
    let before = offer.clone();
    assert!(offer.accept_bid(&rival(), 119, NOW, PROLONG).is_err());
    assert_eq!(offer, before);
}

#[test]
fn minimum_bid_saturates() {
    let offer = bare_offer(u128::MAX - 1, 0, 10, NOW + WEEK);
    assert_eq!(offer.minimum_bid(), u128::MAX);
}

#[test]
fn cap_below_next_step_still_buys() {
    let mut offer = bare_offer(100, 150, 10, NOW + WEEK);
    offer.accept_bid(&bidder(), 145, NOW, PROLONG).unwrap();
    assert_eq!(offer.minimum_bid(), 155);
    let outcome = offer.accept_bid(&rival(), 150, NOW, PROLONG).unwrap();
    assert!(outcome.settled);
    assert!(offer.is_ended(NOW));
}
