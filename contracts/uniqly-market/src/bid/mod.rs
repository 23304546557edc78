mod ledger;
mod views;

pub(crate) use ledger::BidLedger;
pub use ledger::Bid;
