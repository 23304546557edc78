mod builder;

mod contract;
mod fee;
mod offer;

pub use contract::*;
pub use fee::*;
pub use offer::*;

pub(crate) const STANDARD: &str = "uniqly";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const OFFER: &str = "OFFER_UPDATE";
pub(crate) const FEE: &str = "FEE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
