mod bid;
mod claim;
mod resell;
pub(crate) mod rules;
mod sell;
mod validation;
