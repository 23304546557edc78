pub(crate) mod pricing;
mod views;
mod withdraw;

pub use pricing::SaleProceeds;
