mod manage;
mod views;

pub use views::PaymentTokenView;
