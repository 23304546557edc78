use primitive_types::U256;

use crate::*;

/// How a settled sale's gross amount was split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaleProceeds {
    pub gross: u128,
    pub fee: u128,
    pub proceeds: u128,
}

/// `gross * fee_rate / FEE_DENOMINATOR`, rounded down.
pub(crate) fn compute_fee(gross: u128, fee_rate: u32) -> u128 {
    let fee = U256::from(gross) * U256::from(fee_rate) / U256::from(FEE_DENOMINATOR);
    // fee_rate <= FEE_DENOMINATOR keeps the quotient within u128.
    fee.min(U256::from(gross)).as_u128()
}

impl Contract {
    pub(crate) fn credit_fee(&mut self, payment_token: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.fee_collected.get(payment_token).copied().unwrap_or(0);
        self.fee_collected
            .insert(payment_token.clone(), balance.saturating_add(amount));
    }

    /// Settles the offer's leading bid: credits the market fee and pays the
    /// seller the remainder.
    pub(crate) fn settle_sale(&mut self, offer: &Offer) -> SaleProceeds {
        let gross = offer.highest_bid;
        let fee = compute_fee(gross, self.fee_rate(&offer.payment_token));
        let proceeds = gross - fee;
        self.credit_fee(&offer.payment_token, fee);
        payments::send(&offer.payment_token, &offer.seller, proceeds);
        SaleProceeds { gross, fee, proceeds }
    }
}
