use crate::external::ext_ft;
use crate::guards::is_native;
use crate::*;

/// Sends `amount` of `token` from the market: a plain transfer for native NEAR,
/// `ft_transfer` (1 yoctoNEAR attached) otherwise.
pub(crate) fn transfer(token: &AccountId, receiver: &AccountId, amount: u128) -> Promise {
    if is_native(token) {
        Promise::new(receiver.clone()).transfer(NearToken::from_yoctonear(amount))
    } else {
        ext_ft::ext(token.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(GAS_FT_TRANSFER_TGAS))
            .ft_transfer(receiver.clone(), U128(amount), None)
    }
}

/// Fire-and-forget payout used for refunds and seller proceeds.
pub(crate) fn send(token: &AccountId, receiver: &AccountId, amount: u128) {
    if amount > 0 {
        let _ = transfer(token, receiver, amount);
    }
}
