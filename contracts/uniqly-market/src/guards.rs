use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit() != ONE_YOCTO {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_at_least_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit() < ONE_YOCTO {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_token_id(token_id: &str) -> Result<(), MarketplaceError> {
    if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN {
        return Err(MarketplaceError::InvalidInput(format!(
            "Token id must be 1..={} bytes",
            MAX_TOKEN_ID_LEN
        )));
    }
    Ok(())
}

pub(crate) fn is_native(token: &AccountId) -> bool {
    token.as_str() == NATIVE_TOKEN
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if actor_id != &self.owner_id {
            return Err(MarketplaceError::only_owner("contract owner"));
        }
        Ok(())
    }
}
