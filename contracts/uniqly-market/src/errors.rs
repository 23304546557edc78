use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum MarketplaceError {
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MarketplaceError {
    pub fn wrong_nft_token() -> Self {
        Self::InvalidInput("Wrong NFT token address".into())
    }
    pub fn wrong_payment_token() -> Self {
        Self::InvalidInput("Wrong payment token".into())
    }
    pub fn max_price_set() -> Self {
        Self::InvalidInput("MaxPrice set".into())
    }
    pub fn max_price_below_price() -> Self {
        Self::InvalidInput("MaxPrice below price".into())
    }
    pub fn min_step_not_set() -> Self {
        Self::InvalidInput("MinStep not set".into())
    }
    pub fn min_step_set() -> Self {
        Self::InvalidInput("MinStep set".into())
    }
    pub fn wrong_timestamp() -> Self {
        Self::InvalidInput("Wrong timestamp set".into())
    }
    pub fn already_on_market() -> Self {
        Self::InvalidState("Token already on market".into())
    }
    pub fn not_on_market() -> Self {
        Self::NotFound("Token not on market".into())
    }
    pub fn not_yours() -> Self {
        Self::Unauthorized("It's not yours".into())
    }
    pub fn too_early() -> Self {
        Self::InvalidState("Too early".into())
    }
    pub fn too_late() -> Self {
        Self::InvalidState("Too late".into())
    }
    pub fn bid_too_low() -> Self {
        Self::InvalidInput("Bid too low".into())
    }
    pub fn need_exact_value() -> Self {
        Self::InvalidInput("Need exact value".into())
    }
    pub fn nothing_to_withdraw() -> Self {
        Self::InvalidState("Nothing to withdraw".into())
    }
    pub fn end_over_length() -> Self {
        Self::InvalidInput("End over length".into())
    }
    pub fn range_length_error() -> Self {
        Self::InvalidInput("Range length error".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}

impl From<uniqly_types::AuthError> for MarketplaceError {
    fn from(err: uniqly_types::AuthError) -> Self {
        Self::Unauthorized(err.to_string())
    }
}
