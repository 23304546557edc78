use near_sdk::NearToken;

/// Payment-token id standing for native NEAR (attached deposit, not NEP-141).
pub const NATIVE_TOKEN: &str = "near";

pub const FEE_DENOMINATOR: u32 = 1_000_000; // 100%
pub const MAX_FEE_RATE: u32 = 100_000; // 10%

pub const MAX_TOKEN_ID_LEN: usize = 256;
// Upper bound on the NEP-171 `nft_token` result read in `process_sell`.
pub const MAX_TOKEN_VIEW_LEN: usize = 16_384;

// Storage key invariant: delimiter cannot appear in NEAR account IDs, so offer keys never collide.
pub const DELIMETER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

// Raw storage prefix for fee-withdrawal nonces; outside the StorageKey discriminant range.
pub const FEE_NONCE_PREFIX: u8 = 0xF0;

pub const GAS_NFT_TOKEN_TGAS: u64 = 10;
pub const GAS_NFT_TRANSFER_TGAS: u64 = 25;
pub const GAS_FT_TRANSFER_TGAS: u64 = 10;
pub const GAS_PROCESS_SELL_TGAS: u64 = 70;
pub const GAS_RESOLVE_CUSTODY_TGAS: u64 = 35;
pub const GAS_RESOLVE_CLAIM_TGAS: u64 = 30;
pub const GAS_RESOLVE_FEE_WITHDRAWAL_TGAS: u64 = 10;
pub const GAS_MIGRATE_TGAS: u64 = 200;
