//! Raw ed25519 byte extraction.

use crate::AuthError;

/// Accepts the bare 32-byte key or NEAR's 33-byte form (curve tag + key).
pub fn raw_ed25519_public_key(bytes: &[u8]) -> Result<[u8; 32], AuthError> {
    let key = match bytes.len() {
        32 => bytes,
        33 => &bytes[1..],
        _ => return Err(AuthError::MalformedKey),
    };
    key.try_into().map_err(|_| AuthError::MalformedKey)
}

pub fn raw_ed25519_signature(bytes: &[u8]) -> Result<[u8; 64], AuthError> {
    bytes
        .try_into()
        .map_err(|_| AuthError::MalformedSignature(bytes.len()))
}
