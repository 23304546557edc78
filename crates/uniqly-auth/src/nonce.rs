//! Last-used nonce per (recipient, signer key), kept in raw contract storage
//! under a caller-chosen prefix byte.

use near_sdk::{AccountId, PublicKey, env};
use uniqly_types::AuthError;

#[derive(Debug, Clone, Copy)]
pub struct NonceStore {
    prefix: u8,
}

impl NonceStore {
    pub const fn new(prefix: u8) -> Self {
        Self { prefix }
    }

    /// `prefix | recipient | '/' | signer key bytes`.
    fn key(&self, recipient: &AccountId, signer: &PublicKey) -> Vec<u8> {
        let recipient = recipient.as_bytes();
        let signer = signer.as_bytes();
        let mut key = Vec::with_capacity(2 + recipient.len() + signer.len());
        key.push(self.prefix);
        key.extend_from_slice(recipient);
        key.push(b'/');
        key.extend_from_slice(signer);
        key
    }

    /// 0 when nothing has been consumed yet.
    pub fn last(&self, recipient: &AccountId, signer: &PublicKey) -> u64 {
        env::storage_read(&self.key(recipient, signer))
            .and_then(|bytes| bytes.try_into().ok().map(u64::from_le_bytes))
            .unwrap_or(0)
    }

    pub fn check_fresh(
        &self,
        recipient: &AccountId,
        signer: &PublicKey,
        nonce: u64,
    ) -> Result<(), AuthError> {
        let last = self.last(recipient, signer);
        if nonce <= last {
            return Err(AuthError::NonceStale { last });
        }
        Ok(())
    }

    pub fn consume(&self, recipient: &AccountId, signer: &PublicKey, nonce: u64) {
        env::storage_write(&self.key(recipient, signer), &nonce.to_le_bytes());
    }
}
