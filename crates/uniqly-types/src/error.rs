/// Failure of a signed fee-withdrawal check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    MalformedKey,
    MalformedSignature(usize),
    UnsupportedCurve,
    SignatureInvalid,
    NonceStale { last: u64 },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedKey => write!(f, "malformed ed25519 public key"),
            Self::MalformedSignature(len) => {
                write!(f, "ed25519 signature must be 64 bytes, got {len}")
            }
            Self::UnsupportedCurve => write!(f, "only ed25519 signer keys are supported"),
            Self::SignatureInvalid => write!(f, "invalid signature"),
            Self::NonceStale { last } => write!(f, "nonce must be greater than {last}"),
        }
    }
}

impl std::error::Error for AuthError {}
