use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::modules::auth::application::domain::entities::SessionToken;

const SESSION_TOKEN_BYTES: usize = 32;

/// Hash a token using SHA-256 for storage
/// Never store raw tokens!
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fresh random session token, hex encoded.
pub fn generate_session_token() -> SessionToken {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);

    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    SessionToken::new(hex)
}
