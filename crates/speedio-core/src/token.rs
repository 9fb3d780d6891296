//! Access tokens grouping a batch of notes.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::defaults::{TOKEN_BYTES, TOKEN_LEN};

/// Characters of a token that may appear in logs.
const LOG_PREFIX_LEN: usize = 8;

/// A server-issued access token.
///
/// Rendered as 32 lowercase hex characters encoding 16 bytes drawn from a
/// cryptographically secure generator. The token is the only key for reading
/// back a batch of notes; it carries no ownership or expiry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// The full token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters safe to put in logs.
    pub fn log_prefix(&self) -> &str {
        log_prefix(&self.0)
    }

    /// Whether `s` has the shape of an issued token.
    pub fn is_well_formed(s: &str) -> bool {
        s.len() == TOKEN_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

/// Leading characters of an arbitrary token string, for logging.
pub fn log_prefix(token: &str) -> &str {
    match token.char_indices().nth(LOG_PREFIX_LEN) {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<AccessToken> for String {
    fn from(token: AccessToken) -> Self {
        token.0
    }
}
