//! Opaque session-token codec.
//!
//! FORMAT
//! ======
//! A token is the standard-alphabet base64 encoding of a JSON payload:
//! access tokens carry `{sub, email, role, exp}`, refresh tokens carry
//! `{sub, type: "refresh", exp}`. `exp` is an absolute unix-epoch
//! millisecond instant.
//!
//! There is deliberately no signature or integrity check: anyone holding the
//! string can decode or forge it. The encoding exists so the client can read
//! expiry and subject locally; it is advisory only and must never be treated
//! as a security boundary.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::types::{Role, User};

/// Default access-token lifetime.
pub const ACCESS_TOKEN_TTL: Duration = Duration::hours(1);
/// Default refresh-token lifetime.
pub const REFRESH_TOKEN_TTL: Duration = Duration::days(7);
/// `type` marker carried by refresh tokens.
pub const REFRESH_MARKER: &str = "refresh";

/// Token that cannot be parsed back into a payload.
#[derive(Debug, thiserror::Error)]
pub enum MalformedTokenError {
    #[error("token is not valid base64")]
    Encoding,
    #[error("token payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Decoded token payload. `role`/`email` are present on access tokens,
/// `kind` (`"refresh"`) on refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Absolute expiry, unix-epoch milliseconds.
    pub exp: i64,
}

impl TokenPayload {
    /// A token is valid strictly while `now` is before `exp`.
    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.exp
    }
}

/// Current instant as unix-epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
}

fn expiry_after(ttl: Duration) -> i64 {
    let ttl_ms = i64::try_from(ttl.whole_milliseconds()).unwrap_or(i64::MAX);
    now_ms().saturating_add(ttl_ms)
}

fn encode_payload(payload: &TokenPayload) -> String {
    // Serialization of a plain struct cannot fail.
    let json = serde_json::to_string(payload).unwrap_or_default();
    BASE64.encode(json)
}

/// Encode a fresh access token for `user`, expiring `ttl` from now.
#[must_use]
pub fn encode_access(user: &User, ttl: Duration) -> String {
    encode_payload(&TokenPayload {
        sub: user.id.clone(),
        email: Some(user.email.clone()),
        role: Some(user.role),
        kind: None,
        exp: expiry_after(ttl),
    })
}

/// Encode a fresh refresh token for `user`, expiring `ttl` from now.
#[must_use]
pub fn encode_refresh(user: &User, ttl: Duration) -> String {
    encode_payload(&TokenPayload {
        sub: user.id.clone(),
        email: None,
        role: None,
        kind: Some(REFRESH_MARKER.into()),
        exp: expiry_after(ttl),
    })
}

/// Decode a token back into its payload.
///
/// # Errors
///
/// Returns [`MalformedTokenError`] if the string is not base64, not JSON,
/// or is missing the required `sub`/`exp` fields.
pub fn decode(token: &str) -> Result<TokenPayload, MalformedTokenError> {
    let bytes = BASE64
        .decode(token)
        .map_err(|_| MalformedTokenError::Encoding)?;
    let payload = serde_json::from_slice(&bytes)?;
    Ok(payload)
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
