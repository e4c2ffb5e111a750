//! Opaque session tokens and the signed session cookie.
//!
//! A session token is a random UUID v4. Only its SHA-256 digest is stored
//! in the `sessions` table, so a database leak never exposes live tokens.
//! The cookie value is `<token>.<hmac-tag>`, where the tag is an HMAC-SHA256
//! over the token keyed by the server secret. A cookie that fails tag
//! verification never reaches the database.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use axum::http::header::HeaderValue;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "classtrack_session";

/// Generate a fresh opaque session token.
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

/// SHA-256 digest of a session token, hex-encoded, as stored in `sessions`.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// HMAC-SHA256 tag over `token`, hex-encoded.
fn sign_token(token: &str, secret_key: &str) -> String {
    // HMAC accepts keys of any length; new_from_slice cannot fail for SHA-256.
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts any key length"));
    mac.update(token.as_bytes());
    format!("{:x}", mac.finalize().into_bytes())
}

/// Produce the signed cookie value `<token>.<tag>`.
pub fn sign_session_value(token: &str, secret_key: &str) -> String {
    format!("{token}.{}", sign_token(token, secret_key))
}

/// Verify a signed cookie value and return the embedded token.
///
/// Returns `None` when the value is malformed or the tag does not verify.
pub fn verify_session_value(value: &str, secret_key: &str) -> Option<String> {
    let (token, tag) = value.rsplit_once('.')?;
    if token.is_empty() || tag.is_empty() {
        return None;
    }
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes()).ok()?;
    mac.update(token.as_bytes());
    let tag_bytes = decode_hex(tag)?;
    mac.verify_slice(&tag_bytes).ok()?;
    Some(token.to_string())
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}

/// Build the `Set-Cookie` header value for a new session.
///
/// HttpOnly keeps the cookie out of script reach; SameSite=Lax blocks
/// cross-site POSTs while still allowing top-level navigation. The Secure
/// attribute is added only when `secure` is set (production).
pub fn session_cookie(
    signed_value: &str,
    max_age_secs: i64,
    secure: bool,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    let secure_attr = if secure { "; Secure" } else { "" };
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={signed_value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}{secure_attr}"
    ))
}

/// Build the `Set-Cookie` header value that clears the session cookie.
pub fn clear_session_cookie(secure: bool) -> HeaderValue {
    let secure_attr = if secure { "; Secure" } else { "" };
    let value = format!(
        "{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{secure_attr}"
    );
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| unreachable!("static cookie string is a valid header value"))
}

/// Pull the session cookie value out of a `Cookie` request header.
pub fn extract_session_value(cookie_header: &str) -> Option<&str> {
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}
