// ABOUTME: Signed bearer token helpers for API authentication
// ABOUTME: HMAC-SHA256 tokens with the signing secret read at call time

use std::env;

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const SECRET_ENV: &str = "SPECGEN_TOKEN_SECRET";
const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Signing secret not configured")]
    MissingSecret,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    Expired,
}

/// The authenticated subject carried by a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
}

/// The secret is read lazily so a missing secret fails token operations at
/// call time rather than at startup
fn signing_secret() -> Result<String, AuthError> {
    env::var(SECRET_ENV).map_err(|_| AuthError::MissingSecret)
}

fn sign(secret: &str, payload: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(payload.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Issue a signed token for a user, valid for seven days
pub fn issue_token(user_id: &str) -> Result<String, AuthError> {
    let secret = signing_secret()?;
    let expiry = chrono::Utc::now().timestamp() + TOKEN_TTL_SECS;

    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let payload = format!("{}.{}", engine.encode(user_id), expiry);
    let signature = engine.encode(sign(&secret, &payload));

    Ok(format!("{}.{}", payload, signature))
}

/// Verify a token's signature and expiry, returning the subject
pub fn verify_token(token: &str) -> Result<AuthUser, AuthError> {
    let secret = signing_secret()?;

    let mut parts = token.rsplitn(2, '.');
    let signature_part = parts.next().ok_or(AuthError::InvalidToken)?;
    let payload = parts.next().ok_or(AuthError::InvalidToken)?;

    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let signature = engine
        .decode(signature_part)
        .map_err(|_| AuthError::InvalidToken)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AuthError::InvalidToken)?;

    let (user_part, expiry_part) = payload.split_once('.').ok_or(AuthError::InvalidToken)?;
    let expiry: i64 = expiry_part.parse().map_err(|_| AuthError::InvalidToken)?;
    if expiry < chrono::Utc::now().timestamp() {
        return Err(AuthError::Expired);
    }

    let user_id = engine.decode(user_part).map_err(|_| AuthError::InvalidToken)?;
    let user_id = String::from_utf8(user_id).map_err(|_| AuthError::InvalidToken)?;

    Ok(AuthUser { id: user_id })
}
