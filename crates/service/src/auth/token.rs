//! HS256 bearer tokens carrying the caller's id, email and roles.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use models::RoleName;
use serde::{Deserialize, Serialize};

use super::domain::Principal;
use super::errors::AuthError;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    uid: i64,
    roles: Vec<String>,
    iat: i64,
    exp: i64,
}

pub fn issue_token(principal: &Principal, secret: &str, ttl_hours: i64) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: principal.email.clone(),
        uid: principal.user_id,
        roles: principal.roles.iter().map(|r| r.authority().to_string()).collect(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

/// Verify signature and expiry; role names that no longer exist are dropped.
pub fn decode_token(token: &str, secret: &str) -> Result<Principal, AuthError> {
    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::new(Algorithm::HS256))
        .map_err(|e| AuthError::TokenError(e.to_string()))?;
    let c = data.claims;
    let mut roles: Vec<RoleName> = c.roles.iter().filter_map(|r| r.parse().ok()).collect();
    roles.sort();
    Ok(Principal { user_id: c.uid, email: c.sub, roles })
}
