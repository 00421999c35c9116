//! Request extractors: authenticated principal, role gates and validated JSON.
//!
//! The token is read from `Authorization: Bearer <jwt>` first and falls back to
//! the `auth_token` cookie set by `/auth/login`.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::{header, request::Parts, StatusCode};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use models::RoleName;
use serde::de::DeserializeOwned;
use service::auth::domain::Principal;
use service::validation::Validate;
use tracing::warn;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub const AUTH_COOKIE: &str = "auth_token";

fn token_from_parts(parts: &Parts) -> Result<String, JsonApiError> {
    if let Some(value) = parts.headers.get(header::AUTHORIZATION) {
        let value = value.to_str().map_err(|_| JsonApiError::unauthorized("malformed Authorization header"))?;
        return match value.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(JsonApiError::unauthorized("expected Authorization: Bearer <token>")),
        };
    }
    CookieJar::from_headers(&parts.headers)
        .get(AUTH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| JsonApiError::unauthorized("missing bearer token"))
}

/// Any caller holding a valid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

#[axum::async_trait]
impl FromRequestParts<ServerState> for AuthUser {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts)?;
        let principal = state.auth.authenticate(&token).map_err(|e| {
            warn!(path = %parts.uri.path(), error = %e, "token validation failed");
            JsonApiError::unauthorized("invalid or expired token")
        })?;
        Ok(AuthUser(principal))
    }
}

async fn require_role(parts: &mut Parts, state: &ServerState, role: RoleName) -> Result<Principal, JsonApiError> {
    let AuthUser(principal) = AuthUser::from_request_parts(parts, state).await?;
    if !principal.has_role(role) {
        warn!(user_id = principal.user_id, required = %role, "role check failed");
        return Err(JsonApiError::forbidden(format!("{role} required")));
    }
    Ok(principal)
}

/// Requires `ROLE_USER`; 403 otherwise.
pub struct RequireUser(pub Principal);

#[axum::async_trait]
impl FromRequestParts<ServerState> for RequireUser {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        require_role(parts, state, RoleName::User).await.map(RequireUser)
    }
}

/// Requires `ROLE_ADMIN`; 403 otherwise.
pub struct RequireAdmin(pub Principal);

#[axum::async_trait]
impl FromRequestParts<ServerState> for RequireAdmin {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        require_role(parts, state, RoleName::Admin).await.map(RequireAdmin)
    }
}

/// `Json<T>` that also runs `T::validate`; both failures answer 400.
pub struct ValidJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|r| JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(r.body_text())))?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}
