use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use models::RoleName;
use serde::Serialize;
use service::auth::domain::{AuthSession, LoginRequest, RegisterRequest, UserDto};

use crate::errors::JsonApiError;
use crate::extract::{AuthUser, ValidJson, AUTH_COOKIE};
use crate::state::ServerState;

#[derive(Serialize)]
pub struct MeOutput {
    pub user_id: i64,
    pub email: String,
    pub roles: Vec<RoleName>,
}

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterDoc, responses((status = 201, description = "Registered", body = crate::openapi::UserDoc), (status = 400, description = "Bad Request"), (status = 409, description = "Conflict")))]
pub async fn register(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserDto>), JsonApiError> {
    let user = state.auth.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginDoc, responses((status = 200, description = "Logged In", body = crate::openapi::SessionDoc), (status = 401, description = "Unauthorized")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthSession>), JsonApiError> {
    let session = state.auth.login(input).await?;
    let mut cookie = Cookie::new(AUTH_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    Ok((jar.add(cookie), Json(session)))
}

#[utoipa::path(post, path = "/auth/logout", tag = "auth", responses((status = 204, description = "Cookie cleared")))]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let mut cookie = Cookie::from(AUTH_COOKIE);
    cookie.set_path("/");
    (jar.remove(cookie), StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/auth/me", tag = "auth", responses((status = 200, description = "Current principal"), (status = 401, description = "Unauthorized")), security(("bearer_auth" = [])))]
pub async fn me(AuthUser(principal): AuthUser) -> Json<MeOutput> {
    Json(MeOutput { user_id: principal.user_id, email: principal.email, roles: principal.roles })
}
