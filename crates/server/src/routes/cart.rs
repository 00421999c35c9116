use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::cart::dto::{AddCartItemRequest, CartDto, CartItemDto, UpdateCartItemRequest};

use crate::errors::JsonApiError;
use crate::extract::{RequireUser, ValidJson};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/cart", tag = "cart",
    responses((status = 200, description = "Current cart", body = crate::openapi::CartDoc)),
    security(("bearer_auth" = []))
)]
pub async fn view(State(state): State<ServerState>, RequireUser(user): RequireUser) -> Result<Json<CartDto>, JsonApiError> {
    Ok(Json(state.cart.view(user.user_id).await?))
}

#[utoipa::path(
    post, path = "/cart", tag = "cart",
    request_body = crate::openapi::AddCartItemDoc,
    responses(
        (status = 201, description = "Added", body = crate::openapi::CartItemDoc),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Unknown book")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add(
    State(state): State<ServerState>,
    RequireUser(user): RequireUser,
    ValidJson(input): ValidJson<AddCartItemRequest>,
) -> Result<(StatusCode, Json<CartItemDto>), JsonApiError> {
    let item = state.cart.add_item(user.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put, path = "/cart/items/{id}", tag = "cart",
    params(("id" = i64, Path, description = "Cart item id")),
    request_body = crate::openapi::UpdateCartItemDoc,
    responses((status = 200, description = "Updated", body = crate::openapi::CartItemDoc), (status = 404, description = "Not Found")),
    security(("bearer_auth" = []))
)]
pub async fn update(
    State(state): State<ServerState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
    ValidJson(input): ValidJson<UpdateCartItemRequest>,
) -> Result<Json<CartItemDto>, JsonApiError> {
    Ok(Json(state.cart.update_item(user.user_id, id, input).await?))
}

#[utoipa::path(
    delete, path = "/cart/items/{id}", tag = "cart",
    params(("id" = i64, Path, description = "Cart item id")),
    responses((status = 204, description = "Removed or already absent")),
    security(("bearer_auth" = []))
)]
pub async fn remove(
    State(state): State<ServerState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.cart.remove_item(user.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
