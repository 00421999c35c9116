use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use service::order::dto::{CreateOrderRequest, OrderDto, OrderItemDto, UpdateOrderStatusRequest};
use service::pagination::Pagination;

use crate::errors::JsonApiError;
use crate::extract::{RequireAdmin, RequireUser, ValidJson};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    params(
        ("page" = Option<u32>, Query, description = "1-based page, default 1"),
        ("per_page" = Option<u32>, Query, description = "Page size 1..=100, default 20")
    ),
    responses((status = 200, description = "Caller's orders, newest first", body = [crate::openapi::OrderDoc])),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(state): State<ServerState>,
    RequireUser(user): RequireUser,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<OrderDto>>, JsonApiError> {
    Ok(Json(state.orders.get_all_user_orders(user.user_id, page).await?))
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::CreateOrderDoc,
    responses((status = 201, description = "Order placed from the cart", body = crate::openapi::OrderDoc), (status = 400, description = "Empty cart or bad input")),
    security(("bearer_auth" = []))
)]
pub async fn create(
    State(state): State<ServerState>,
    RequireUser(user): RequireUser,
    ValidJson(input): ValidJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderDto>), JsonApiError> {
    let order = state.orders.create_order(user.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    put, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = crate::openapi::UpdateOrderStatusDoc,
    responses((status = 202, description = "Status changed", body = crate::openapi::OrderDoc), (status = 404, description = "Not Found")),
    security(("bearer_auth" = []))
)]
pub async fn update_status(
    State(state): State<ServerState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    ValidJson(input): ValidJson<UpdateOrderStatusRequest>,
) -> Result<(StatusCode, Json<OrderDto>), JsonApiError> {
    let order = state.orders.update_order_status(id, input).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}

#[utoipa::path(
    get, path = "/orders/{id}/items", tag = "orders",
    params(
        ("id" = i64, Path, description = "Order id"),
        ("page" = Option<u32>, Query, description = "1-based page, default 1"),
        ("per_page" = Option<u32>, Query, description = "Page size 1..=100, default 20")
    ),
    responses((status = 200, description = "Items of one of the caller's orders", body = [crate::openapi::OrderItemDoc]), (status = 404, description = "Not Found")),
    security(("bearer_auth" = []))
)]
pub async fn items(
    State(state): State<ServerState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<OrderItemDto>>, JsonApiError> {
    Ok(Json(state.orders.get_all_order_items_from_order(user.user_id, id, page).await?))
}

#[utoipa::path(
    get, path = "/orders/{id}/items/{item_id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id"), ("item_id" = i64, Path, description = "Order item id")),
    responses((status = 200, description = "Order item", body = crate::openapi::OrderItemDoc), (status = 404, description = "Not Found")),
    security(("bearer_auth" = []))
)]
pub async fn item(
    State(state): State<ServerState>,
    RequireUser(user): RequireUser,
    Path((order_id, item_id)): Path<(i64, i64)>,
) -> Result<Json<OrderItemDto>, JsonApiError> {
    Ok(Json(state.orders.find_order_item_in_order(user.user_id, order_id, item_id).await?))
}
