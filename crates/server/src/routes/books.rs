use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::book::dto::{BookDto, CreateBookRequest};

use crate::errors::JsonApiError;
use crate::extract::{RequireAdmin, RequireUser, ValidJson};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/books", tag = "books",
    responses((status = 200, description = "All books", body = [crate::openapi::BookDoc]), (status = 401, description = "Unauthorized")),
    security(("bearer_auth" = []))
)]
pub async fn list(State(state): State<ServerState>, RequireUser(_user): RequireUser) -> Result<Json<Vec<BookDto>>, JsonApiError> {
    Ok(Json(state.books.find_all().await?))
}

#[utoipa::path(
    get, path = "/books/{id}", tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses((status = 200, description = "Book", body = crate::openapi::BookDoc), (status = 404, description = "Not Found")),
    security(("bearer_auth" = []))
)]
pub async fn get(
    State(state): State<ServerState>,
    RequireUser(_user): RequireUser,
    Path(id): Path<i64>,
) -> Result<Json<BookDto>, JsonApiError> {
    Ok(Json(state.books.find_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/books", tag = "books",
    request_body = crate::openapi::CreateBookDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BookDoc),
        (status = 400, description = "Bad Request"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Duplicate ISBN")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    State(state): State<ServerState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidJson(input): ValidJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookDto>), JsonApiError> {
    let book = state.books.save(input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

#[utoipa::path(
    put, path = "/books/{id}", tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = crate::openapi::CreateBookDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::BookDoc),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    State(state): State<ServerState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    ValidJson(input): ValidJson<CreateBookRequest>,
) -> Result<Json<BookDto>, JsonApiError> {
    Ok(Json(state.books.update_by_id(id, input).await?))
}

#[utoipa::path(
    delete, path = "/books/{id}", tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses((status = 204, description = "Deleted or already absent"), (status = 403, description = "Forbidden")),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    State(state): State<ServerState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.books.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
