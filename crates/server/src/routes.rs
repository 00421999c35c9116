pub mod auth;
pub mod books;
pub mod cart;
pub mod orders;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public, user and admin routes plus Swagger UI.
/// Role checks live in the handlers' extractors.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me));

    let catalog = Router::new()
        .route("/books", get(books::list).post(books::create))
        .route("/books/:id", get(books::get).put(books::update).delete(books::delete));

    let shopping = Router::new()
        .route("/cart", get(cart::view).post(cart::add))
        .route("/cart/items/:id", put(cart::update).delete(cart::remove))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:id", put(orders::update_status))
        .route("/orders/:id/items", get(orders::items))
        .route("/orders/:id/items/:item_id", get(orders::item));

    public
        .merge(catalog)
        .merge(shopping)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
