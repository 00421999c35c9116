mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{admin_token, build_app, dune, send, user_token};

#[tokio::test]
async fn health_and_docs_are_public() {
    let app = build_app().await;
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/books/{id}"].is_object());
}

#[tokio::test]
async fn catalog_requires_authentication_and_roles() {
    let app = build_app().await;
    let (status, _) = send(&app, "GET", "/books", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, "GET", "/books", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let user = user_token(&app, "reader@example.com").await;
    let (status, body) = send(&app, "GET", "/books", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, "POST", "/books", Some(&user), Some(dune())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");
    let (status, _) = send(&app, "DELETE", "/books/1", Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_book_lifecycle() {
    let app = build_app().await;
    let admin = admin_token(&app).await;

    let (status, created) = send(&app, "POST", "/books", Some(&admin), Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id assigned");
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["price"], "9.99");

    let (status, found) = send(&app, "GET", &format!("/books/{id}"), Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);

    let mut replacement = dune();
    replacement["title"] = json!("Dune2");
    let (status, updated) = send(&app, "PUT", &format!("/books/{id}"), Some(&admin), Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "Dune2");

    let (status, body) = send(&app, "GET", "/books/999999", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "can't find book by id 999999");

    let (status, _) = send(&app, "PUT", "/books/999999", Some(&admin), Some(dune())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for _ in 0..2 {
        let (status, _) = send(&app, "DELETE", &format!("/books/{id}"), Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    let (status, _) = send(&app, "GET", &format!("/books/{id}"), Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_books_are_rejected() {
    let app = build_app().await;
    let admin = admin_token(&app).await;

    let mut blank = dune();
    blank["title"] = json!("  ");
    let (status, body) = send(&app, "POST", "/books", Some(&admin), Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "validation error: title must not be blank");

    let mut negative = dune();
    negative["price"] = json!("-1.00");
    let (status, _) = send(&app, "POST", "/books", Some(&admin), Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/books", Some(&admin), Some(json!({"title": "Dune"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/books", Some(&admin), Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, "POST", "/books", Some(&admin), Some(dune())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");
}
