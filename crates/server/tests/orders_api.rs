mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{admin_token, build_app, dune, send, user_token};

#[tokio::test]
async fn cart_checkout_and_order_queries() {
    let app = build_app().await;
    let admin = admin_token(&app).await;
    let (_, book) = send(&app, "POST", "/books", Some(&admin), Some(dune())).await;
    let book_id = book["id"].as_i64().expect("book id");

    let reader = user_token(&app, "reader@example.com").await;
    let (status, _) = send(&app, "POST", "/orders", Some(&reader), Some(json!({"shipping_address": "1 Main St"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "empty cart cannot be ordered");

    let (status, item) = send(&app, "POST", "/cart", Some(&reader), Some(json!({"book_id": book_id, "quantity": 1}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, item) = send(
        &app,
        "PUT",
        &format!("/cart/items/{}", item["id"]),
        Some(&reader),
        Some(json!({"quantity": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["quantity"], 2);

    let (_, cart) = send(&app, "GET", "/cart", Some(&reader), None).await;
    assert_eq!(cart["total"], "19.98");

    let (status, order) = send(&app, "POST", "/orders", Some(&reader), Some(json!({"shipping_address": "1 Main St"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "PENDING");
    assert_eq!(order["total"], "19.98");
    let order_id = order["id"].as_i64().expect("order id");
    let item_id = order["order_items"][0]["id"].as_i64().expect("item id");

    let (_, cart) = send(&app, "GET", "/cart", Some(&reader), None).await;
    assert_eq!(cart["items"], json!([]));

    let (status, orders) = send(&app, "GET", "/orders?page=1&per_page=10", Some(&reader), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().map(Vec::len), Some(1));

    let (status, items) = send(&app, "GET", &format!("/orders/{order_id}/items"), Some(&reader), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items[0]["book_id"], book_id);

    let (status, one) = send(&app, "GET", &format!("/orders/{order_id}/items/{item_id}"), Some(&reader), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["quantity"], 2);

    // another reader cannot see it
    let other = user_token(&app, "other@example.com").await;
    let (status, _) = send(&app, "GET", &format!("/orders/{order_id}/items/{item_id}"), Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &format!("/orders/{order_id}/items"), Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // only administrators move orders between states
    let (status, _) = send(&app, "PUT", &format!("/orders/{order_id}"), Some(&reader), Some(json!({"status": "SHIPPED"}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, updated) = send(&app, "PUT", &format!("/orders/{order_id}"), Some(&admin), Some(json!({"status": "SHIPPED"}))).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(updated["status"], "SHIPPED");
    let (status, _) = send(&app, "PUT", &format!("/orders/{order_id}"), Some(&admin), Some(json!({"status": "LOST"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cart_rejects_unknown_books_and_bad_quantities() {
    let app = build_app().await;
    let reader = user_token(&app, "reader@example.com").await;
    let (status, _) = send(&app, "POST", "/cart", Some(&reader), Some(json!({"book_id": 42, "quantity": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "POST", "/cart", Some(&reader), Some(json!({"book_id": 42, "quantity": 0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) =
        send(&app, "POST", "/cart", Some(&reader), Some(json!({"book_id": 42, "quantity": i32::MAX}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "DELETE", "/cart/items/42", Some(&reader), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
