mod common;

use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use common::{build_app, ADMIN_EMAIL, ADMIN_PASSWORD};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = build_app().await;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_cookie_session_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::builder().cookie_store(true).build()?;

    let resp = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);

    let resp = client.get(format!("{}/books", app.base_url)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::UNAUTHORIZED);

    let resp = client
        .post(format!("{}/auth/login", app.base_url))
        .json(&json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);

    // the cookie store now carries auth_token
    let resp = client
        .post(format!("{}/books", app.base_url))
        .json(&json!({"title": "Emma", "author": "Austen", "isbn": "978-0", "price": "5.50"}))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::CREATED);
    let created: serde_json::Value = resp.json().await?;

    let listed: serde_json::Value = client.get(format!("{}/books", app.base_url)).send().await?.json().await?;
    assert_eq!(listed[0]["id"], created["id"]);

    let resp = client.post(format!("{}/auth/logout", app.base_url)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}
