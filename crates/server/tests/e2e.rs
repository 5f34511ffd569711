use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::directory::InMemoryDirectory;
use tokio::net::TcpListener;

use server::startup::build_app;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = build_app(InMemoryDirectory::seeded());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_add_dealership_then_find_by_zip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/dealerships", app.base_url))
        .json(&json!({"name": "Kirkland Toyota", "zip": "98033", "address": "1 Lake St, Kirkland, WA"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"ok": true, "id": "d4"}));

    let res = c
        .get(format!("{}/dealerships", app.base_url))
        .query(&[("zip", "98033")])
        .send()
        .await?;
    let found = res.json::<Vec<Value>>().await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Kirkland Toyota");
    Ok(())
}

#[tokio::test]
async fn e2e_plan_rejections_and_plain_text_body() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/plans", app.base_url))
        .json(&json!({"kind": "bogus", "plan": {}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"error": "invalid kind"}));

    // no content-type header at all
    let res = c
        .post(format!("{}/plans", app.base_url))
        .body(r#"{"kind":"offers","plan":{"id":"o2","name":"First Responder","amount":500}}"#)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"ok": true, "count": 2}));
    Ok(())
}
