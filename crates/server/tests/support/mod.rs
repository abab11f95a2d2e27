#![allow(dead_code)]
use axum::{body::Body, http::Request, Router};
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::Service;

/// In-memory store with schema applied and the demo data loaded.
///
/// Fresh database, so ids are predictable: restaurants 1..=3, pizzas 1..=3,
/// restaurant_pizzas (1, r1, p1, $1), (2, r2, p2, $4), (3, r3, p3, $5).
pub async fn seeded_db() -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    service::seed::seed_demo_data(&db).await?;
    Ok(db)
}

pub async fn build_app() -> anyhow::Result<Router> {
    Ok(server::startup::build_app(seeded_db().await?))
}

/// Send one request through the router; returns status, content type and body.
pub async fn send(app: &mut Router, req: Request<Body>) -> anyhow::Result<(u16, Option<String>, Vec<u8>)> {
    let res = app.call(req).await?;
    let status = res.status().as_u16();
    let content_type = res
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    Ok((status, content_type, body.to_vec()))
}

pub async fn get_json(app: &mut Router, uri: &str) -> anyhow::Result<(u16, Value)> {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty())?;
    let (status, _, body) = send(app, req).await?;
    Ok((status, serde_json::from_slice(&body)?))
}

pub async fn post_json(app: &mut Router, uri: &str, body: &Value) -> anyhow::Result<(u16, Value)> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;
    let (status, _, body) = send(app, req).await?;
    Ok((status, serde_json::from_slice(&body)?))
}

pub async fn delete(app: &mut Router, uri: &str) -> anyhow::Result<(u16, Vec<u8>)> {
    let req = Request::builder().method("DELETE").uri(uri).body(Body::empty())?;
    let (status, _, body) = send(app, req).await?;
    Ok((status, body))
}
