#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use configs::AppConfig;
use serde_json::Value;
use tower::Service;

/// Application router over a fresh, migrated in-memory database.
pub async fn build_app() -> anyhow::Result<Router> {
    let cfg = AppConfig { database: models::db::memory_config(), ..AppConfig::default() };
    server::startup::build_app(&cfg).await
}

/// Send one request through the router; the body is parsed as JSON when present.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let req = builder.body(Body::from(body.unwrap_or_default().to_owned()))?;

    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

pub async fn create_planet(app: &Router, name: &str) -> anyhow::Result<i64> {
    let (status, body) = send(app, "POST", "/planet", Some(&format!(r#"{{"name":"{name}"}}"#))).await?;
    anyhow::ensure!(status == StatusCode::CREATED, "create planet: {status} {body}");
    body["id"].as_i64().ok_or_else(|| anyhow::anyhow!("no id in {body}"))
}

pub async fn create_person(app: &Router, name: &str) -> anyhow::Result<i64> {
    let (status, body) = send(app, "POST", "/people", Some(&format!(r#"{{"name":"{name}"}}"#))).await?;
    anyhow::ensure!(status == StatusCode::CREATED, "create person: {status} {body}");
    body["id"].as_i64().ok_or_else(|| anyhow::anyhow!("no id in {body}"))
}

pub async fn create_user(app: &Router, email: &str) -> anyhow::Result<i64> {
    let payload = format!(r#"{{"email":"{email}","password":"x","is_active":true}}"#);
    let (status, body) = send(app, "POST", "/user", Some(&payload)).await?;
    anyhow::ensure!(status == StatusCode::CREATED, "create user: {status} {body}");
    body["id"].as_i64().ok_or_else(|| anyhow::anyhow!("no id in {body}"))
}
