#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use driver::database::InMemoryDatabase;
use http_body_util::BodyExt;
use serde_json::Value;
use server::config::ServerConfig;
use server::handler::AppModule;
use tower::ServiceExt;

pub fn build_test_app() -> Router {
    build_test_app_with(ServerConfig::default())
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    server::router(AppModule::new(InMemoryDatabase::new(), &config), &config)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, json: Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, &json.to_string()).await
}

pub async fn put_json(app: &Router, uri: &str, json: Value) -> Response<Body> {
    send_raw(app, Method::PUT, uri, &json.to_string()).await
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn create(app: &Router, json: Value) -> String {
    let response = post_json(app, "/filialen", json).await;
    assert_eq!(response.status(), 201);
    response.headers()["location"].to_str().unwrap().to_string()
}
