use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{CorsOrigins, ServerConfig};
use crate::handler::{AppModule, FiliaalDatabase};
use crate::openapi::OpenApiRouter;
use crate::route::FiliaalRouter;

pub mod config;
pub mod controller;
pub mod error;
pub mod handler;
pub mod link;
pub mod openapi;
pub mod request;
pub mod response;
pub mod route;

pub fn router<D: FiliaalDatabase>(module: AppModule<D>, config: &ServerConfig) -> Router {
    Router::new()
        .route_filiaal()
        .route_openapi()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(module)
}

pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let origin = match origins {
        CorsOrigins::Any => AllowOrigin::from(cors::Any),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION])
}
