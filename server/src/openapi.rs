use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::handler::{AppModule, FiliaalDatabase};
use crate::request::FiliaalRequest;
use crate::response::{
    EmbeddedFilialen, FiliaalCollectionResponse, FiliaalIdNaamResponse, FiliaalResponse,
};

pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Filialen", version = "0.1.0"),
    paths(
        crate::route::filiaal::list,
        crate::route::filiaal::find,
        crate::route::filiaal::create,
        crate::route::filiaal::update,
        crate::route::filiaal::delete,
    ),
    components(schemas(
        FiliaalRequest,
        FiliaalResponse,
        FiliaalIdNaamResponse,
        EmbeddedFilialen,
        FiliaalCollectionResponse,
    )),
    tags((name = "filialen", description = "Filialen beheren"))
)]
pub struct FiliaalApiDoc;

pub trait OpenApiRouter {
    fn route_openapi(self) -> Self;
}

impl<D: FiliaalDatabase> OpenApiRouter for Router<AppModule<D>> {
    fn route_openapi(self) -> Self {
        self.route(OPENAPI_PATH, get(openapi_json))
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(FiliaalApiDoc::openapi())
}
