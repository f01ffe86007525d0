use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::{AppModule, FiliaalDatabase};
use crate::link::FILIALEN_PATH;
use crate::request::{DeleteFiliaalRequest, FiliaalRequest, FiliaalTransformer, GetFiliaalRequest};
use crate::response::{
    CreatedFiliaalResponse, FiliaalCollectionResponse, FiliaalPresenter, FiliaalResponse,
    NoContentResponse,
};
use application::transfer::GetFiliaalDto;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use kernel::prelude::entity::FiliaalId;

pub trait FiliaalRouter {
    fn route_filiaal(self) -> Self;
}

impl<D: FiliaalDatabase> FiliaalRouter for Router<AppModule<D>> {
    fn route_filiaal(self) -> Self {
        self.route(FILIALEN_PATH, get(list::<D>).post(create::<D>))
            .route(
                "/filialen/:id",
                get(find::<D>).put(update::<D>).delete(delete::<D>),
            )
    }
}

/// Alle filialen zoeken
#[utoipa::path(
    get,
    path = "/filialen",
    responses(
        (status = 200, description = "Id en naam van elk filiaal", body = FiliaalCollectionResponse),
    ),
    tag = "filialen"
)]
async fn list<D: FiliaalDatabase>(
    State(module): State<AppModule<D>>,
) -> Result<FiliaalCollectionResponse, ErrorStatus> {
    Controller::new((), FiliaalPresenter::new(module.links()))
        .bypass(|| async move { module.database().get_all_filialen().await })
        .await
        .map_err(ErrorStatus::from)
}

/// Een filiaal zoeken op id
#[utoipa::path(
    get,
    path = "/filialen/{id}",
    params(("id" = i64, Path, description = "Id van het filiaal")),
    responses(
        (status = 200, description = "Het filiaal", body = FiliaalResponse),
        (status = 404, description = "Geen filiaal met dit id"),
    ),
    tag = "filialen"
)]
async fn find<D: FiliaalDatabase>(
    State(module): State<AppModule<D>>,
    Path(id): Path<i64>,
) -> Result<FiliaalResponse, ErrorStatus> {
    Controller::new(FiliaalTransformer, FiliaalPresenter::new(module.links()))
        .intake(GetFiliaalRequest::new(id))
        .try_handle(|dto| async move { module.database().get_filiaal(dto).await })
        .await
}

/// Een filiaal toevoegen
#[utoipa::path(
    post,
    path = "/filialen",
    request_body = FiliaalRequest,
    responses(
        (status = 201, description = "Toegevoegd", headers(("Location" = String, description = "Uri van het nieuwe filiaal"))),
        (status = 400, description = "Foutmelding per veld"),
    ),
    tag = "filialen"
)]
async fn create<D: FiliaalDatabase>(
    State(module): State<AppModule<D>>,
    body: Result<Json<FiliaalRequest>, JsonRejection>,
) -> Result<CreatedFiliaalResponse, ErrorStatus> {
    let Json(req) = body?;
    Controller::new(FiliaalTransformer, FiliaalPresenter::new(module.links()))
        .try_intake(req)?
        .handle(|dto| async move { module.database().create_filiaal(dto).await })
        .await
        .map_err(ErrorStatus::from)
}

/// Een filiaal wijzigen
#[utoipa::path(
    put,
    path = "/filialen/{id}",
    params(("id" = i64, Path, description = "Id van het filiaal")),
    request_body = FiliaalRequest,
    responses(
        (status = 204, description = "Gewijzigd"),
        (status = 400, description = "Foutmelding per veld"),
        (status = 404, description = "Geen filiaal met dit id"),
    ),
    tag = "filialen"
)]
// The path id must exist before the body is looked at.
async fn update<D: FiliaalDatabase>(
    State(module): State<AppModule<D>>,
    Path(id): Path<i64>,
    body: Result<Json<FiliaalRequest>, JsonRejection>,
) -> Result<NoContentResponse, ErrorStatus> {
    let existing = module
        .database()
        .get_filiaal(GetFiliaalDto {
            id: FiliaalId::new(id),
        })
        .await?;
    if existing.is_none() {
        return Err(ErrorStatus::NotFound);
    }

    let Json(req) = body?;
    Controller::new(FiliaalTransformer, FiliaalPresenter::new(module.links()))
        .try_intake((id, req))?
        .handle(|dto| async move { module.database().update_filiaal(dto).await })
        .await
        .map_err(ErrorStatus::from)
}

/// Een filiaal verwijderen
#[utoipa::path(
    delete,
    path = "/filialen/{id}",
    params(("id" = i64, Path, description = "Id van het filiaal")),
    responses(
        (status = 204, description = "Verwijderd, ook als het filiaal niet bestond"),
    ),
    tag = "filialen"
)]
async fn delete<D: FiliaalDatabase>(
    State(module): State<AppModule<D>>,
    Path(id): Path<i64>,
) -> Result<NoContentResponse, ErrorStatus> {
    Controller::new(FiliaalTransformer, FiliaalPresenter::new(module.links()))
        .intake(DeleteFiliaalRequest::new(id))
        .handle(|dto| async move { module.database().delete_filiaal(dto).await })
        .await
        .map_err(ErrorStatus::from)
}
