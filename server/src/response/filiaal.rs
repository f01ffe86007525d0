use crate::controller::{Exhaust, TryExhaust};
use crate::error::ErrorStatus;
use crate::link::{FiliaalLinks, Links};
use application::transfer::FiliaalDto;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bigdecimal::BigDecimal;
use kernel::prelude::entity::json_number_option;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct CreatedFiliaalResponse {
    location: String,
}

impl IntoResponse for CreatedFiliaalResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, [(header::LOCATION, self.location)]).into_response()
    }
}

#[derive(Debug)]
pub struct NoContentResponse;

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FiliaalResponse {
    id: i64,
    naam: String,
    gemeente: String,
    #[serde(with = "json_number_option")]
    #[schema(value_type = Option<f64>)]
    omzet: Option<BigDecimal>,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    links: Links,
}

impl IntoResponse for FiliaalResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FiliaalIdNaamResponse {
    id: i64,
    naam: String,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    links: Links,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmbeddedFilialen {
    filialen: Vec<FiliaalIdNaamResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FiliaalCollectionResponse {
    #[serde(rename = "_embedded")]
    embedded: EmbeddedFilialen,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    links: Links,
}

impl IntoResponse for FiliaalCollectionResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct FiliaalPresenter {
    links: FiliaalLinks,
}

impl FiliaalPresenter {
    pub fn new(links: &FiliaalLinks) -> Self {
        Self {
            links: links.clone(),
        }
    }
}

impl Exhaust<()> for FiliaalPresenter {
    type To = NoContentResponse;
    fn emit(&self, _: ()) -> Self::To {
        NoContentResponse
    }
}

impl Exhaust<FiliaalDto> for FiliaalPresenter {
    type To = CreatedFiliaalResponse;
    fn emit(&self, input: FiliaalDto) -> Self::To {
        CreatedFiliaalResponse {
            location: self.links.item_uri(input.id),
        }
    }
}

impl TryExhaust<Option<FiliaalDto>> for FiliaalPresenter {
    type To = FiliaalResponse;
    type Error = ErrorStatus;
    fn emit(&self, input: Option<FiliaalDto>) -> Result<Self::To, Self::Error> {
        let FiliaalDto {
            id,
            naam,
            gemeente,
            omzet,
        } = input.ok_or(ErrorStatus::NotFound)?;
        Ok(FiliaalResponse {
            id,
            naam,
            gemeente,
            omzet,
            links: self.links.item(id),
        })
    }
}

impl Exhaust<Vec<FiliaalDto>> for FiliaalPresenter {
    type To = FiliaalCollectionResponse;
    fn emit(&self, input: Vec<FiliaalDto>) -> Self::To {
        let filialen = input
            .into_iter()
            .map(|FiliaalDto { id, naam, .. }| FiliaalIdNaamResponse {
                id,
                naam,
                links: self.links.summary(id),
            })
            .collect::<Vec<_>>();

        FiliaalCollectionResponse {
            embedded: EmbeddedFilialen { filialen },
            links: self.links.collection(),
        }
    }
}
