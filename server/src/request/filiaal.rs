use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;
use application::transfer::{CreateFiliaalDto, DeleteFiliaalDto, GetFiliaalDto, UpdateFiliaalDto};
use bigdecimal::BigDecimal;
use kernel::prelude::entity::{json_number_option, FiliaalDraft, FiliaalId};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FiliaalRequest {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    naam: Option<String>,
    #[serde(default)]
    gemeente: Option<String>,
    #[serde(default, with = "json_number_option")]
    #[schema(value_type = Option<f64>)]
    omzet: Option<BigDecimal>,
}

impl From<FiliaalRequest> for FiliaalDraft {
    fn from(value: FiliaalRequest) -> Self {
        FiliaalDraft {
            id: value.id,
            naam: value.naam,
            gemeente: value.gemeente,
            omzet: value.omzet,
        }
    }
}

#[derive(Debug)]
pub struct GetFiliaalRequest {
    id: i64,
}

impl GetFiliaalRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteFiliaalRequest {
    id: i64,
}

impl DeleteFiliaalRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct FiliaalTransformer;

impl TryIntake<FiliaalRequest> for FiliaalTransformer {
    type To = CreateFiliaalDto;
    type Error = ErrorStatus;
    fn emit(&self, input: FiliaalRequest) -> Result<Self::To, Self::Error> {
        let filiaal = FiliaalDraft::from(input).validate()?;
        Ok(CreateFiliaalDto { filiaal })
    }
}

// The path id replaces whatever id the body carried.
impl TryIntake<(i64, FiliaalRequest)> for FiliaalTransformer {
    type To = UpdateFiliaalDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (i64, FiliaalRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        let filiaal = FiliaalDraft::from(input)
            .validate()?
            .with_id(FiliaalId::new(id));
        Ok(UpdateFiliaalDto { filiaal })
    }
}

impl Intake<GetFiliaalRequest> for FiliaalTransformer {
    type To = GetFiliaalDto;
    fn emit(&self, input: GetFiliaalRequest) -> Self::To {
        GetFiliaalDto {
            id: FiliaalId::new(input.id),
        }
    }
}

impl Intake<DeleteFiliaalRequest> for FiliaalTransformer {
    type To = DeleteFiliaalDto;
    fn emit(&self, input: DeleteFiliaalRequest) -> Self::To {
        DeleteFiliaalDto {
            id: FiliaalId::new(input.id),
        }
    }
}
