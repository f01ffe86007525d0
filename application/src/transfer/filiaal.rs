use bigdecimal::BigDecimal;

use kernel::prelude::entity::{DestructFiliaal, Filiaal, FiliaalId};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FiliaalDto {
    pub id: i64,
    pub naam: String,
    pub gemeente: String,
    pub omzet: Option<BigDecimal>,
}

impl From<Filiaal> for FiliaalDto {
    fn from(value: Filiaal) -> Self {
        let DestructFiliaal {
            id,
            naam,
            gemeente,
            omzet,
        } = value.into_destruct();
        Self {
            id: id.into(),
            naam: naam.into(),
            gemeente: gemeente.into(),
            omzet: omzet.map(BigDecimal::from),
        }
    }
}

pub struct GetFiliaalDto {
    pub id: FiliaalId,
}

pub struct CreateFiliaalDto {
    pub filiaal: Filiaal,
}

pub struct UpdateFiliaalDto {
    pub filiaal: Filiaal,
}

pub struct DeleteFiliaalDto {
    pub id: FiliaalId,
}
