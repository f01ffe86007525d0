mod draft;
mod gemeente;
mod id;
mod naam;
mod omzet;

pub use self::{draft::*, gemeente::*, id::*, naam::*, omzet::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Filiaal {
    id: FiliaalId,
    naam: FiliaalNaam,
    gemeente: FiliaalGemeente,
    omzet: Option<FiliaalOmzet>,
}

impl Filiaal {
    pub fn new(
        id: FiliaalId,
        naam: FiliaalNaam,
        gemeente: FiliaalGemeente,
        omzet: Option<FiliaalOmzet>,
    ) -> Self {
        Self {
            id,
            naam,
            gemeente,
            omzet,
        }
    }

    pub fn with_id(self, id: FiliaalId) -> Self {
        Self { id, ..self }
    }
}
