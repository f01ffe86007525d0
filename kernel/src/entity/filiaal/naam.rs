use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct FiliaalNaam(String);

impl FiliaalNaam {
    pub fn new(naam: impl Into<String>) -> Self {
        Self(naam.into())
    }
}
