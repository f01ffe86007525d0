use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct FiliaalGemeente(String);

impl FiliaalGemeente {
    pub fn new(gemeente: impl Into<String>) -> Self {
        Self(gemeente.into())
    }
}
