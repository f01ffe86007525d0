use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    Fromln,
    AsRefln,
)]
pub struct FiliaalId(i64);

impl FiliaalId {
    pub const UNASSIGNED: FiliaalId = FiliaalId(0);

    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }

    pub fn is_assigned(&self) -> bool {
        self.0 > 0
    }
}

impl Default for FiliaalId {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}
