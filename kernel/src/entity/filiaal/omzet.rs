use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct FiliaalOmzet(#[serde(with = "json_number")] BigDecimal);

impl FiliaalOmzet {
    pub fn new(omzet: impl Into<BigDecimal>) -> Self {
        Self(omzet.into())
    }
}

// Decimals travel as bare JSON numbers, digit for digit. Relies on serde_json's
// arbitrary_precision so the number text is never narrowed to f64.
pub mod json_number {
    use super::*;
    use serde::{de, ser, Deserializer, Serializer};
    use serde_json::Number;

    pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        Number::from_str(&value.to_string())
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let number = Number::deserialize(deserializer)?;
        BigDecimal::from_str(&number.to_string()).map_err(de::Error::custom)
    }
}

pub mod json_number_option {
    use super::*;
    use serde::{de, ser, Deserializer, Serializer};
    use serde_json::Number;

    pub fn serialize<S: Serializer>(
        value: &Option<BigDecimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value
            .as_ref()
            .map(|value| Number::from_str(&value.to_string()))
            .transpose()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigDecimal>, D::Error> {
        Option::<Number>::deserialize(deserializer)?
            .map(|number| BigDecimal::from_str(&number.to_string()))
            .transpose()
            .map_err(de::Error::custom)
    }
}
