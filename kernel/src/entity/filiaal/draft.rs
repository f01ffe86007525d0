use bigdecimal::BigDecimal;

use crate::entity::{Filiaal, FiliaalGemeente, FiliaalId, FiliaalNaam, FiliaalOmzet};
use crate::validation::{is_not_blank, FieldErrors, Rule, NOT_BLANK, NOT_NULL, POSITIVE_OR_ZERO};

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FiliaalDraft {
    pub id: Option<i64>,
    pub naam: Option<String>,
    pub gemeente: Option<String>,
    pub omzet: Option<BigDecimal>,
}

fn naam_present(draft: &FiliaalDraft) -> bool {
    draft.naam.is_some()
}

fn naam_not_blank(draft: &FiliaalDraft) -> bool {
    is_not_blank(draft.naam.as_deref())
}

fn gemeente_present(draft: &FiliaalDraft) -> bool {
    draft.gemeente.is_some()
}

fn gemeente_not_blank(draft: &FiliaalDraft) -> bool {
    is_not_blank(draft.gemeente.as_deref())
}

fn omzet_positive_or_zero(draft: &FiliaalDraft) -> bool {
    draft
        .omzet
        .as_ref()
        .map_or(true, |omzet| omzet >= &BigDecimal::default())
}

pub static FILIAAL_RULES: [Rule<FiliaalDraft>; 5] = [
    Rule::new("naam", NOT_NULL, naam_present),
    Rule::new("naam", NOT_BLANK, naam_not_blank),
    Rule::new("gemeente", NOT_NULL, gemeente_present),
    Rule::new("gemeente", NOT_BLANK, gemeente_not_blank),
    Rule::new("omzet", POSITIVE_OR_ZERO, omzet_positive_or_zero),
];

impl FiliaalDraft {
    pub fn validate(self) -> Result<Filiaal, FieldErrors> {
        let errors = FieldErrors::collect(&self, &FILIAAL_RULES);
        match (self.naam, self.gemeente) {
            (Some(naam), Some(gemeente)) if errors.is_empty() => Ok(Filiaal::new(
                self.id.map(FiliaalId::new).unwrap_or_default(),
                FiliaalNaam::new(naam),
                FiliaalGemeente::new(gemeente),
                self.omzet.map(FiliaalOmzet::new),
            )),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::FiliaalDraft;
    use crate::entity::{FiliaalGemeente, FiliaalId, FiliaalNaam, FiliaalOmzet};

    fn decimal(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn draft(naam: Option<&str>, gemeente: Option<&str>) -> FiliaalDraft {
        FiliaalDraft {
            id: None,
            naam: naam.map(ToString::to_string),
            gemeente: gemeente.map(ToString::to_string),
            omzet: None,
        }
    }

    #[test]
    fn valid_draft_becomes_filiaal() {
        let filiaal = FiliaalDraft {
            omzet: Some(decimal("12345.67")),
            ..draft(Some("Kortrijk"), Some("Kortrijk"))
        }
        .validate()
        .unwrap();

        assert_eq!(filiaal.id(), &FiliaalId::UNASSIGNED);
        assert_eq!(filiaal.naam(), &FiliaalNaam::new("Kortrijk"));
        assert_eq!(filiaal.gemeente(), &FiliaalGemeente::new("Kortrijk"));
        assert_eq!(
            filiaal.omzet().as_ref(),
            Some(&FiliaalOmzet::new(decimal("12345.67")))
        );
    }

    #[test]
    fn omzet_is_optional() {
        let filiaal = draft(Some("Brugge"), Some("Brugge")).validate().unwrap();
        assert!(filiaal.omzet().is_none());
    }

    #[test]
    fn blank_naam_reported_alone() {
        let errors = draft(Some(""), Some("Gent")).validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("naam"), Some("must not be blank"));
    }

    #[test]
    fn every_violated_field_is_reported() {
        let errors = draft(Some("  "), Some("")).validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("naam"), Some("must not be blank"));
        assert_eq!(errors.get("gemeente"), Some("must not be blank"));
    }

    #[test]
    fn absent_field_reports_last_rule() {
        let errors = draft(None, Some("Gent")).validate().unwrap_err();
        assert_eq!(errors.get("naam"), Some("must not be blank"));
    }

    #[test]
    fn negative_omzet_rejected() {
        let errors = FiliaalDraft {
            omzet: Some(decimal("-1")),
            ..draft(Some("Gent"), Some("Gent"))
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("omzet"), Some("must be greater than or equal to 0"));

        let zero = FiliaalDraft {
            omzet: Some(decimal("0")),
            ..draft(Some("Gent"), Some("Gent"))
        };
        assert!(zero.validate().is_ok());

        let tiny_loss = FiliaalDraft {
            omzet: Some(decimal("-0.000000000000000000000000000000001")),
            ..draft(Some("Gent"), Some("Gent"))
        };
        assert!(tiny_loss.validate().is_err());
    }

    #[test]
    fn body_id_is_carried_until_replaced() {
        let filiaal = FiliaalDraft {
            id: Some(99),
            ..draft(Some("X"), Some("Y"))
        }
        .validate()
        .unwrap()
        .with_id(FiliaalId::new(5));
        assert_eq!(filiaal.id(), &FiliaalId::new(5));
    }
}
