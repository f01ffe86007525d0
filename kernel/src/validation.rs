use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    // A later violation of the same field replaces the earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn collect<T>(target: &T, rules: &[Rule<T>]) -> Self {
        rules
            .iter()
            .filter(|rule| !rule.holds(target))
            .fold(Self::new(), |mut errors, rule| {
                errors.insert(rule.field, rule.message);
                errors
            })
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

pub struct Rule<T> {
    field: &'static str,
    message: &'static str,
    check: fn(&T) -> bool,
}

impl<T> Rule<T> {
    pub const fn new(field: &'static str, message: &'static str, check: fn(&T) -> bool) -> Self {
        Self {
            field,
            message,
            check,
        }
    }

    pub fn holds(&self, target: &T) -> bool {
        (self.check)(target)
    }
}

pub const NOT_NULL: &str = "must not be null";
pub const NOT_BLANK: &str = "must not be blank";
pub const POSITIVE_OR_ZERO: &str = "must be greater than or equal to 0";

pub fn is_not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod test {
    use super::{is_not_blank, FieldErrors, Rule};

    struct Pair {
        left: i32,
        right: i32,
    }

    fn left_positive(pair: &Pair) -> bool {
        pair.left > 0
    }

    fn left_even(pair: &Pair) -> bool {
        pair.left % 2 == 0
    }

    fn right_positive(pair: &Pair) -> bool {
        pair.right > 0
    }

    static RULES: [Rule<Pair>; 3] = [
        Rule::new("left", "positive", left_positive),
        Rule::new("left", "even", left_even),
        Rule::new("right", "positive", right_positive),
    ];

    #[test]
    fn collects_every_field() {
        let errors = FieldErrors::collect(&Pair { left: 2, right: -1 }, &RULES);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("right"), Some("positive"));

        let errors = FieldErrors::collect(&Pair { left: -2, right: 0 }, &RULES);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("left"), Some("positive"));
        assert_eq!(errors.get("right"), Some("positive"));
    }

    #[test]
    fn last_failing_rule_wins() {
        let errors = FieldErrors::collect(&Pair { left: -3, right: 1 }, &RULES);
        assert_eq!(errors.get("left"), Some("even"));
    }

    #[test]
    fn passing_target_has_no_errors() {
        assert!(FieldErrors::collect(&Pair { left: 4, right: 1 }, &RULES).is_empty());
    }

    #[test]
    fn blank() {
        assert!(!is_not_blank(None));
        assert!(!is_not_blank(Some("")));
        assert!(!is_not_blank(Some(" \t\n")));
        assert!(is_not_blank(Some(" Gent ")));
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.insert("naam", "must not be blank");
        errors.insert("gemeente", "must not be null");
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"gemeente":"must not be null","naam":"must not be blank"}"#
        );
        assert_eq!(
            errors.to_string(),
            "gemeente: must not be null, naam: must not be blank"
        );
    }
}
