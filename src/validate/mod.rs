//! Field validators that accumulate every violation.
//!
//! Each validator checks one field and reports through stillwater's
//! `Validation`, so a record with several bad fields reports all of them in
//! one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use patterncraft::validate::{Component, ComponentError};
//!
//! let ok = Component::new("WIDGET", "wood", 3).unwrap();
//! assert_eq!(ok.quantity(), 3);
//!
//! let Err(ComponentError::Invalid(violations)) = Component::new("w", "glass", -1) else {
//!     panic!("expected violations");
//! };
//! assert_eq!(violations.len(), 4);
//! ```

mod violations;

pub use violations::Violation;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Outcome of validating one field.
pub type Checked = Validation<(), NonEmptyVec<Violation>>;

/// Merge several checks, keeping every failure.
pub fn combine(checks: Vec<Checked>) -> Checked {
    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}

/// Collect the failures of a check into a plain list.
pub fn violations(checked: Checked) -> Vec<Violation> {
    match checked {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

/// Checks a single field value.
pub trait Validator<T: ?Sized> {
    fn validate(&self, field: &'static str, value: &T) -> Checked;
}

/// Named predicate for [`Text::must`].
#[derive(Clone, Copy)]
struct Predicate {
    name: &'static str,
    check: fn(&str) -> bool,
}

/// Length and content constraints on a string.
#[derive(Clone, Default)]
pub struct Text {
    min_len: Option<usize>,
    max_len: Option<usize>,
    predicate: Option<Predicate>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum length in characters.
    pub fn min_len(mut self, n: usize) -> Self {
        self.min_len = Some(n);
        self
    }

    /// Maximum length in characters.
    pub fn max_len(mut self, n: usize) -> Self {
        self.max_len = Some(n);
        self
    }

    /// Require `check` to hold; `name` appears in the violation.
    pub fn must(mut self, name: &'static str, check: fn(&str) -> bool) -> Self {
        self.predicate = Some(Predicate { name, check });
        self
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("min_len", &self.min_len)
            .field("max_len", &self.max_len)
            .field("predicate", &self.predicate.map(|p| p.name))
            .finish()
    }
}

impl Validator<str> for Text {
    fn validate(&self, field: &'static str, value: &str) -> Checked {
        let len = value.chars().count();
        let mut checks = Vec::new();

        if let Some(min) = self.min_len {
            if len < min {
                checks.push(Validation::fail(Violation::TooShort {
                    field,
                    value: value.to_string(),
                    min,
                }));
            }
        }

        if let Some(max) = self.max_len {
            if len > max {
                checks.push(Validation::fail(Violation::TooLong {
                    field,
                    value: value.to_string(),
                    max,
                }));
            }
        }

        if let Some(predicate) = self.predicate {
            if !(predicate.check)(value) {
                checks.push(Validation::fail(Violation::PredicateFailed {
                    field,
                    value: value.to_string(),
                    predicate: predicate.name,
                }));
            }
        }

        combine(checks)
    }
}

/// Value must be one of a fixed set.
#[derive(Clone, Debug)]
pub struct OneOf {
    options: BTreeSet<String>,
}

impl OneOf {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator<str> for OneOf {
    fn validate(&self, field: &'static str, value: &str) -> Checked {
        if self.options.contains(value) {
            Validation::success(())
        } else {
            Validation::fail(Violation::NotOneOf {
                field,
                value: value.to_string(),
                options: self.options.iter().cloned().collect(),
            })
        }
    }
}

/// Inclusive numeric bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Number<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Number<T> {
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T> Validator<T> for Number<T>
where
    T: PartialOrd + fmt::Display,
{
    fn validate(&self, field: &'static str, value: &T) -> Checked {
        let mut checks = Vec::new();

        if let Some(min) = &self.min {
            if value < min {
                checks.push(Validation::fail(Violation::BelowMinimum {
                    field,
                    value: value.to_string(),
                    min: min.to_string(),
                }));
            }
        }

        if let Some(max) = &self.max {
            if value > max {
                checks.push(Validation::fail(Violation::AboveMaximum {
                    field,
                    value: value.to_string(),
                    max: max.to_string(),
                }));
            }
        }

        combine(checks)
    }
}

/// True when `value` has at least one uppercase letter and every other
/// letter is uncased.
///
/// Lowercase and titlecase letters (`ǅ`) fail, and so does text with no
/// cased letter at all (`123`, `中文名`).
pub fn is_uppercase(value: &str) -> bool {
    value.chars().any(char::is_uppercase) && value.chars().all(upper_or_uncased)
}

fn upper_or_uncased(c: char) -> bool {
    c.is_uppercase()
        || (!c.is_lowercase()
            && c.to_lowercase().eq(std::iter::once(c))
            && c.to_uppercase().eq(std::iter::once(c)))
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComponentError {
    #[error("invalid component: {}", describe(.0))]
    Invalid(Vec<Violation>),
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Checked> for ComponentError {
    fn from(checked: Checked) -> Self {
        Self::Invalid(violations(checked))
    }
}

/// Rules a [`Component`] is held to.
#[derive(Debug, Clone)]
pub struct ComponentRules {
    pub name: Text,
    pub kind: OneOf,
    pub quantity: Number<i64>,
}

impl Default for ComponentRules {
    fn default() -> Self {
        Self {
            name: Text::new()
                .min_len(3)
                .max_len(10)
                .must("is_uppercase", is_uppercase),
            kind: OneOf::new(["wood", "metal", "plastic"]),
            quantity: Number::new().min(0),
        }
    }
}

/// A part whose fields are checked on construction and on every update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    name: String,
    kind: String,
    quantity: i64,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        quantity: i64,
    ) -> Result<Self, ComponentError> {
        let name = name.into();
        let kind = kind.into();
        let rules = ComponentRules::default();

        let checked = combine(vec![
            rules.name.validate("name", name.as_str()),
            rules.kind.validate("kind", kind.as_str()),
            rules.quantity.validate("quantity", &quantity),
        ]);
        if checked.is_failure() {
            return Err(checked.into());
        }

        Ok(Self {
            name,
            kind,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ComponentError> {
        let name = name.into();
        let checked = ComponentRules::default().name.validate("name", name.as_str());
        if checked.is_failure() {
            return Err(checked.into());
        }
        self.name = name;
        Ok(())
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) -> Result<(), ComponentError> {
        let kind = kind.into();
        let checked = ComponentRules::default().kind.validate("kind", kind.as_str());
        if checked.is_failure() {
            return Err(checked.into());
        }
        self.kind = kind;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), ComponentError> {
        let checked = ComponentRules::default()
            .quantity
            .validate("quantity", &quantity);
        if checked.is_failure() {
            return Err(checked.into());
        }
        self.quantity = quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_value_within_bounds() {
        let text = Text::new().min_len(2).max_len(4);
        assert!(text.validate("code", "abc").is_success());
    }

    #[test]
    fn text_accumulates_all_violations() {
        let text = Text::new().min_len(3).must("is_uppercase", is_uppercase);
        let found = violations(text.validate("name", "ab"));

        assert_eq!(found.len(), 2);
        assert!(found
            .iter()
            .any(|v| matches!(v, Violation::TooShort { min: 3, .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, Violation::PredicateFailed { .. })));
    }

    #[test]
    fn text_counts_characters_not_bytes() {
        let text = Text::new().max_len(3);
        assert!(text.validate("name", "ÄÖÜ").is_success());
    }

    #[test]
    fn one_of_rejects_unknown_value() {
        let kinds = OneOf::new(["wood", "metal"]);
        assert!(kinds.validate("kind", "wood").is_success());

        let found = violations(kinds.validate("kind", "glass"));
        assert_eq!(
            found,
            vec![Violation::NotOneOf {
                field: "kind",
                value: "glass".to_string(),
                options: vec!["metal".to_string(), "wood".to_string()],
            }]
        );
    }

    #[test]
    fn number_checks_both_bounds() {
        let range = Number::new().min(0.5).max(1.5);

        assert!(range.validate("ratio", &1.0).is_success());
        assert!(matches!(
            violations(range.validate("ratio", &0.1))[..],
            [Violation::BelowMinimum { .. }]
        ));
        assert!(matches!(
            violations(range.validate("ratio", &2.0))[..],
            [Violation::AboveMaximum { .. }]
        ));
    }

    #[test]
    fn unconstrained_validators_pass() {
        assert!(Text::new().validate("any", "").is_success());
        assert!(Number::<i64>::new().validate("any", &-5).is_success());
    }

    #[test]
    fn is_uppercase_needs_a_cased_letter() {
        assert!(is_uppercase("ABC"));
        assert!(is_uppercase("A-1"));
        assert!(!is_uppercase("Abc"));
        assert!(!is_uppercase("123"));
        assert!(!is_uppercase(""));
    }

    #[test]
    fn is_uppercase_rejects_uncased_and_titlecase_letters() {
        assert!(!is_uppercase("中文名"));
        assert!(!is_uppercase("ǅAB"));
        assert!(!is_uppercase("Straße"));
        assert!(is_uppercase("ÄÖÜ 中"));
    }

    #[test]
    fn component_accepts_valid_fields() {
        let component = Component::new("BOLT", "metal", 10).unwrap();

        assert_eq!(component.name(), "BOLT");
        assert_eq!(component.kind(), "metal");
        assert_eq!(component.quantity(), 10);
    }

    #[test]
    fn component_reports_every_bad_field() {
        let err = Component::new("x", "glass", -1).unwrap_err();
        let ComponentError::Invalid(found) = err;

        let fields: BTreeSet<_> = found.iter().map(Violation::field).collect();
        assert_eq!(fields, BTreeSet::from(["kind", "name", "quantity"]));
    }

    #[test]
    fn component_name_without_uppercase_letters_is_rejected() {
        for name in ["中文名", "ǅAB"] {
            let ComponentError::Invalid(found) = Component::new(name, "wood", 1).unwrap_err();

            assert_eq!(found.len(), 1, "{name}");
            assert!(matches!(
                &found[0],
                Violation::PredicateFailed { field: "name", predicate: "is_uppercase", .. }
            ));
        }
    }

    #[test]
    fn setters_validate_and_keep_old_value_on_failure() {
        let mut component = Component::new("NUT", "wood", 1).unwrap();

        assert!(component.set_quantity(-3).is_err());
        assert_eq!(component.quantity(), 1);

        component.set_quantity(5).unwrap();
        assert_eq!(component.quantity(), 5);

        assert!(component.set_kind("stone").is_err());
        assert!(component.set_name("TOOLONGNAMEHERE").is_err());
        assert_eq!(component.name(), "NUT");
    }

    #[test]
    fn error_message_lists_violations() {
        let err = Component::new("NUT", "wood", -2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid component: quantity: expected -2 to be at least 0"
        );
    }
}
