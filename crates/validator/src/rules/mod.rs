//! The rule evaluator
//!
//! [`evaluate`] judges one [`Constraint`] against one candidate value. It is
//! a leaf: it knows nothing about paths, objects or lists, and it never
//! mutates the value.
//!
//! Every constraint except `NotNull` treats an absent value as satisfied.
//! Applying a constraint to a value kind it cannot judge, or declaring
//! `min > max`, is a [`ValidatorError`] rather than a violation.
//!
//! # Examples
//!
//! ```rust
//! use warden_validator::{Outcome, ValueRef, evaluate, not_blank, positive};
//!
//! let outcome = evaluate(&not_blank(), &ValueRef::Str("  "), "String").unwrap();
//! assert_eq!(outcome, Outcome::Violated("Must not be blank".into()));
//!
//! // Null is vacuously valid
//! assert!(evaluate(&not_blank(), &ValueRef::Null, "String").unwrap().is_satisfied());
//!
//! // Misuse aborts
//! assert!(evaluate(&positive(), &ValueRef::Str("1"), "String").is_err());
//! ```

mod nullable;
mod numeric;
mod size;
mod string;

use std::borrow::Cow;

use crate::constraint::Constraint;
use crate::foundation::{ValidatorError, ValueRef};

/// Fixed violation messages.
pub mod messages {
    /// `NotNull` violation.
    pub const NOT_NULL: &str = "Must not be null";
    /// `Positive` violation.
    pub const POSITIVE: &str = "Must be positive (more than 0)";
    /// `Negative` violation.
    pub const NEGATIVE: &str = "Must be negative (less than 0)";
    /// `NotBlank` violation.
    pub const NOT_BLANK: &str = "Must not be blank";
    /// `NotEmpty` violation.
    pub const NOT_EMPTY: &str = "Must not be empty";

    /// `Size` violation.
    pub fn size(min: i64, max: i64) -> String {
        format!("Size must be in range between {min} and {max}")
    }

    /// `InRange` violation.
    pub fn in_range(min: i64, max: i64) -> String {
        format!("Value must be in range between {min} and {max}")
    }

    /// `AnyOf` violation; values are quoted in declaration order.
    pub fn any_of<S: AsRef<str>>(values: &[S]) -> String {
        let quoted: Vec<String> = values
            .iter()
            .map(|value| format!("'{}'", value.as_ref()))
            .collect();
        format!("Must be one of {}", quoted.join(", "))
    }
}

/// Result of judging one value against one constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value meets the constraint.
    Satisfied,
    /// The value breaks the constraint; carries the violation message.
    Violated(Cow<'static, str>),
}

impl Outcome {
    /// Returns true for [`Outcome::Satisfied`].
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }

    /// The violation message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Satisfied => None,
            Self::Violated(message) => Some(message),
        }
    }

    pub(crate) fn from_check(passed: bool, message: impl FnOnce() -> Cow<'static, str>) -> Self {
        if passed {
            Self::Satisfied
        } else {
            Self::Violated(message())
        }
    }
}

/// Judges `value` against `constraint`.
///
/// `declared_type` is only used to describe the value in misuse
/// diagnostics.
pub fn evaluate(
    constraint: &Constraint,
    value: &ValueRef<'_>,
    declared_type: &str,
) -> Result<Outcome, ValidatorError> {
    match constraint {
        Constraint::NotNull => Ok(nullable::not_null(value)),
        _ if value.is_null() => Ok(Outcome::Satisfied),
        Constraint::Positive => numeric::positive(value, declared_type),
        Constraint::Negative => numeric::negative(value, declared_type),
        Constraint::InRange { min, max } => numeric::in_range(*min, *max, value, declared_type),
        Constraint::NotBlank => string::not_blank(value, declared_type),
        Constraint::AnyOf { values } => string::any_of(values, value, declared_type),
        Constraint::NotEmpty => size::not_empty(value, declared_type),
        Constraint::Size { min, max } => size::size(*min, *max, value, declared_type),
    }
}

// ============================================================================
// TESTS
// ============================================================================
