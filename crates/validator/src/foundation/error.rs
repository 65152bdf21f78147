//! Error types for validation
//!
//! Two taxonomies live here:
//!
//! - [`ValidationError`] / [`ValidationErrors`]: the data violated a
//!   constraint. These are collected and returned as a value.
//! - [`ValidatorError`]: the validation could not be performed at all (null
//!   root, unconstrained root, a constraint attached to a type it cannot
//!   judge). These abort the call.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexSet;

use crate::foundation::value::{Value, short_type_name};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single violation: what failed, where, and the value that failed.
///
/// Equality covers all three fields, so a result set never holds two
/// violations that agree on message, path and value.
///
/// # Examples
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// let error = ValidationError::new("Must not be null", "guests[0]", Value::Null);
/// assert_eq!(error.path(), "guests[0]");
/// assert_eq!(error.to_string(), "[guests[0]] Must not be null (value: null)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    /// Human-readable message of the violated constraint.
    pub message: Cow<'static, str>,

    /// Dotted/indexed location of the value inside the root object.
    ///
    /// Examples: "age", "guest.firstName", "list[1][2]"
    pub path: String,

    /// Snapshot of the offending value.
    #[cfg_attr(feature = "serde", serde(rename = "value"))]
    pub failed_value: Value,
}

impl ValidationError {
    /// Creates a violation.
    pub fn new(
        message: impl Into<Cow<'static, str>>,
        path: impl Into<String>,
        failed_value: Value,
    ) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
            failed_value,
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Location inside the root object.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The value that failed.
    #[must_use]
    pub const fn failed_value(&self) -> &Value {
        &self.failed_value
    }

    /// Converts the violation to JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message,
            "path": self.path,
            "value": self.failed_value.to_json(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (value: {})",
            self.path, self.message, self.failed_value
        )
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The set of violations produced by one validation call.
///
/// Insertion-ordered and duplicate-free: inserting a violation equal to one
/// already present is a no-op. Iteration yields violations in the order the
/// walker found them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ValidationErrors {
    errors: IndexSet<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: IndexSet::new(),
        }
    }

    /// Adds a violation. Returns `false` if an equal one was already present.
    pub fn insert(&mut self, error: ValidationError) -> bool {
        self.errors.insert(error)
    }

    /// Returns the number of distinct violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Iterates violations in discovery order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns true if an equal violation is present.
    #[must_use]
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.errors.contains(error)
    }

    /// All violations reported at exactly `path`.
    pub fn at_path<'s>(&'s self, path: &'s str) -> impl Iterator<Item = &'s ValidationError> + 's {
        self.errors.iter().filter(move |error| error.path == path)
    }

    /// Paths of all violations, in discovery order. A path appears once per
    /// violation, so it may repeat.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::path).collect()
    }

    /// Converts to a Result: `Ok` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// Converts the collection to a JSON array.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.errors
                .iter()
                .map(ValidationError::to_json_value)
                .collect(),
        )
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = indexmap::set::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = indexmap::set::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// VALIDATOR ERROR
// ============================================================================

/// The kind of value a constraint is able to judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// Any whole-number type.
    WholeNumber,
    /// Any string type.
    String,
    /// List, set, map or string.
    Sized,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WholeNumber => "whole number",
            Self::String => "string",
            Self::Sized => "list, set, map or string",
        })
    }
}

/// Fatal error: the validation could not be performed.
///
/// Unlike [`ValidationErrors`], no partial result is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// The root object was absent.
    #[error("cannot validate a null object")]
    NullRoot,

    /// The root object lacks the validatable capability.
    #[error("given object is not constrained")]
    NotConstrained {
        /// Declared type of the root.
        type_name: &'static str,
    },

    /// A constraint was attached to a value kind it cannot judge.
    #[error("incorrect use of {constraint}: expected {expected}, actual: {actual}")]
    Misuse {
        /// Name of the misused constraint.
        constraint: &'static str,
        /// What the constraint accepts.
        expected: Expected,
        /// Declared type of the attribute or element.
        actual: String,
    },

    /// A `Size` or `InRange` constraint declared `min > max`.
    #[error(
        "incorrect use of {constraint}: min parameter must be <= max parameter (min = {min}, max = {max})"
    )]
    InvalidBounds {
        /// Name of the misused constraint.
        constraint: &'static str,
        /// Declared lower bound.
        min: i64,
        /// Declared upper bound.
        max: i64,
    },
}

impl ValidatorError {
    /// Creates a [`ValidatorError::Misuse`], shortening the declared type.
    pub fn misuse(constraint: &'static str, expected: Expected, declared_type: &str) -> Self {
        Self::Misuse {
            constraint,
            expected,
            actual: short_type_name(declared_type),
        }
    }

    /// Creates a [`ValidatorError::InvalidBounds`].
    pub const fn invalid_bounds(constraint: &'static str, min: i64, max: i64) -> Self {
        Self::InvalidBounds {
            constraint,
            min,
            max,
        }
    }

    /// Returns true for errors caused by how constraints were declared.
    #[must_use]
    pub const fn is_misuse(&self) -> bool {
        matches!(self, Self::Misuse { .. } | Self::InvalidBounds { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
