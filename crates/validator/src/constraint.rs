//! The constraint catalog
//!
//! A [`Constraint`] is one rule kind plus its parameters. The set of kinds is
//! closed; [`rules::evaluate`](crate::rules::evaluate) dispatches over it with
//! an exhaustive `match`.

use std::borrow::Cow;
use std::fmt;

/// A declared validation rule.
///
/// Parameters are fixed at construction and never change afterwards.
/// Bounds of [`Constraint::Size`] and [`Constraint::InRange`] are not checked
/// here; `min > max` is reported as misuse when the constraint is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The value must be present.
    NotNull,
    /// Whole number strictly greater than zero.
    Positive,
    /// Whole number strictly less than zero.
    Negative,
    /// String that is not empty after trimming whitespace.
    NotBlank,
    /// String, list, set or map with at least one element.
    NotEmpty,
    /// String, list, set or map whose size lies in `[min, max]`.
    Size {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// Whole number in `[min, max]`.
    InRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// String equal to one of `values`.
    AnyOf {
        /// Allowed values, in declaration order.
        values: Vec<Cow<'static, str>>,
    },
}

impl Constraint {
    /// Name of the rule kind as it appears in misuse diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NotNull => "NotNull",
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::NotBlank => "NotBlank",
            Self::NotEmpty => "NotEmpty",
            Self::Size { .. } => "Size",
            Self::InRange { .. } => "InRange",
            Self::AnyOf { .. } => "AnyOf",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size { min, max } | Self::InRange { min, max } => {
                write!(f, "{}(min = {min}, max = {max})", self.name())
            }
            Self::AnyOf { values } => {
                write!(f, "AnyOf(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value:?}")?;
                }
                f.write_str(")")
            }
            _ => f.write_str(self.name()),
        }
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// [`Constraint::NotNull`].
#[must_use]
pub const fn not_null() -> Constraint {
    Constraint::NotNull
}

/// [`Constraint::Positive`].
#[must_use]
pub const fn positive() -> Constraint {
    Constraint::Positive
}

/// [`Constraint::Negative`].
#[must_use]
pub const fn negative() -> Constraint {
    Constraint::Negative
}

/// [`Constraint::NotBlank`].
#[must_use]
pub const fn not_blank() -> Constraint {
    Constraint::NotBlank
}

/// [`Constraint::NotEmpty`].
#[must_use]
pub const fn not_empty() -> Constraint {
    Constraint::NotEmpty
}

/// [`Constraint::Size`] with inclusive bounds.
#[must_use]
pub const fn size(min: i64, max: i64) -> Constraint {
    Constraint::Size { min, max }
}

/// [`Constraint::InRange`] with inclusive bounds.
#[must_use]
pub const fn in_range(min: i64, max: i64) -> Constraint {
    Constraint::InRange { min, max }
}

/// [`Constraint::AnyOf`].
///
/// ```rust
/// use warden_validator::any_of;
///
/// let rule = any_of(["House", "Hostel"]);
/// assert_eq!(rule.to_string(), r#"AnyOf("House", "Hostel")"#);
/// ```
#[must_use]
pub fn any_of<I>(values: I) -> Constraint
where
    I: IntoIterator,
    I::Item: Into<Cow<'static, str>>,
{
    Constraint::AnyOf {
        values: values.into_iter().map(Into::into).collect(),
    }
}
