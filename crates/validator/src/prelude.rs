//! Prelude module for convenient imports.
//!
//! Provides a single `use warden_validator::prelude::*;` import that brings
//! in the traits needed to declare validatable types, the constraint
//! factories and the validation entry points.
//!
//! # Examples
//!
//! ```rust
//! use warden_validator::prelude::*;
//!
//! let rules = vec![not_null(), size(1, 5)];
//! assert_eq!(rules[1], Constraint::Size { min: 1, max: 5 });
//! ```

// ============================================================================
// FOUNDATION: Traits, descriptors, values, errors
// ============================================================================

pub use crate::foundation::{
    Attribute, Constrained, Expected, Inspect, ValidationError, ValidationErrors,
    ValidationResult, ValidatorError, Value, ValueRef,
};

// ============================================================================
// CONSTRAINTS
// ============================================================================

pub use crate::constraint::{
    Constraint, any_of, in_range, negative, not_blank, not_empty, not_null, positive, size,
};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::engine::{Validator, validate};
pub use crate::rules::Outcome;
