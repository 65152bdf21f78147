//! # warden-validator
//!
//! Declarative validation of in-memory object graphs.
//!
//! A type opts in by describing its fields and their constraints (by hand or
//! with [`constrained!`]). [`validate`] then walks the whole graph: nested
//! validatable objects, lists, lists of lists. It returns every violation
//! with the path where it happened and the value that failed.
//!
//! ## Quick Start
//!
//! ```rust
//! use warden_validator::prelude::*;
//! use warden_validator::constrained;
//!
//! struct GuestForm {
//!     first_name: Option<String>,
//!     age: i32,
//! }
//!
//! constrained! {
//!     GuestForm {
//!         first_name: [not_null(), not_blank()],
//!         age: [in_range(0, 200)],
//!     }
//! }
//!
//! let guest = GuestForm { first_name: Some("  ".into()), age: 201 };
//! let errors = validate(&guest).unwrap();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.paths(), vec!["first_name", "age"]);
//! ```
//!
//! ## Data violations vs. misuse
//!
//! Values that break a constraint are reported inside `Ok(ValidationErrors)`.
//! A constraint attached to a value it cannot judge (`Positive` on a string,
//! `Size(4, -1)`) is a programming error: the call returns
//! `Err(ValidatorError)` and no partial result.
//!
//! ## Constraints
//!
//! [`not_null`], [`positive`], [`negative`], [`not_blank`], [`not_empty`],
//! [`size`], [`in_range`], [`any_of`].
//!
//! ## Features
//!
//! - `macros` (default): the [`constrained!`] macro
//! - `serde` (default): `Serialize` for values and violations, JSON helpers

pub mod constraint;
pub mod engine;
pub mod foundation;
#[cfg(feature = "macros")]
mod macros;
pub mod prelude;
pub mod rules;

pub use constraint::{
    Constraint, any_of, in_range, negative, not_blank, not_empty, not_null, positive, size,
};
pub use engine::{PathContext, UNKNOWN_TYPE, Validator, validate};
pub use foundation::{
    Attribute, Constrained, Expected, Inspect, ValidationError, ValidationErrors,
    ValidationResult, ValidatorError, Value, ValueRef,
};
pub use rules::{Outcome, evaluate};
