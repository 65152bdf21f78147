//! Core validation types and traits
//!
//! This module contains the building blocks the rule evaluator and the graph
//! walker share:
//!
//! - **Traits**: [`Constrained`] (the validatable capability) and [`Inspect`]
//!   (how a Rust value presents itself to the walker)
//! - **Descriptors**: [`Attribute`], one per declared field
//! - **Values**: [`ValueRef`] (borrowed, traversal-time view) and [`Value`]
//!   (owned snapshot stored inside violations)
//! - **Errors**: [`ValidationError`] / [`ValidationErrors`] for data
//!   violations, [`ValidatorError`] for fatal misuse
//!
//! # Architecture
//!
//! ## 1. Explicit descriptor tables
//!
//! A validatable type lists its attributes and their constraints itself,
//! instead of being discovered through reflection:
//!
//! ```rust
//! use warden_validator::prelude::*;
//!
//! struct GuestForm {
//!     first_name: Option<String>,
//!     age: i32,
//! }
//!
//! impl Constrained for GuestForm {
//!     fn attributes(&self) -> Vec<Attribute<'_>> {
//!         vec![
//!             Attribute::new("first_name", &self.first_name)
//!                 .with_constraints(vec![not_null(), not_blank()]),
//!             Attribute::new("age", &self.age).with_constraint(in_range(0, 200)),
//!         ]
//!     }
//! }
//!
//! impl Inspect for GuestForm {
//!     fn inspect(&self) -> ValueRef<'_> {
//!         ValueRef::Object(self)
//!     }
//! }
//!
//! let guest = GuestForm { first_name: None, age: 19 };
//! let errors = validate(&guest).unwrap();
//! assert_eq!(errors.len(), 1);
//! ```
//!
//! ## 2. Two error taxonomies
//!
//! Bad data is collected as [`ValidationError`]s; bad constraint usage
//! aborts the whole call with a [`ValidatorError`].

// Module declarations
pub mod attribute;
pub mod error;
pub mod traits;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use attribute::Attribute;
pub use error::{Expected, ValidationError, ValidationErrors, ValidatorError};
pub use traits::{Constrained, Inspect};
pub use value::{Value, ValueRef};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of a complete graph validation.
///
/// `Ok` carries the (possibly empty) set of violations, `Err` means the
/// validation could not be performed at all.
pub type ValidationResult = Result<ValidationErrors, ValidatorError>;
