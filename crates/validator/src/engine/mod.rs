//! The graph walker
//!
//! [`Validator::validate`] checks the root, then walks the object graph
//! depth-first: every attribute constraint, every nested validatable object
//! and every list element, at any list nesting depth. Violations are
//! collected; misuse aborts the walk.
//!
//! The validator holds no state. Each call builds its own traversal context,
//! so one `Validator` can be shared between threads and reused freely.

mod context;
mod traversal;

pub use context::PathContext;

use tracing::debug;

use crate::foundation::{Inspect, ValidationErrors, ValidatorError, ValueRef};
use traversal::Traversal;

/// Declared-type label used in diagnostics for a list whose items are all
/// null.
pub const UNKNOWN_TYPE: &str = "<unknown type>";

/// Validates object graphs.
///
/// # Examples
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// struct Wrapper {
///     x: i32,
/// }
///
/// impl Constrained for Wrapper {
///     fn attributes(&self) -> Vec<Attribute<'_>> {
///         vec![Attribute::new("x", &self.x).with_constraint(positive())]
///     }
/// }
///
/// impl Inspect for Wrapper {
///     fn inspect(&self) -> ValueRef<'_> {
///         ValueRef::Object(self)
///     }
/// }
///
/// let validator = Validator::new();
/// let errors = validator.validate(&Wrapper { x: -1 }).unwrap();
/// assert_eq!(errors.paths(), vec!["x"]);
///
/// let none: Option<Wrapper> = None;
/// assert_eq!(validator.validate(&none), Err(ValidatorError::NullRoot));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator;

impl Validator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates `root` and every object reachable from it.
    ///
    /// Returns the violations found (empty when the graph is valid), or a
    /// [`ValidatorError`] when the root is null, the root is not
    /// validatable, or a constraint is misused anywhere in the graph.
    pub fn validate<T: Inspect + ?Sized>(
        &self,
        root: &T,
    ) -> Result<ValidationErrors, ValidatorError> {
        let object = match root.inspect() {
            ValueRef::Null => return Err(ValidatorError::NullRoot),
            ValueRef::Object(object) => object,
            _ => {
                return Err(ValidatorError::NotConstrained {
                    type_name: T::declared_type(),
                });
            }
        };

        let root_type = object.type_name();
        debug!(root = root_type, "validation started");

        let mut traversal = Traversal::new();
        traversal
            .visit_object(object)
            .inspect_err(|error| debug!(root = root_type, %error, "validation aborted"))?;

        let errors = traversal.finish();
        debug!(
            root = root_type,
            violations = errors.len(),
            "validation finished"
        );
        Ok(errors)
    }
}

/// Validates `root` with a default [`Validator`].
pub fn validate<T: Inspect + ?Sized>(root: &T) -> Result<ValidationErrors, ValidatorError> {
    Validator::new().validate(root)
}

// ============================================================================
// TESTS
// ============================================================================
