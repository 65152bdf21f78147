//! Attribute descriptors
//!
//! An [`Attribute`] is one row of a validatable type's descriptor table: the
//! field name, a view of its current value, the declared type, the
//! constraints attached to the field itself and the constraints attached to
//! each nesting level of its list elements.

use std::borrow::Cow;
use std::fmt;

use crate::constraint::Constraint;
use crate::foundation::traits::Inspect;
use crate::foundation::value::{Value, ValueRef};

/// One declared field of a validatable type.
///
/// # Examples
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// let guests = vec![Some("Ann".to_owned()), None];
/// let attribute = Attribute::new("guests", &guests)
///     .with_constraints(vec![not_null(), size(1, 5)])
///     .each(vec![not_null()]);
///
/// assert_eq!(attribute.name(), "guests");
/// assert_eq!(attribute.constraints().len(), 2);
/// assert_eq!(attribute.element_constraints().len(), 1);
/// ```
#[derive(Clone)]
pub struct Attribute<'a> {
    name: Cow<'static, str>,
    value: ValueRef<'a>,
    type_name: &'static str,
    constraints: Vec<Constraint>,
    element_constraints: Vec<Vec<Constraint>>,
}

impl<'a> Attribute<'a> {
    /// Describes a field by name and reference to its value.
    ///
    /// The declared type is taken from the value's [`Inspect`] impl, so an
    /// `Option<String>` field is reported as `String`.
    pub fn new<T: Inspect + ?Sized>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Self {
        Self::from_parts(name, value.inspect(), T::declared_type())
    }

    /// Describes a field from an already built view.
    pub fn from_parts(
        name: impl Into<Cow<'static, str>>,
        value: ValueRef<'a>,
        type_name: &'static str,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            type_name,
            constraints: Vec::new(),
            element_constraints: Vec::new(),
        }
    }

    /// Attaches one constraint to the field itself.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Attaches several constraints to the field itself, in order.
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Adds the next element-level constraint set.
    ///
    /// The first call applies to the elements of the list, the second to the
    /// elements of those elements, and so on.
    pub fn each(mut self, constraints: Vec<Constraint>) -> Self {
        self.element_constraints.push(constraints);
        self
    }

    /// Field name, used as the path segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value of the field.
    pub const fn value(&self) -> &ValueRef<'a> {
        &self.value
    }

    /// Declared type of the field.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Constraints on the field itself, in declaration order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Element-level constraint sets, outermost nesting level first.
    pub fn element_constraints(&self) -> &[Vec<Constraint>] {
        &self.element_constraints
    }

    pub(crate) fn snapshot(&self) -> (Cow<'static, str>, Value) {
        (self.name.clone(), self.value.to_value())
    }
}

impl fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("value", &self.value)
            .field("constraints", &self.constraints)
            .field("element_constraints", &self.element_constraints)
            .finish()
    }
}
