//! Depth-first walk over one object graph
//!
//! A [`Traversal`] is created per validation call and owns everything that
//! changes while the walk runs: the path stack, the accumulated violations
//! and the current object depth.

use std::borrow::Cow;

use tracing::trace;

use super::UNKNOWN_TYPE;
use super::context::PathContext;
use crate::constraint::Constraint;
use crate::foundation::{
    Attribute, Constrained, ValidationError, ValidationErrors, ValidatorError, ValueRef,
};
use crate::rules::{Outcome, evaluate};

#[derive(Debug, Default)]
pub(crate) struct Traversal {
    path: PathContext,
    errors: ValidationErrors,
    depth: usize,
}

impl Traversal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn finish(self) -> ValidationErrors {
        self.errors
    }

    pub(crate) fn visit_object(&mut self, object: &dyn Constrained) -> Result<(), ValidatorError> {
        self.depth += 1;
        let result = object
            .attributes()
            .iter()
            .try_for_each(|attribute| self.visit_attribute(attribute));
        self.depth -= 1;
        result
    }

    fn visit_attribute(&mut self, attribute: &Attribute<'_>) -> Result<(), ValidatorError> {
        let value = attribute.value();
        for constraint in attribute.constraints() {
            self.check(constraint, value, attribute.type_name(), || {
                attribute.name().to_owned()
            })?;
        }

        match value {
            ValueRef::Object(nested) => self.descend(format!("{}.", attribute.name()), *nested),
            ValueRef::List {
                element_type,
                items,
            } => self.visit_list(
                attribute.element_constraints(),
                items,
                element_type,
                attribute.name(),
            ),
            _ => Ok(()),
        }
    }

    /// Checks element constraints of one list, then recurses into object
    /// and list elements.
    ///
    /// `levels[0]` applies to the items of this list; the rest is handed to
    /// nested lists.
    fn visit_list(
        &mut self,
        levels: &[Vec<Constraint>],
        items: &[ValueRef<'_>],
        element_type: &str,
        prefix: &str,
    ) -> Result<(), ValidatorError> {
        if items.is_empty() {
            return Ok(());
        }

        let constraints = levels.first().map_or(&[][..], Vec::as_slice);
        let deeper = levels.get(1..).unwrap_or_default();

        let all_null = items.iter().all(ValueRef::is_null);
        let declared_type = if all_null { UNKNOWN_TYPE } else { element_type };

        for constraint in constraints {
            for (index, item) in items.iter().enumerate() {
                self.check(constraint, item, declared_type, || format!("{prefix}[{index}]"))?;
            }
        }

        if all_null {
            return Ok(());
        }

        for (index, item) in items.iter().enumerate() {
            match item {
                ValueRef::Object(nested) => {
                    self.descend(format!("{prefix}[{index}]."), *nested)?;
                }
                ValueRef::List {
                    element_type,
                    items,
                } => {
                    self.visit_list(deeper, items, element_type, &format!("{prefix}[{index}]"))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn descend(&mut self, segment: String, object: &dyn Constrained) -> Result<(), ValidatorError> {
        self.path.push(segment);
        let result = self.visit_object(object);
        self.path.pop();
        result
    }

    fn check(
        &mut self,
        constraint: &Constraint,
        value: &ValueRef<'_>,
        declared_type: &str,
        segment: impl FnOnce() -> String,
    ) -> Result<(), ValidatorError> {
        if let Outcome::Violated(message) = evaluate(constraint, value, declared_type)? {
            self.path.push(segment());
            self.record(message, value);
            self.path.pop();
        }
        Ok(())
    }

    fn record(&mut self, message: Cow<'static, str>, value: &ValueRef<'_>) {
        let error = ValidationError::new(message, self.path.render(), value.to_value());
        trace!(
            path = %error.path,
            message = %error.message,
            depth = self.depth,
            "constraint violated"
        );
        self.errors.insert(error);
    }
}
