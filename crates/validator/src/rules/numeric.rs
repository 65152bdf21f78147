//! Whole-number rules: `Positive`, `Negative`, `InRange`

use std::borrow::Cow;

use super::{Outcome, messages};
use crate::foundation::{Expected, ValidatorError, ValueRef};

fn integer(
    constraint: &'static str,
    value: &ValueRef<'_>,
    declared_type: &str,
) -> Result<i128, ValidatorError> {
    value
        .as_integer()
        .ok_or_else(|| ValidatorError::misuse(constraint, Expected::WholeNumber, declared_type))
}

pub(super) fn positive(value: &ValueRef<'_>, declared_type: &str) -> Result<Outcome, ValidatorError> {
    let n = integer("Positive", value, declared_type)?;
    Ok(Outcome::from_check(n > 0, || Cow::Borrowed(messages::POSITIVE)))
}

pub(super) fn negative(value: &ValueRef<'_>, declared_type: &str) -> Result<Outcome, ValidatorError> {
    let n = integer("Negative", value, declared_type)?;
    Ok(Outcome::from_check(n < 0, || Cow::Borrowed(messages::NEGATIVE)))
}

pub(super) fn in_range(
    min: i64,
    max: i64,
    value: &ValueRef<'_>,
    declared_type: &str,
) -> Result<Outcome, ValidatorError> {
    if min > max {
        return Err(ValidatorError::invalid_bounds("InRange", min, max));
    }
    let n = integer("InRange", value, declared_type)?;
    let passed = (i128::from(min)..=i128::from(max)).contains(&n);
    Ok(Outcome::from_check(passed, || {
        Cow::Owned(messages::in_range(min, max))
    }))
}
