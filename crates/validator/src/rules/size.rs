//! Size rules: `NotEmpty`, `Size`
//!
//! Strings are measured in characters, collections in elements.

use std::borrow::Cow;

use super::{Outcome, messages};
use crate::foundation::{Expected, ValidatorError, ValueRef};

fn measure(
    constraint: &'static str,
    value: &ValueRef<'_>,
    declared_type: &str,
) -> Result<usize, ValidatorError> {
    value
        .size()
        .ok_or_else(|| ValidatorError::misuse(constraint, Expected::Sized, declared_type))
}

pub(super) fn not_empty(value: &ValueRef<'_>, declared_type: &str) -> Result<Outcome, ValidatorError> {
    let len = measure("NotEmpty", value, declared_type)?;
    Ok(Outcome::from_check(len > 0, || Cow::Borrowed(messages::NOT_EMPTY)))
}

pub(super) fn size(
    min: i64,
    max: i64,
    value: &ValueRef<'_>,
    declared_type: &str,
) -> Result<Outcome, ValidatorError> {
    if min > max {
        return Err(ValidatorError::invalid_bounds("Size", min, max));
    }
    let len = measure("Size", value, declared_type)?;
    let len = i128::try_from(len).unwrap_or(i128::MAX);
    let passed = (i128::from(min)..=i128::from(max)).contains(&len);
    Ok(Outcome::from_check(passed, || {
        Cow::Owned(messages::size(min, max))
    }))
}
