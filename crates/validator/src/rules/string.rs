//! String rules: `NotBlank`, `AnyOf`

use std::borrow::Cow;

use super::{Outcome, messages};
use crate::foundation::{Expected, ValidatorError, ValueRef};

fn text<'v>(
    constraint: &'static str,
    value: &ValueRef<'v>,
    declared_type: &str,
) -> Result<&'v str, ValidatorError> {
    value
        .as_str()
        .ok_or_else(|| ValidatorError::misuse(constraint, Expected::String, declared_type))
}

pub(super) fn not_blank(value: &ValueRef<'_>, declared_type: &str) -> Result<Outcome, ValidatorError> {
    let s = text("NotBlank", value, declared_type)?;
    Ok(Outcome::from_check(!s.trim().is_empty(), || {
        Cow::Borrowed(messages::NOT_BLANK)
    }))
}

pub(super) fn any_of(
    values: &[Cow<'static, str>],
    value: &ValueRef<'_>,
    declared_type: &str,
) -> Result<Outcome, ValidatorError> {
    let s = text("AnyOf", value, declared_type)?;
    let passed = values.iter().any(|allowed| allowed == s);
    Ok(Outcome::from_check(passed, || {
        Cow::Owned(messages::any_of(values))
    }))
}
