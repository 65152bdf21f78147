//! Presence

use std::borrow::Cow;

use super::{Outcome, messages};
use crate::foundation::ValueRef;

pub(super) fn not_null(value: &ValueRef<'_>) -> Outcome {
    Outcome::from_check(!value.is_null(), || Cow::Borrowed(messages::NOT_NULL))
}
