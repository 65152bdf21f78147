use pretty_assertions::assert_eq;
use rstest::rstest;
use warden_validator::constrained;
use warden_validator::prelude::*;

use crate::forms::{GuestForm, Probe};

#[rstest]
#[case::positive_on_string(Probe::new("abc".to_owned(), positive()), "incorrect use of Positive: expected whole number, actual: String")]
#[case::in_range_on_string(Probe::new("x".to_owned(), in_range(0, 10)), "incorrect use of InRange: expected whole number, actual: String")]
#[case::positive_on_list(Probe::new(vec!["a".to_owned()], positive()), "incorrect use of Positive: expected whole number, actual: Vec<String>")]
#[case::negative_on_optional_string(Probe::new(Some("x".to_owned()), negative()), "incorrect use of Negative: expected whole number, actual: String")]
fn test_numeric_rules_reject_other_kinds<T: Inspect>(
    #[case] probe: Probe<T>,
    #[case] expected: &str,
) {
    let err = validate(&probe).unwrap_err();
    assert!(err.is_misuse());
    assert_eq!(err.to_string(), expected);
}

#[rstest]
#[case::float(1.5f64, "f64")]
#[case::float32(2.0f32, "f32")]
fn test_floats_are_not_whole_numbers<T: Inspect>(#[case] value: T, #[case] actual: &str) {
    let err = validate(&Probe::new(value, negative())).unwrap_err();
    assert_eq!(
        err,
        ValidatorError::Misuse {
            constraint: "Negative",
            expected: Expected::WholeNumber,
            actual: actual.to_owned(),
        }
    );
}

#[test]
fn test_any_of_on_integer_is_fatal() {
    let err = validate(&Probe::new(7i32, any_of(["A", "B"]))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "incorrect use of AnyOf: expected string, actual: i32"
    );
}

#[test]
fn test_not_blank_on_integer_is_fatal() {
    let err = validate(&Probe::new(5u16, not_blank())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "incorrect use of NotBlank: expected string, actual: u16"
    );
}

#[rstest]
#[case::not_empty_on_bool(Probe::new(true, not_empty()), "incorrect use of NotEmpty: expected list, set, map or string, actual: bool")]
#[case::size_on_integer(Probe::new(3i32, size(0, 3)), "incorrect use of Size: expected list, set, map or string, actual: i32")]
#[case::size_on_char(Probe::new('c', size(0, 3)), "incorrect use of Size: expected list, set, map or string, actual: char")]
fn test_size_rules_reject_unsized_kinds<T: Inspect>(
    #[case] probe: Probe<T>,
    #[case] expected: &str,
) {
    assert_eq!(validate(&probe).unwrap_err().to_string(), expected);
}

#[rstest]
#[case::fits(vec!["a".to_owned()])]
#[case::empty(Vec::new())]
#[case::huge(vec!["a".to_owned(); 100])]
fn test_inverted_size_bounds_ignore_the_data(#[case] value: Vec<String>) {
    let err = validate(&Probe::new(value, size(4, -1))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "incorrect use of Size: min parameter must be <= max parameter (min = 4, max = -1)"
    );
}

#[test]
fn test_inverted_range_bounds_are_fatal_on_wrong_kind_too() {
    let err = validate(&Probe::new("text".to_owned(), in_range(10, 0))).unwrap_err();
    assert_eq!(err, ValidatorError::invalid_bounds("InRange", 10, 0));
}

#[test]
fn test_misuse_discards_collected_violations() {
    struct Mixed {
        name: Option<String>,
        count: String,
    }

    constrained! {
        Mixed {
            name: [not_null()],
            count: [positive()],
        }
    }

    let result = validate(&Mixed {
        name: None,
        count: "3".to_owned(),
    });
    assert!(matches!(result, Err(ValidatorError::Misuse { constraint: "Positive", .. })));
}

#[test]
fn test_misuse_deep_in_the_graph_is_fatal() {
    struct Holder {
        guests: Vec<GuestForm>,
        tags: Vec<Vec<i64>>,
    }

    constrained! {
        Holder {
            guests: [],
            tags: [] each [] each [not_blank()],
        }
    }

    let holder = Holder {
        guests: vec![GuestForm::new(None, None, 1)],
        tags: vec![vec![], vec![1, 2]],
    };
    let err = validate(&holder).unwrap_err();
    assert_eq!(
        err.to_string(),
        "incorrect use of NotBlank: expected string, actual: i64"
    );
}
