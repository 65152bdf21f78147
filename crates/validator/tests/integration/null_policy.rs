use rstest::rstest;
use warden_validator::prelude::*;

use crate::forms::{Probe, Related};

#[rstest]
#[case::not_blank(not_blank())]
#[case::not_empty(not_empty())]
#[case::size(size(1, 5))]
#[case::any_of(any_of(["a", "b", "c"]))]
fn test_null_string_passes(#[case] rule: Constraint) {
    let probe = Probe::new(None::<String>, rule);
    assert!(validate(&probe).unwrap().is_empty());
}

#[rstest]
#[case::positive(positive())]
#[case::negative(negative())]
#[case::in_range(in_range(0, 200))]
fn test_null_number_passes(#[case] rule: Constraint) {
    let probe = Probe::new(None::<i32>, rule);
    assert!(validate(&probe).unwrap().is_empty());
}

#[test]
fn test_null_list_passes_size() {
    let probe = Probe::new(None::<Vec<String>>, size(1, 5));
    assert!(validate(&probe).unwrap().is_empty());
}

#[test]
fn test_null_fails_only_not_null() {
    let probe = Probe::new(None::<String>, not_null());
    let errors = validate(&probe).unwrap();

    assert_eq!(errors.len(), 1);
    let error = errors.iter().next().unwrap();
    assert_eq!(error.message(), "Must not be null");
    assert_eq!(error.path(), "value");
    assert!(error.failed_value().is_null());
}

#[test]
fn test_null_on_wrong_kind_is_not_misuse() {
    let probe = Probe::new(None::<i32>, not_blank());
    assert!(validate(&probe).unwrap().is_empty());
}

#[test]
fn test_all_null_related_reports_only_legend() {
    let related = Related {
        x: None,
        y: None,
        title: None,
        author: None,
        legend: None,
        comments: None,
        scale: None,
        plot: None,
    };
    let errors = validate(&related).unwrap();

    assert_eq!(errors.paths(), vec!["legend"]);
}

#[test]
fn test_every_rule_kind_fires() {
    let related = Related {
        x: Some(-4),
        y: Some(5),
        title: Some("   ".into()),
        author: Some(String::new()),
        legend: None,
        comments: Some(vec!["c".into(); 6]),
        scale: Some(-10),
        plot: Some("Beep".into()),
    };
    let errors = validate(&related).unwrap();

    let messages: Vec<&str> = errors.iter().map(ValidationError::message).collect();
    assert_eq!(
        messages,
        vec![
            "Must be positive (more than 0)",
            "Must be negative (less than 0)",
            "Must not be blank",
            "Must not be empty",
            "Must not be null",
            "Size must be in range between 1 and 5",
            "Value must be in range between 0 and 100",
            "Must be one of 'Linear', 'Box', 'Heatmap', 'Histogram', 'Violin'",
        ]
    );
}
