use std::collections::{BTreeSet, HashMap};

use pretty_assertions::assert_eq;
use warden_validator::constrained;
use warden_validator::prelude::*;

use crate::forms::{GuestForm, strings};

struct Strings {
    list: Vec<Option<String>>,
}

struct Collections {
    list: Vec<String>,
    set: BTreeSet<String>,
    map: HashMap<String, i32>,
    text: String,
}

struct Matrix {
    list: Vec<Vec<String>>,
}

struct Cube {
    list: Vec<Vec<Vec<String>>>,
}

struct MaybeMatrix {
    list: Vec<Option<Vec<Option<String>>>>,
}

struct Numbers {
    list: Vec<i32>,
}

struct Guests {
    list: Vec<Option<GuestForm>>,
}

constrained! {
    Strings {
        list: [] each [not_null(), not_blank()],
    }

    Collections {
        list: [not_empty(), size(0, 1)],
        set: [not_empty(), size(0, 1)],
        map: [not_empty(), size(0, 1)],
        text: [not_empty(), size(0, 1)],
    }

    Matrix {
        list: [] each [not_empty()] each [not_blank()],
    }

    Cube {
        list: [] each [] each [] each [not_blank()],
    }

    MaybeMatrix {
        list: [] each [not_null()] each [not_null()],
    }

    Numbers {
        list: [not_empty()] each [positive()],
    }

    Guests {
        list: [size(1, 3)] each [not_null()],
    }
}

fn matrix(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| (*s).to_owned()).collect())
        .collect()
}

#[test]
fn test_blank_elements_are_indexed() {
    let form = Strings {
        list: strings(&[Some("a"), Some(""), Some("c"), Some(" ")]),
    };
    let errors = validate(&form).unwrap();

    assert_eq!(errors.paths(), vec!["list[1]", "list[3]"]);
    assert_eq!(
        errors.at_path("list[3]").next().map(ValidationError::failed_value),
        Some(&Value::from(" "))
    );
}

#[test]
fn test_every_sized_kind_is_measured() {
    let form = Collections {
        list: Vec::new(),
        set: BTreeSet::new(),
        map: HashMap::new(),
        text: String::new(),
    };
    let errors = validate(&form).unwrap();

    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|e| e.message() == "Must not be empty"));
    assert_eq!(errors.paths(), vec!["list", "set", "map", "text"]);
}

#[test]
fn test_oversized_collections() {
    let form = Collections {
        list: vec!["a".into(), "b".into()],
        set: ["a", "b"].into_iter().map(String::from).collect(),
        map: [("a".to_owned(), 1)].into_iter().collect(),
        text: "ab".into(),
    };
    let errors = validate(&form).unwrap();

    assert_eq!(errors.paths(), vec!["list", "set", "text"]);
    assert!(
        errors
            .iter()
            .all(|e| e.message() == "Size must be in range between 0 and 1")
    );
}

#[test]
fn test_two_level_nesting() {
    let mut list = matrix(&[&["a", ""], &["", "b", " "]]);
    list.push(Vec::new());
    let errors = validate(&Matrix { list }).unwrap();

    assert_eq!(
        errors.paths(),
        vec!["list[2]", "list[0][1]", "list[1][0]", "list[1][2]"]
    );
}

#[test]
fn test_three_level_nesting() {
    let mut list = vec![
        matrix(&[&["a", "b", "c"], &["a", "b", "c"]]),
        matrix(&[&["a", "b", "c"], &["a", "b", "c"]]),
    ];
    list[0][1][2] = String::new();
    list[1][0][0] = " ".to_owned();
    list[1][1][1] = "\t".to_owned();

    let errors = validate(&Cube { list }).unwrap();

    assert_eq!(
        errors.paths(),
        vec!["list[0][1][2]", "list[1][0][0]", "list[1][1][1]"]
    );
}

#[test]
fn test_blank_deep_inside_cube() {
    let mut list = vec![vec![vec!["x".to_owned(); 2]; 2]; 2];
    list[1][1][1] = "   ".to_owned();

    let errors = validate(&Cube { list }).unwrap();

    assert_eq!(errors.paths(), vec!["list[1][1][1]"]);
}

#[test]
fn test_list_of_nulls() {
    let form = Strings {
        list: vec![None, None],
    };
    let errors = validate(&form).unwrap();

    assert_eq!(errors.paths(), vec!["list[0]", "list[1]"]);
    assert!(errors.iter().all(|e| e.message() == "Must not be null"));
}

#[test]
fn test_nulls_at_two_levels() {
    let form = MaybeMatrix {
        list: vec![
            Some(strings(&[Some("a"), Some("b")])),
            Some(strings(&[Some("a"), Some("b"), None])),
            None,
        ],
    };
    let errors = validate(&form).unwrap();

    assert_eq!(errors.paths(), vec!["list[2]", "list[1][2]"]);
}

#[test]
fn test_empty_list_checks_only_the_attribute() {
    let form = Numbers { list: Vec::new() };
    let errors = validate(&form).unwrap();

    assert_eq!(errors.paths(), vec!["list"]);
}

#[test]
fn test_element_rules_apply_per_index() {
    let errors = validate(&Numbers { list: vec![1, -2, 0] }).unwrap();

    assert_eq!(errors.paths(), vec!["list[1]", "list[2]"]);
    assert_eq!(
        errors.at_path("list[2]").next().map(ValidationError::failed_value),
        Some(&Value::from(0))
    );
}

#[test]
fn test_guest_elements_are_descended() {
    let form = Guests {
        list: vec![
            Some(GuestForm::new(Some("A"), Some("B"), 1)),
            None,
            Some(GuestForm::new(Some("A"), None, 300)),
        ],
    };
    let errors = validate(&form).unwrap();

    assert_eq!(
        errors.paths(),
        vec!["list[1]", "list[2].lastName", "list[2].age"]
    );
}
