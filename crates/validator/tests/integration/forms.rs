//! Form types shared by the integration tests

use warden_validator::constrained;
use warden_validator::prelude::*;

pub struct GuestForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: i32,
}

impl GuestForm {
    pub fn new(first_name: Option<&str>, last_name: Option<&str>, age: i32) -> Self {
        Self {
            first_name: first_name.map(str::to_owned),
            last_name: last_name.map(str::to_owned),
            age,
        }
    }
}

/// A value without the validatable capability.
pub struct Unrelated {
    #[allow(dead_code)]
    pub x: i32,
}

impl Inspect for Unrelated {}

pub struct BookingForm {
    pub guests: Option<Vec<Option<GuestForm>>>,
    pub amenities: Option<Vec<Option<String>>>,
    pub property_type: Option<String>,
    pub unrelated: Option<Unrelated>,
}

pub struct Wrapper {
    pub x: i32,
    pub guest_form: Option<GuestForm>,
}

/// One field per constraint kind.
pub struct Related {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub legend: Option<String>,
    pub comments: Option<Vec<String>>,
    pub scale: Option<i32>,
    pub plot: Option<String>,
}

constrained! {
    GuestForm {
        first_name as "firstName": [not_null(), not_blank()],
        last_name as "lastName": [not_null(), not_blank()],
        age: [in_range(0, 200)],
    }

    BookingForm {
        guests: [not_null(), size(1, 5)] each [not_null()],
        amenities: [not_null()] each [any_of(["TV", "Kitchen"])],
        property_type as "propertyType": [not_null(), any_of(["House", "Hostel"])],
        unrelated: [not_null()],
    }

    Wrapper {
        x: [positive()],
        guest_form as "guestForm": [],
    }

    Related {
        x: [positive()],
        y: [negative()],
        title: [not_blank()],
        author: [not_empty()],
        legend: [not_null()],
        comments: [size(1, 5)],
        scale: [in_range(0, 100)],
        plot: [any_of(["Linear", "Box", "Heatmap", "Histogram", "Violin"])],
    }
}

pub fn strings(items: &[Option<&str>]) -> Vec<Option<String>> {
    items.iter().map(|item| item.map(str::to_owned)).collect()
}

/// Wraps one value under one constraint, for exercising single rules.
pub struct Probe<T> {
    pub value: T,
    pub rule: Constraint,
}

impl<T: Inspect> Probe<T> {
    pub const fn new(value: T, rule: Constraint) -> Self {
        Self { value, rule }
    }
}

impl<T: Inspect> Constrained for Probe<T> {
    fn attributes(&self) -> Vec<Attribute<'_>> {
        vec![Attribute::new("value", &self.value).with_constraint(self.rule.clone())]
    }
}

impl<T: Inspect> Inspect for Probe<T> {
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Object(self)
    }
}
