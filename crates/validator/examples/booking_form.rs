//! Validates a booking form and prints the report.
//!
//! Run with `RUST_LOG=warden_validator=trace` to see every recorded
//! violation.

use tracing_subscriber::EnvFilter;
use warden_validator::constrained;
use warden_validator::prelude::*;

struct GuestForm {
    first_name: Option<String>,
    last_name: Option<String>,
    age: i32,
}

struct BookingForm {
    guests: Option<Vec<Option<GuestForm>>>,
    amenities: Option<Vec<String>>,
    property_type: Option<String>,
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
    }
}

fn guest(first_name: Option<&str>, last_name: &str, age: i32) -> Option<GuestForm> {
    Some(GuestForm {
        first_name: first_name.map(str::to_owned),
        last_name: Some(last_name.to_owned()),
        age,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let form = BookingForm {
        guests: Some(vec![
            guest(None, "Skrypina", 19),
            guest(Some(""), "Stark", 236),
        ]),
        amenities: Some(vec!["TV".to_owned(), "Sauna".to_owned()]),
        property_type: Some("Castle".to_owned()),
    };

    match validate(&form) {
        Ok(errors) if errors.is_empty() => println!("booking form is valid"),
        Ok(errors) => {
            println!("{errors}");
            #[cfg(feature = "serde")]
            println!("{:#}", errors.to_json_value());
        }
        Err(e) => eprintln!("validation could not run: {e}"),
    }
}
