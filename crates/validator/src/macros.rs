//! Declarative descriptor tables.
//!
//! # Available Macros
//!
//! - [`constrained!`]: implement [`Constrained`](crate::Constrained) and
//!   [`Inspect`](crate::Inspect) for one or more structs from a field table
//!
//! # Examples
//!
//! ```rust
//! use warden_validator::prelude::*;
//! use warden_validator::constrained;
//!
//! struct GuestForm {
//!     first_name: Option<String>,
//!     age: i32,
//! }
//!
//! struct BookingForm {
//!     guests: Option<Vec<Option<GuestForm>>>,
//!     property_type: Option<String>,
//! }
//!
//! constrained! {
//!     GuestForm {
//!         first_name as "firstName": [not_null(), not_blank()],
//!         age: [in_range(0, 200)],
//!     }
//!
//!     BookingForm {
//!         guests: [not_null(), size(1, 5)] each [not_null()],
//!         property_type as "propertyType": [not_null(), any_of(["House", "Hostel"])],
//!     }
//! }
//!
//! let form = BookingForm {
//!     guests: Some(vec![Some(GuestForm { first_name: None, age: 19 })]),
//!     property_type: Some("Castle".to_owned()),
//! };
//!
//! let errors = validate(&form).unwrap();
//! assert_eq!(errors.paths(), vec!["guests[0].firstName", "propertyType"]);
//! ```

// ============================================================================
// CONSTRAINED MACRO
// ============================================================================

/// Implements [`Constrained`](crate::Constrained) and [`Inspect`](crate::Inspect)
/// for structs from a table of fields and constraints.
///
/// Each field entry is `name: [constraints...]`, optionally followed by one
/// `each [constraints...]` group per list nesting level. The first `each`
/// applies to the list elements, the second to the elements of those
/// elements, and so on. `name as "label"` reports the field under `label`
/// in violation paths.
///
/// Fields left out of the table are neither checked nor traversed. A field
/// whose type is itself validatable is descended into even with an empty
/// constraint list.
///
/// ```rust
/// use warden_validator::prelude::*;
/// use warden_validator::constrained;
///
/// struct Matrix {
///     cells: Vec<Vec<Option<String>>>,
/// }
///
/// constrained! {
///     Matrix {
///         cells: [not_empty()] each [] each [not_null(), not_blank()],
///     }
/// }
///
/// let matrix = Matrix {
///     cells: vec![vec![Some("a".into())], vec![Some("b".into()), None]],
/// };
/// let errors = validate(&matrix).unwrap();
/// assert_eq!(errors.paths(), vec!["cells[1][1]"]);
/// ```
#[macro_export]
macro_rules! constrained {
    (@name $field:ident) => {
        ::core::stringify!($field)
    };
    (@name $field:ident $rename:literal) => {
        $rename
    };
    ($(
        $ty:ident {
            $(
                $field:ident $(as $rename:literal)? : [ $($constraint:expr),* $(,)? ]
                $( each [ $($element:expr),* $(,)? ] )*
            ),* $(,)?
        }
    )+) => {
        $(
            impl $crate::Constrained for $ty {
                fn attributes(&self) -> ::std::vec::Vec<$crate::Attribute<'_>> {
                    ::std::vec![
                        $(
                            $crate::Attribute::new(
                                $crate::constrained!(@name $field $($rename)?),
                                &self.$field,
                            )
                            .with_constraints(::std::vec![$($constraint),*])
                            $( .each(::std::vec![$($element),*]) )*
                        ),*
                    ]
                }
            }

            impl $crate::Inspect for $ty {
                fn inspect(&self) -> $crate::ValueRef<'_> {
                    $crate::ValueRef::Object(self)
                }
            }
        )+
    };
}
