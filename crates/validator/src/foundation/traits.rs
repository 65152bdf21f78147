//! Core traits for the validation system
//!
//! [`Constrained`] marks a type as validatable and exposes its descriptor
//! table. [`Inspect`] turns any supported Rust value into a [`ValueRef`]
//! the rule evaluator can judge.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::attribute::Attribute;
use crate::foundation::value::ValueRef;

// ============================================================================
// VALIDATABLE CAPABILITY
// ============================================================================

/// The validatable capability.
///
/// A type implementing this trait can be the root of a validation call, and
/// the walker descends into every attribute value whose [`Inspect`] view is
/// [`ValueRef::Object`].
///
/// Attributes are visited in the order they are returned. Only user data
/// belongs in the table; anything omitted is neither checked nor traversed.
///
/// Most types derive both traits through the [`constrained!`](crate::constrained)
/// macro.
pub trait Constrained {
    /// Returns the descriptor of every attribute of this instance.
    fn attributes(&self) -> Vec<Attribute<'_>>;

    /// Fully qualified name of the concrete type, used in snapshots.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// INSPECT
// ============================================================================

/// Presents a Rust value to the walker.
///
/// Implementations exist for primitives, strings, the std collections,
/// `Option` and the usual smart pointers. User types either return
/// [`ValueRef::Object`] (validatable) or keep the default, which reports the
/// value as opaque: checked by `NotNull`, never descended into.
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// struct Unrelated {
///     #[allow(dead_code)]
///     x: i32,
/// }
///
/// impl Inspect for Unrelated {}
///
/// assert!(matches!(Unrelated { x: 1 }.inspect(), ValueRef::Opaque { .. }));
/// ```
pub trait Inspect {
    /// Returns the traversal-time view of this value.
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Opaque {
            type_name: Self::declared_type(),
        }
    }

    /// The declared type name reported in misuse diagnostics.
    ///
    /// Transparent wrappers (`Option`, `Box`, references) report the type
    /// they wrap.
    fn declared_type() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Inspect for dyn Constrained + '_ {
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Object(self)
    }

    fn declared_type() -> &'static str {
        "dyn Constrained"
    }
}

// ============================================================================
// PRIMITIVES
// ============================================================================

macro_rules! inspect_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn inspect(&self) -> ValueRef<'_> {
                    ValueRef::Integer(*self as i128)
                }
            }
        )+
    };
}

inspect_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Inspect for i128 {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Integer(*self)
    }
}

impl Inspect for f32 {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Float(f64::from(*self))
    }
}

impl Inspect for f64 {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Float(*self)
    }
}

impl Inspect for bool {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Bool(*self)
    }
}

impl Inspect for char {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Char(*self)
    }
}

// ============================================================================
// STRINGS
// ============================================================================

impl Inspect for str {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Str(self)
    }
}

impl Inspect for String {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Str(self.as_str())
    }
}

impl Inspect for Cow<'_, str> {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Str(self.as_ref())
    }
}

// ============================================================================
// TRANSPARENT WRAPPERS
// ============================================================================

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> ValueRef<'_> {
        match self {
            Some(value) => value.inspect(),
            None => ValueRef::Null,
        }
    }

    fn declared_type() -> &'static str {
        T::declared_type()
    }
}

macro_rules! inspect_pointer {
    ($($ptr:ident),+ $(,)?) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                #[inline]
                fn inspect(&self) -> ValueRef<'_> {
                    (**self).inspect()
                }

                fn declared_type() -> &'static str {
                    T::declared_type()
                }
            }
        )+
    };
}

inspect_pointer!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    #[inline]
    fn inspect(&self) -> ValueRef<'_> {
        (**self).inspect()
    }

    fn declared_type() -> &'static str {
        T::declared_type()
    }
}

// ============================================================================
// ORDERED SEQUENCES
// ============================================================================

fn list_of<'a, T, I>(items: I) -> ValueRef<'a>
where
    T: Inspect + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ValueRef::List {
        element_type: T::declared_type(),
        items: items.into_iter().map(Inspect::inspect).collect(),
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> ValueRef<'_> {
        list_of(self)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> ValueRef<'_> {
        list_of(self)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> ValueRef<'_> {
        list_of(self)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self) -> ValueRef<'_> {
        list_of(self)
    }
}

// ============================================================================
// SETS AND MAPS
// ============================================================================

impl<T: Inspect, S: BuildHasher> Inspect for HashSet<T, S> {
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Set(self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Set(self.iter().map(Inspect::inspect).collect())
    }
}

impl<K: Inspect, V: Inspect, S: BuildHasher> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Map(
            self.iter()
                .map(|(key, value)| (key.inspect(), value.inspect()))
                .collect(),
        )
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> ValueRef<'_> {
        ValueRef::Map(
            self.iter()
                .map(|(key, value)| (key.inspect(), value.inspect()))
                .collect(),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
