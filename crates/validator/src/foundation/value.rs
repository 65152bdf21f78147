//! Value views and owned snapshots
//!
//! [`ValueRef`] is what the walker and the rule evaluator look at while a
//! traversal runs; it borrows from the validated object. [`Value`] is the
//! owned, pure-data copy stored in a [`ValidationError`](crate::ValidationError)
//! so violations outlive the object graph they describe.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::foundation::attribute::Attribute;
use crate::foundation::traits::Constrained;

// ============================================================================
// BORROWED VIEW
// ============================================================================

/// Traversal-time view of an attribute value.
///
/// All whole-number primitives collapse into [`ValueRef::Integer`]; this is
/// the only kind `Positive`, `Negative` and `InRange` accept.
#[derive(Clone)]
pub enum ValueRef<'a> {
    /// Absent value (`None`).
    Null,
    /// A boolean.
    Bool(bool),
    /// Any whole-number primitive, widened.
    Integer(i128),
    /// `f32` / `f64`.
    Float(f64),
    /// A single character.
    Char(char),
    /// Any string type.
    Str(&'a str),
    /// An ordered sequence. `element_type` is the declared element type.
    List {
        /// Declared type name of the elements.
        element_type: &'static str,
        /// Element views in order.
        items: Vec<ValueRef<'a>>,
    },
    /// An unordered set.
    Set(Vec<ValueRef<'a>>),
    /// A key/value mapping.
    Map(Vec<(ValueRef<'a>, ValueRef<'a>)>),
    /// A value carrying the validatable capability.
    Object(&'a dyn Constrained),
    /// Any other value; never descended into.
    Opaque {
        /// Declared type name of the value.
        type_name: &'static str,
    },
}

impl<'a> ValueRef<'a> {
    /// Returns `true` for [`ValueRef::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the integer if this is a whole number.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the nested validatable object, if any.
    #[must_use]
    pub fn as_object(&self) -> Option<&'a dyn Constrained> {
        match self {
            Self::Object(object) => Some(*object),
            _ => None,
        }
    }

    /// Size of a sized kind: character count for strings, element count for
    /// lists, sets and maps. `None` for every other kind.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Str(s) => Some(s.chars().count()),
            Self::List { items, .. } | Self::Set(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Takes an owned snapshot of this value.
    ///
    /// Objects are captured through their attribute table, recursively.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Integer(n) => Value::Integer(*n),
            Self::Float(f) => Value::Float(*f),
            Self::Char(c) => Value::Char(*c),
            Self::Str(s) => Value::String((*s).to_owned()),
            Self::List { items, .. } => Value::List(items.iter().map(Self::to_value).collect()),
            Self::Set(items) => Value::Set(items.iter().map(Self::to_value).collect()),
            Self::Map(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(key, value)| (key.to_value(), value.to_value()))
                    .collect(),
            ),
            Self::Object(object) => Value::Object {
                type_name: object.type_name(),
                fields: object
                    .attributes()
                    .iter()
                    .map(Attribute::snapshot)
                    .collect(),
            },
            Self::Opaque { type_name } => Value::Opaque {
                type_name: *type_name,
            },
        }
    }
}

impl fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::List {
                element_type,
                items,
            } => f
                .debug_struct("List")
                .field("element_type", element_type)
                .field("items", items)
                .finish(),
            Self::Set(items) => f.debug_tuple("Set").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Object(object) => f.debug_tuple("Object").field(&object.type_name()).finish(),
            Self::Opaque { type_name } => f
                .debug_struct("Opaque")
                .field("type_name", type_name)
                .finish(),
        }
    }
}

// ============================================================================
// OWNED SNAPSHOT
// ============================================================================

/// Owned snapshot of a failed value.
///
/// Equality and hashing are structural; floats compare by bit pattern so
/// `Value` can be `Eq + Hash` and live inside a deduplicating set.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A whole number.
    Integer(i128),
    /// A floating point number.
    Float(f64),
    /// A single character.
    Char(char),
    /// A string.
    String(String),
    /// An ordered sequence.
    List(Vec<Value>),
    /// A set, in iteration order.
    Set(Vec<Value>),
    /// A mapping, in iteration order.
    Map(Vec<(Value, Value)>),
    /// A validatable object captured through its attributes.
    Object {
        /// Fully qualified type name.
        type_name: &'static str,
        /// Attribute name and value pairs, in declaration order.
        fields: Vec<(Cow<'static, str>, Value)>,
    },
    /// A value without the validatable capability.
    Opaque {
        /// Fully qualified type name.
        type_name: &'static str,
    },
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer if this is a whole number.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Looks up a captured field of an object snapshot.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Object { fields, .. } => fields
                .iter()
                .find(|(field, _)| field.as_ref() == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Converts the snapshot to JSON.
    ///
    /// Objects become JSON objects, map keys are rendered as text, integers
    /// outside the 64-bit range become strings.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (
                Self::Object {
                    type_name: a,
                    fields: fa,
                },
                Self::Object {
                    type_name: b,
                    fields: fb,
                },
            ) => a == b && fa == fb,
            (Self::Opaque { type_name: a }, Self::Opaque { type_name: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Integer(n) => n.hash(state),
            Self::Float(x) => x.to_bits().hash(state),
            Self::Char(c) => c.hash(state),
            Self::String(s) => s.hash(state),
            Self::List(items) | Self::Set(items) => items.hash(state),
            Self::Map(entries) => entries.hash(state),
            Self::Object { type_name, fields } => {
                type_name.hash(state);
                fields.hash(state);
            }
            Self::Opaque { type_name } => type_name.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Char(c) => write!(f, "{c:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => write_joined(f, "[", items.iter(), "]"),
            Self::Set(items) => write_joined(f, "{", items.iter(), "}"),
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Object { type_name, fields } => {
                write!(f, "{} {{", short_type_name(type_name))?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    let sep = if i > 0 { ", " } else { " " };
                    write!(f, "{sep}{name}: {value}")?;
                }
                if fields.is_empty() {
                    f.write_str("}")
                } else {
                    f.write_str(" }")
                }
            }
            Self::Opaque { type_name } => write!(f, "<{}>", short_type_name(type_name)),
        }
    }
}

fn write_joined<'v>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: impl Iterator<Item = &'v Value>,
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! value_from_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Integer(i128::from(n))
                }
            }
        )+
    };
}

value_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// SERDE
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => {
                if let Ok(n) = i64::try_from(*n) {
                    serializer.serialize_i64(n)
                } else if let Ok(n) = u64::try_from(*n) {
                    serializer.serialize_u64(n)
                } else {
                    serializer.collect_str(n)
                }
            }
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Char(c) => serializer.serialize_char(*c),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) | Self::Set(items) => serializer.collect_seq(items),
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    let key: Cow<'_, str> = match key {
                        Self::String(s) => Cow::Borrowed(s.as_str()),
                        other => Cow::Owned(other.to_string()),
                    };
                    map.serialize_entry(&key, value)?;
                }
                map.end()
            }
            Self::Object { fields, .. } => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Self::Opaque { type_name } => serializer.collect_str(&short_type_name(type_name)),
        }
    }
}

// ============================================================================
// TYPE NAMES
// ============================================================================

/// Strips module paths from a `std::any::type_name` rendering.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name(full: &str) -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let mut out = String::with_capacity(full.len());
    let mut start = 0;
    for (i, ch) in full.char_indices() {
        if matches!(ch, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';') {
            out.push_str(last_segment(&full[start..i]));
            out.push(ch);
            start = i + ch.len_utf8();
        }
    }
    out.push_str(last_segment(&full[start..]));
    out
}

// ============================================================================
// TESTS
// ============================================================================
