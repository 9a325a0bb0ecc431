//! Dynamically typed values stored in an error's debugging context.
//!
//! Context entries are free-form: a search term, a column list, a retry
//! counter, a nested map of query options. [`ContextValue`] is the closed set
//! of shapes those values can take, so the whole context stays `Clone`,
//! comparable and serializable without reaching for `dyn Any`.
//!
//! # Examples
//!
//! ```
//! use fuzzy_search_error::ContextValue;
//!
//! let term: ContextValue = "jonh".into();
//! let limit: ContextValue = 25u32.into();
//! let missing: ContextValue = Option::<&str>::None.into();
//!
//! assert_eq!(term.as_str(), Some("jonh"));
//! assert_eq!(limit.as_u64(), Some(25));
//! assert!(missing.is_null());
//! ```
use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::types::ContextMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single value in a [`ContextMap`].
///
/// Equality is by value: integers compare numerically across `Int` and
/// `UInt`, and `NaN` equals `NaN` so an error always equals itself.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ContextValue {
    /// Absence of a value.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer that does not fit in `i64`, or was given as unsigned.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Str(String),
    /// Ordered list of values.
    List(Vec<ContextValue>),
    /// Nested mapping.
    Map(Box<ContextMap>),
}

impl ContextValue {
    /// Returns `true` for [`ContextValue::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the flag of a [`ContextValue::Bool`].
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as `i64` when it is an integer that fits.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::UInt(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Returns the value as `u64` when it is a non-negative integer.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(u) => Some(*u),
            Self::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Returns the value as `f64`; integers are widened.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            Self::UInt(u) => Some(*u as f64),
            _ => None,
        }
    }

    /// Returns the text of a [`ContextValue::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the items of a [`ContextValue::List`].
    #[inline]
    pub fn as_list(&self) -> Option<&[ContextValue]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the nested map of a [`ContextValue::Map`].
    #[inline]
    pub fn as_map(&self) -> Option<&ContextMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the variant, useful in log field names and assertions.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl PartialEq for ContextValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Int(i), Self::UInt(u)) | (Self::UInt(u), Self::Int(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            },
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for ContextValue {
    #[inline]
    fn default() -> Self {
        Self::Null
    }
}

impl Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_str("]")
            },
            Self::Map(map) => Display::fmt(map, f),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ContextValue {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ContextValue {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::UInt(value as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for ContextValue {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ContextValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ContextValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for ContextValue {
    #[inline]
    fn from(value: char) -> Self {
        let mut s = String::with_capacity(value.len_utf8());
        s.push(value);
        Self::Str(s)
    }
}

impl From<&str> for ContextValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<String> for ContextValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ContextValue {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for ContextValue {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl From<()> for ContextValue {
    #[inline]
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<ContextMap> for ContextValue {
    #[inline]
    fn from(value: ContextMap) -> Self {
        Self::Map(Box::new(value))
    }
}

impl<T> From<Option<T>> for ContextValue
where
    T: Into<ContextValue>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T> From<Vec<T>> for ContextValue
where
    T: Into<ContextValue>,
{
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for ContextValue
where
    T: Clone + Into<ContextValue>,
{
    #[inline]
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T> FromIterator<T> for ContextValue
where
    T: Into<ContextValue>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}
