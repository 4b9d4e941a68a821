//! Typed message arguments.
//!
//! Every [`ConstraintViolation`](crate::types::ConstraintViolation) carries an ordered
//! argument list `[path, rule args..., violated value]`. Arguments are kept typed so that
//! formatters can render them without reflection, and so they survive a serde round trip.

use core::fmt;

use crate::types::alloc_type::{Cow, String, ToString};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single typed argument substituted into a message template.
///
/// # Examples
///
/// ```
/// use constraint_rail::Arg;
///
/// assert_eq!(Arg::from(3_u8).to_string(), "3");
/// assert_eq!(Arg::from("abc").to_string(), "abc");
/// assert_eq!(Arg::Null.to_string(), "null");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(Cow<'static, str>),
}

impl Arg {
    /// Returns `true` for [`Arg::Null`].
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string payload, if this is a [`Arg::Str`].
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value widened to `i128` for integer arguments.
    #[must_use]
    #[inline]
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(i128::from(*v)),
            Self::UInt(v) => Some(i128::from(*v)),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::UInt(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Arg {
    #[inline]
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg {
    #[inline]
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<i128> for Arg {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Str(Cow::Owned(value.to_string())),
        }
    }
}

impl From<u128> for Arg {
    fn from(value: u128) -> Self {
        match u64::try_from(value) {
            Ok(v) => Self::UInt(v),
            Err(_) => Self::Str(Cow::Owned(value.to_string())),
        }
    }
}

impl From<f32> for Arg {
    #[inline]
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for Arg {
    #[inline]
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<bool> for Arg {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg {
    #[inline]
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Arg {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(Cow::Owned(value.into()))
    }
}

impl From<String> for Arg {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<&String> for Arg {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Str(Cow::Owned(value.clone()))
    }
}

impl From<Cow<'static, str>> for Arg {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl<T> From<Option<T>> for Arg
where
    T: Into<Arg>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
