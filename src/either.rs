//! A two-branch value with no success/failure bias.
//!
//! [`Either`] carries validation outcomes functionally: by convention
//! [`Validator::validate_to_either`](crate::Validator::validate_to_either) puts the
//! violations on the left and the validated value on the right. Every combinator
//! preserves which branch is active.
//!
//! # Examples
//!
//! ```
//! use constraint_rail::Either;
//!
//! let value: Either<String, i32> = Either::Right(20);
//! let text = value
//!     .right_map(|n| n + 1)
//!     .fold(|err| format!("error: {err}"), |n| format!("ok: {n}"));
//! assert_eq!(text, "ok: 21");
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    #[must_use]
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    #[must_use]
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the left value, if any.
    #[must_use]
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    #[must_use]
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Maps whichever branch is active with the matching function.
    ///
    /// # Arguments
    ///
    /// * `left_mapper` - Applied to a left value
    /// * `right_mapper` - Applied to a right value
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::Either;
    ///
    /// let e: Either<&str, i32> = Either::Left("bad");
    /// assert_eq!(e.bimap(str::len, |n| n * 2), Either::Left(3));
    /// ```
    #[inline]
    pub fn bimap<L2, R2, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(l) => Either::Left(left_mapper(l)),
            Self::Right(r) => Either::Right(right_mapper(r)),
        }
    }

    /// Collapses both branches into one value.
    #[must_use]
    #[inline]
    pub fn fold<U, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Self::Left(l) => left_mapper(l),
            Self::Right(r) => right_mapper(r),
        }
    }

    #[inline]
    pub fn left_map<L2, F>(self, mapper: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(l) => Either::Left(mapper(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    #[inline]
    pub fn right_map<R2, F>(self, mapper: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(mapper(r)),
        }
    }

    /// Chains a computation on the right value.
    #[inline]
    pub fn right_and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => f(r),
        }
    }

    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    /// Returns the left value or computes one from the right value.
    #[must_use]
    #[inline]
    pub fn left_or_else_get<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(l) => l,
            Self::Right(r) => f(r),
        }
    }

    /// Returns the right value or computes one from the left value.
    #[must_use]
    #[inline]
    pub fn right_or_else_get<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => r,
        }
    }

    /// Returns the left value, or an error built from the right value.
    #[inline]
    pub fn left_or_else<E, F>(self, to_error: F) -> Result<L, E>
    where
        F: FnOnce(R) -> E,
    {
        match self {
            Self::Left(l) => Ok(l),
            Self::Right(r) => Err(to_error(r)),
        }
    }

    /// Returns the right value, or an error built from the left value.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::Either;
    ///
    /// let e: Either<&str, i32> = Either::Left("invalid");
    /// assert_eq!(e.right_or_else(|l| l.len()), Err(7));
    /// ```
    #[inline]
    pub fn right_or_else<E, F>(self, to_error: F) -> Result<R, E>
    where
        F: FnOnce(L) -> E,
    {
        match self {
            Self::Left(l) => Err(to_error(l)),
            Self::Right(r) => Ok(r),
        }
    }

    /// Calls `f` with the left value, if any, and returns `self` unchanged.
    #[inline]
    pub fn peek_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(l) = &self {
            f(l);
        }
        self
    }

    /// Calls `f` with the right value, if any, and returns `self` unchanged.
    #[inline]
    pub fn peek_right<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(r) = &self {
            f(r);
        }
        self
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}
