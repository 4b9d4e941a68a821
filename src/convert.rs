//! Conversion helpers between `Result`, [`Either`], [`Validation`], and
//! [`ConstraintViolations`].
//!
//! # Examples
//!
//! ```
//! use constraint_rail::convert::*;
//! use constraint_rail::validation::Validation;
//! use constraint_rail::Either;
//!
//! let validation = result_to_validation(Ok::<i32, &str>(42));
//! assert!(validation.is_valid());
//!
//! let either: Either<_, i32> = validation_to_either(Validation::<&str, i32>::invalid("bad"));
//! assert!(either.is_left());
//! ```

use crate::either::Either;
use crate::types::{ConstraintViolation, ConstraintViolations, ErrorVec};
use crate::validation::Validation;

/// Converts a `Result` into a `Validation` with at most one error.
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> Validation<E, T> {
    Validation::from_result(result)
}

/// Converts a `Validation` into a `Result` carrying every error.
#[inline]
pub fn validation_to_result<T, E>(validation: Validation<E, T>) -> Result<T, ErrorVec<E>> {
    validation.to_result()
}

/// `Valid` becomes `Right`, the error list becomes `Left`.
#[inline]
pub fn validation_to_either<T, E>(validation: Validation<E, T>) -> Either<ErrorVec<E>, T> {
    validation.to_either()
}

/// Pairs a validation outcome with the value it was computed for.
///
/// # Examples
///
/// ```
/// use constraint_rail::convert::violations_to_validation;
/// use constraint_rail::ConstraintViolations;
///
/// let v = violations_to_validation(ConstraintViolations::new(), "value");
/// assert_eq!(v.into_value(), Some("value"));
/// ```
pub fn violations_to_validation<T>(
    violations: ConstraintViolations,
    value: T,
) -> Validation<ConstraintViolation, T> {
    if violations.is_valid() {
        Validation::Valid(value)
    } else {
        Validation::invalid_many(violations)
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Validation::from_result(result)
    }
}

impl<E, A> From<Validation<E, A>> for Result<A, ErrorVec<E>> {
    #[inline]
    fn from(validation: Validation<E, A>) -> Self {
        validation.to_result()
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<T> From<Either<ConstraintViolations, T>> for Validation<ConstraintViolation, T> {
    fn from(either: Either<ConstraintViolations, T>) -> Self {
        match either {
            Either::Left(violations) => Validation::invalid_many(violations),
            Either::Right(value) => Validation::Valid(value),
        }
    }
}
