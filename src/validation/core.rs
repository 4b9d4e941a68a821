use crate::either::Either;
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Two-branch result that accumulates every error instead of stopping at the first.
///
/// `Validation<E, A>` is either `Valid(A)` or `Invalid` with one or more errors.
/// [`Validator::validate_to_validation`](crate::Validator::validate_to_validation)
/// produces `Validation<ConstraintViolation, T>`; combinators such as
/// [`zip`](Validation::zip) and [`combine`](Validation::combine) merge several
/// outcomes while keeping all of their errors in order.
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `A` - The success value type
///
/// # Examples
///
/// ```
/// use constraint_rail::validation::Validation;
///
/// let name = Validation::<&str, &str>::valid("alice");
/// let age = Validation::<&str, u8>::invalid("age must be positive");
///
/// let user = name.combine(age, |name, age| (name, age));
/// assert_eq!(user.errors(), ["age must be positive"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value holding a single error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from an iterator of errors.
    ///
    /// # Arguments
    ///
    /// * `errors` - The errors, in order; should not be empty
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many(["missing", "invalid"]);
    /// assert_eq!(v.errors().len(), 2);
    /// ```
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the success value, if valid.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the errors; empty when valid.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Maps the success value, leaving errors untouched.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Chains a step that may fail; `f` runs only when valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::validation::Validation;
    ///
    /// fn even(n: i32) -> Validation<&'static str, i32> {
    ///     if n % 2 == 0 { Validation::valid(n) } else { Validation::invalid("odd") }
    /// }
    ///
    /// assert_eq!(Validation::valid(4).and_then(even).into_value(), Some(4));
    /// assert!(Validation::valid(3).and_then(even).is_invalid());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Recovers from the errors; `op` runs only when invalid.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validation<E, A>
    where
        F: FnOnce(ErrorVec<E>) -> Validation<E, A>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => op(errors),
        }
    }

    /// Pairs two outcomes, keeping the errors of both (`self` first).
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.extend(e2);
                Validation::Invalid(e1)
            },
        }
    }

    /// Combines two outcomes with `f`, keeping the errors of both (`self` first).
    #[inline]
    pub fn combine<B, C, F>(self, other: Validation<E, B>, f: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Maps each error individually.
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Validation<G, A>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// Maps the whole error list at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many(["a", "b"]);
    /// let joined = v.map_errors(|errors| [errors.join(",")]);
    /// assert_eq!(joined.errors(), ["a,b".to_string()]);
    /// ```
    #[inline]
    pub fn map_errors<G, I, F>(self, f: F) -> Validation<G, A>
    where
        F: FnOnce(ErrorVec<E>) -> I,
        I: IntoIterator<Item = G>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(f(errors).into_iter().collect()),
        }
    }

    /// Maps whichever branch is active.
    #[inline]
    pub fn bimap<G, B, I, FE, FA>(self, errors_mapper: FE, value_mapper: FA) -> Validation<G, B>
    where
        FE: FnOnce(ErrorVec<E>) -> I,
        I: IntoIterator<Item = G>,
        FA: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value_mapper(value)),
            Self::Invalid(errors) => Validation::Invalid(errors_mapper(errors).into_iter().collect()),
        }
    }

    /// Collapses both branches into one value.
    #[must_use]
    #[inline]
    pub fn fold<U, FE, FA>(self, errors_mapper: FE, value_mapper: FA) -> U
    where
        FE: FnOnce(ErrorVec<E>) -> U,
        FA: FnOnce(A) -> U,
    {
        match self {
            Self::Valid(value) => value_mapper(value),
            Self::Invalid(errors) => errors_mapper(errors),
        }
    }

    /// Calls `f` with the value when valid, returning `self` unchanged.
    #[inline]
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Valid(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the errors when invalid, returning `self` unchanged.
    #[inline]
    pub fn peek_errors<F>(self, f: F) -> Self
    where
        F: FnOnce(&[E]),
    {
        if let Self::Invalid(errors) = &self {
            f(errors);
        }
        self
    }

    /// `Valid` becomes `Ok`, the error list becomes `Err`.
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// `Valid` becomes `Right`, the error list becomes `Left`.
    #[inline]
    pub fn to_either(self) -> Either<ErrorVec<E>, A> {
        match self {
            Self::Valid(value) => Either::Right(value),
            Self::Invalid(errors) => Either::Left(errors),
        }
    }

    #[inline]
    pub fn from_either(either: Either<E, A>) -> Self {
        match either {
            Either::Left(error) => Self::invalid(error),
            Either::Right(value) => Self::Valid(value),
        }
    }

    /// Returns the value, or an error built from the error list.
    #[inline]
    pub fn or_else_throw<X, F>(self, to_error: F) -> Result<A, X>
    where
        F: FnOnce(ErrorVec<E>) -> X,
    {
        self.to_result().map_err(to_error)
    }

    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}
