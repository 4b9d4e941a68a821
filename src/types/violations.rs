use core::ops::Index;

use crate::types::alloc_type::Vec;
use crate::types::{Arg, ConstraintViolation, ConstraintViolationsError, ViolationDetail};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ordered outcome of one `validate` call.
///
/// Violations appear in evaluation order: registration order of the entries,
/// depth-first into nested validators, ascending element order for collections.
/// An empty list means the target is valid.
///
/// # Examples
///
/// ```
/// use constraint_rail::prelude::*;
///
/// let validator = Validator::<String>::builder()
///     .constraint("value", |s: &String| s, |c| c.not_empty())
///     .build();
///
/// let violations = validator.validate(&String::new());
/// assert!(!violations.is_valid());
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].message_key(), "container.notEmpty");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintViolations {
    violations: Vec<ConstraintViolation>,
}

impl ConstraintViolations {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no violation was recorded.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ConstraintViolation> {
        self.violations.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ConstraintViolation> {
        self.violations.iter()
    }

    #[must_use]
    #[inline]
    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    #[must_use]
    #[inline]
    pub fn into_violations(self) -> Vec<ConstraintViolation> {
        self.violations
    }

    pub fn push(&mut self, violation: ConstraintViolation) {
        self.violations.push(violation);
    }

    /// Detail records for every violation, in order.
    #[must_use]
    pub fn details(&self) -> Vec<ViolationDetail> {
        self.violations.iter().map(ConstraintViolation::detail).collect()
    }

    /// Visits each violation as `(name, message_key, args, message)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::prelude::*;
    ///
    /// let validator = Validator::<u8>::builder()
    ///     .constraint("n", |n: &u8| n, |c| c.greater_than(5))
    ///     .build();
    ///
    /// let mut seen = Vec::new();
    /// validator.validate(&1).apply(|name, key, _args, _message| {
    ///     seen.push(format!("{name}:{key}"));
    /// });
    /// assert_eq!(seen, ["n:numeric.greaterThan"]);
    /// ```
    pub fn apply<F>(&self, mut callback: F)
    where
        F: FnMut(&str, &str, &[Arg], &str),
    {
        for v in &self.violations {
            callback(v.name(), v.message_key(), v.args(), v.message());
        }
    }

    /// Converts into `Ok(())` when valid, otherwise the aggregate error.
    pub fn into_result(self) -> Result<(), ConstraintViolationsError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ConstraintViolationsError::new(self))
        }
    }

    /// Maps the violations to a caller-defined error when invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::ConstraintViolations;
    ///
    /// let empty = ConstraintViolations::new();
    /// assert_eq!(empty.throw_if_invalid(|v| v.len()), Ok(()));
    /// ```
    pub fn throw_if_invalid<E, F>(self, to_error: F) -> Result<(), E>
    where
        F: FnOnce(ConstraintViolations) -> E,
    {
        if self.is_valid() {
            Ok(())
        } else {
            Err(to_error(self))
        }
    }
}

impl Index<usize> for ConstraintViolations {
    type Output = ConstraintViolation;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.violations[index]
    }
}

impl From<Vec<ConstraintViolation>> for ConstraintViolations {
    #[inline]
    fn from(violations: Vec<ConstraintViolation>) -> Self {
        Self { violations }
    }
}

impl FromIterator<ConstraintViolation> for ConstraintViolations {
    fn from_iter<I: IntoIterator<Item = ConstraintViolation>>(iter: I) -> Self {
        Self { violations: iter.into_iter().collect() }
    }
}

impl Extend<ConstraintViolation> for ConstraintViolations {
    fn extend<I: IntoIterator<Item = ConstraintViolation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}

impl IntoIterator for ConstraintViolations {
    type Item = ConstraintViolation;
    type IntoIter = crate::types::alloc_type::vec::IntoIter<ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintViolations {
    type Item = &'a ConstraintViolation;
    type IntoIter = core::slice::Iter<'a, ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
