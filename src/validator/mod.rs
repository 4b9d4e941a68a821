//! Validators, their builder, and group gating.
//!
//! A [`Validator<T>`] is an immutable list of entries (field rules, nested validators,
//! element validators, conditional blocks) built by a [`ValidatorBuilder<T>`].
//! Evaluation walks the entries in registration order, depth-first, and collects every
//! failure. In fail-fast mode the walk stops at the first violation instead.
//!
//! Nested validators are evaluated as if flattened into the validator on which
//! `validate` is called: that validator's separator and formatter apply throughout.
//!
//! # Examples
//!
//! ```
//! use constraint_rail::prelude::*;
//!
//! struct Point {
//!     x: i32,
//! }
//!
//! let validator = Validator::<Point>::builder()
//!     .constraint("x", |p: &Point| &p.x, |c| c.greater_than(0))
//!     .build();
//!
//! let shared = validator.clone();
//! let handle = std::thread::spawn(move || shared.validate(&Point { x: -1 }).len());
//! assert_eq!(handle.join().unwrap(), 1);
//! assert!(validator.validate(&Point { x: 1 }).is_valid());
//! ```
use core::fmt;

use crate::either::Either;
use crate::types::alloc_type::{Arc, Cow};
use crate::types::{
    ConstraintViolation, ConstraintViolations, ConstraintViolationsError, MessageFormatter,
};
use crate::validation::Validation;

mod builder;
mod entry;
mod group;

pub use builder::ValidatorBuilder;
pub use group::{ConstraintCondition, ConstraintGroup};

use entry::{Entries, EvalContext};

/// Separator placed between nested names unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = ".";

const DEFAULT_GROUPS: &[ConstraintGroup] = &[ConstraintGroup::DEFAULT];

struct Inner<T> {
    entries: Entries<T>,
    separator: Cow<'static, str>,
    formatter: Arc<dyn MessageFormatter>,
}

/// Immutable, thread-safe validator for `T`.
///
/// Cloning is cheap and shares the registered entries.
pub struct Validator<T> {
    inner: Arc<Inner<T>>,
    fail_fast: bool,
}

impl<T: 'static> Validator<T> {
    #[must_use]
    #[inline]
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder::new()
    }
}

impl<T> Validator<T> {
    pub(crate) fn from_parts(
        entries: Entries<T>,
        separator: Cow<'static, str>,
        formatter: Arc<dyn MessageFormatter>,
        fail_fast: bool,
    ) -> Self {
        Self { inner: Arc::new(Inner { entries, separator, formatter }), fail_fast }
    }

    /// Returns a validator sharing the same entries with fail-fast mode set.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::prelude::*;
    ///
    /// let validator = Validator::<String>::builder()
    ///     .constraint("s", |s: &String| s, |c| c.not_blank().greater_than(3))
    ///     .build();
    ///
    /// assert_eq!(validator.validate(&" ".to_string()).len(), 2);
    /// assert_eq!(validator.fail_fast(true).validate(&" ".to_string()).len(), 1);
    /// ```
    #[must_use]
    pub fn fail_fast(&self, fail_fast: bool) -> Self {
        Self { inner: Arc::clone(&self.inner), fail_fast }
    }

    #[must_use]
    #[inline]
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Validates `target` with no group supplied ([`ConstraintGroup::DEFAULT`] is active).
    #[must_use]
    pub fn validate(&self, target: &T) -> ConstraintViolations {
        self.validate_with_groups(target, &[])
    }

    /// Validates `target`; conditional blocks run when their condition holds for any
    /// of `groups`. An empty slice behaves like [`validate`](Self::validate).
    #[must_use]
    pub fn validate_with_groups(&self, target: &T, groups: &[ConstraintGroup]) -> ConstraintViolations {
        let groups = if groups.is_empty() { DEFAULT_GROUPS } else { groups };
        let mut ctx = EvalContext::new(
            &self.inner.separator,
            groups,
            &*self.inner.formatter,
            self.fail_fast,
        );
        self.evaluate_in(target, &mut ctx);
        let violations = ConstraintViolations::from(ctx.into_violations());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            violations = violations.len(),
            groups = groups.len(),
            "validation finished"
        );

        violations
    }

    pub(crate) fn evaluate_in(&self, target: &T, ctx: &mut EvalContext<'_>) {
        for entry in &self.inner.entries {
            if ctx.is_done() {
                return;
            }
            entry.evaluate(target, ctx);
        }
    }

    /// Returns `target` back when valid, otherwise the aggregate error.
    pub fn validated(&self, target: T) -> Result<T, ConstraintViolationsError> {
        self.validated_with_groups(target, &[])
    }

    pub fn validated_with_groups(
        &self,
        target: T,
        groups: &[ConstraintGroup],
    ) -> Result<T, ConstraintViolationsError> {
        self.validate_with_groups(&target, groups).into_result().map(|()| target)
    }

    /// `Right(target)` when valid, `Left(violations)` otherwise.
    pub fn validate_to_either(&self, target: T) -> Either<ConstraintViolations, T> {
        self.validate_to_either_with_groups(target, &[])
    }

    pub fn validate_to_either_with_groups(
        &self,
        target: T,
        groups: &[ConstraintGroup],
    ) -> Either<ConstraintViolations, T> {
        let violations = self.validate_with_groups(&target, groups);
        if violations.is_valid() {
            Either::Right(target)
        } else {
            Either::Left(violations)
        }
    }

    /// `Valid(target)` when valid, `Invalid(violations)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use constraint_rail::prelude::*;
    ///
    /// let validator = Validator::<String>::builder()
    ///     .constraint("s", |s: &String| s, |c| c.not_empty().less_than(3))
    ///     .build();
    ///
    /// let result = validator.validate_to_validation("abcd".to_string());
    /// let keys: Vec<_> = result.iter_errors().map(|v| v.message_key().to_string()).collect();
    /// assert_eq!(keys, ["container.lessThan"]);
    /// ```
    pub fn validate_to_validation(&self, target: T) -> Validation<ConstraintViolation, T> {
        self.validate_to_validation_with_groups(target, &[])
    }

    pub fn validate_to_validation_with_groups(
        &self,
        target: T,
        groups: &[ConstraintGroup],
    ) -> Validation<ConstraintViolation, T> {
        let violations = self.validate_with_groups(&target, groups);
        if violations.is_valid() {
            Validation::Valid(target)
        } else {
            Validation::invalid_many(violations)
        }
    }

    #[must_use]
    #[inline]
    pub fn message_key_separator(&self) -> &str {
        &self.inner.separator
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner), fail_fast: self.fail_fast }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("entries", &self.inner.entries.len())
            .field("separator", &self.inner.separator)
            .field("fail_fast", &self.fail_fast)
            .finish_non_exhaustive()
    }
}
