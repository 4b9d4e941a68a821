//! Aggregate error raised by the opt-in throwing wrappers.

use core::fmt;

use crate::types::alloc_type::{String, Vec};
use crate::types::{ConstraintViolation, ConstraintViolations};

/// Platform line separator used to join violation lines.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Platform line separator used to join violation lines.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

const HEADER: &str = "Constraint violations found!";

/// Error carrying every violation of a failed validation.
///
/// The message is a fixed header line followed by one `* <message>` line per
/// violation, in evaluation order.
///
/// # Examples
///
/// ```
/// use constraint_rail::prelude::*;
///
/// struct User {
///     first_name: String,
///     age: i32,
/// }
///
/// let validator = Validator::<User>::builder()
///     .constraint("firstName", |u: &User| &u.first_name, |c| c.not_blank())
///     .constraint("age", |u: &User| &u.age, |c| c.greater_than(0))
///     .build();
///
/// let err = validator.validated(User { first_name: " ".into(), age: 0 }).err().unwrap();
/// let lines: Vec<_> = err.to_string().lines().map(String::from).collect();
/// assert_eq!(lines, [
///     "Constraint violations found!",
///     "* \"firstName\" must not be blank",
///     "* \"age\" must be greater than 0",
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolationsError {
    message: String,
    violations: ConstraintViolations,
}

impl ConstraintViolationsError {
    pub fn new(violations: ConstraintViolations) -> Self {
        let mut message = String::from(HEADER);
        for v in &violations {
            message.push_str(LINE_SEPARATOR);
            message.push_str("* ");
            message.push_str(v.message());
        }
        Self { message, violations }
    }

    /// Creates the error with a caller-supplied message instead of the line listing.
    pub fn with_message(message: impl Into<String>, violations: ConstraintViolations) -> Self {
        Self { message: message.into(), violations }
    }

    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    #[inline]
    pub fn violations(&self) -> &ConstraintViolations {
        &self.violations
    }

    #[must_use]
    #[inline]
    pub fn into_violations(self) -> ConstraintViolations {
        self.violations
    }
}

impl fmt::Display for ConstraintViolationsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for ConstraintViolationsError {}

impl From<ConstraintViolations> for ConstraintViolationsError {
    #[inline]
    fn from(violations: ConstraintViolations) -> Self {
        Self::new(violations)
    }
}

impl From<Vec<ConstraintViolation>> for ConstraintViolationsError {
    #[inline]
    fn from(violations: Vec<ConstraintViolation>) -> Self {
        Self::new(violations.into())
    }
}
