//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use constraint_rail::prelude::*;
//!
//! struct Book {
//!     isbn: String,
//!     pages: u32,
//! }
//!
//! let validator = Validator::<Book>::builder()
//!     .constraint("isbn", |b: &Book| &b.isbn, |c| c.not_blank().fixed_size(13))
//!     .constraint("pages", |b: &Book| &b.pages, |c| c.greater_than(0))
//!     .build();
//!
//! let book = Book { isbn: "9780262510875".into(), pages: 657 };
//! assert!(validator.validate(&book).is_valid());
//! ```
//!
//! # What's Included
//!
//! - **Validators**: [`Validator`], [`ValidatorBuilder`], [`ConstraintGroup`], [`ConstraintCondition`]
//! - **Constraints**: the per-kind [`Constraint`] aliases and [`CustomConstraint`]
//! - **Results**: [`ConstraintViolation`], [`ConstraintViolations`],
//!   [`ConstraintViolationsError`], [`Either`], [`Validation`]
//! - **Messages**: [`Arg`], [`ViolationMessage`], [`MessageFormatter`] and its two implementations

pub use crate::constraint::{
    BooleanConstraint, CharSequenceConstraint, CollectionConstraint, Constraint, CustomConstraint,
    MapConstraint, NumericConstraint, ObjectConstraint,
};
pub use crate::either::Either;
pub use crate::types::{
    Arg, ConstraintViolation, ConstraintViolations, ConstraintViolationsError, MessageFormatter,
    SimpleMessageFormatter, TemplateMessageFormatter, ViolationMessage,
};
pub use crate::validation::Validation;
pub use crate::validator::{ConstraintCondition, ConstraintGroup, Validator, ValidatorBuilder};

/// Result of [`Validator::validated`].
pub type ValidatedResult<T> = Result<T, ConstraintViolationsError>;
