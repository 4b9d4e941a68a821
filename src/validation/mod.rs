//! Error-accumulating validation results.
//!
//! [`Validation`] keeps a success value or every error collected along the way,
//! which makes it the functional counterpart of
//! [`ConstraintViolations`](crate::ConstraintViolations).
//!
//! # Examples
//!
//! ```
//! use constraint_rail::validation::Validation;
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many(["err1", "err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
