//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `constraint_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building and Running a Validator
//!
//! ```
//! use constraint_rail::prelude::*;
//!
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let validator = Validator::<User>::builder()
//!     .constraint("name", |u: &User| &u.name, |c| c.not_blank().less_than_or_equal(20))
//!     .constraint("age", |u: &User| &u.age, |c| c.greater_than_or_equal(0).less_than(120))
//!     .build();
//!
//! let violations = validator.validate(&User { name: "".into(), age: 200 });
//! assert!(!violations.is_valid());
//! assert_eq!(violations.len(), 2);
//! assert_eq!(violations[0].message(), "\"name\" must not be blank");
//! assert_eq!(violations[1].message(), "\"age\" must be less than 120");
//! ```
//!
//! ## Nested Paths
//!
//! ```
//! use constraint_rail::prelude::*;
//!
//! struct Address {
//!     city: String,
//! }
//!
//! struct Order {
//!     items: Vec<Address>,
//! }
//!
//! let address = Validator::<Address>::builder()
//!     .constraint("city", |a: &Address| &a.city, |c| c.not_empty())
//!     .build();
//!
//! let order = Validator::<Order>::builder()
//!     .for_each("items", |o: &Order| &o.items, &address)
//!     .build();
//!
//! let violations = order.validate(&Order { items: vec![Address { city: String::new() }] });
//! assert_eq!(violations[0].name(), "items[0].city");
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use constraint_rail::validation::Validation;
//!
//! let v1: Validation<&str, i32> = Validation::Valid(10);
//! let v2: Validation<&str, i32> = Validation::invalid("error");
//! let combined: Validation<&str, Vec<i32>> = vec![v1, v2].into_iter().collect();
//!
//! assert!(combined.is_invalid());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Constraint rules and the value-category traits they dispatch on
pub mod constraint;
/// Conversions between Result, Either, Validation, and ConstraintViolations
pub mod convert;
/// Two-branch Either result type
pub mod either;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Violation, message, and formatter types
pub mod types;
/// Validation type for error accumulation
pub mod validation;
/// Validator, builder, and group gating
pub mod validator;

/// Async mapper adapters for Either and Validation (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use constraint::{
    BooleanConstraint, CharSequenceConstraint, CollectionConstraint, Constraint,
    ConstraintPredicate, CustomConstraint, MapConstraint, NullValidity, NumericConstraint,
    ObjectConstraint, TextSize,
};
pub use convert::*;
pub use either::Either;
pub use types::{
    Arg, ArgVec, ConstraintViolation, ConstraintViolations, ConstraintViolationsError, ErrorVec,
    MessageFormatter, SimpleMessageFormatter, TemplateMessageFormatter, ViolationDetail,
    ViolationMessage,
};
pub use validation::Validation;
pub use validator::{ConstraintCondition, ConstraintGroup, Validator, ValidatorBuilder};
