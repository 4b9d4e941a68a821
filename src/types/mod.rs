//! Violation, message, and formatter types.
//!
//! This module holds the result model produced by a [`Validator`](crate::Validator):
//! typed message arguments, message keys with default templates, formatters,
//! individual violations and their ordered aggregate.
//!
//! # Examples
//!
//! ```
//! use constraint_rail::types::{Arg, ConstraintViolation, ConstraintViolations, ViolationMessage};
//! use constraint_rail::SimpleMessageFormatter;
//!
//! let violations: ConstraintViolations = [ConstraintViolation::new(
//!     "email",
//!     &ViolationMessage::CHAR_SEQUENCE_EMAIL,
//!     [Arg::from("nope")].into_iter().collect(),
//!     &SimpleMessageFormatter,
//! )]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(violations[0].to_string(), "\"email\" must be a valid email address");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod arg;
pub mod formatter;
pub mod message;
pub mod violation;
pub mod violations;
pub mod violations_error;

pub use arg::*;
pub use formatter::{MessageFormatter, SimpleMessageFormatter, TemplateMessageFormatter};
pub use message::*;
pub use violation::*;
pub use violations::*;
pub use violations_error::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element to avoid heap allocations
/// in the common case of one error per validation step.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Argument list of a violation or a rule.
///
/// Most rules carry at most a bound and a violated value next to the path,
/// so four inline slots cover them without allocating.
pub type ArgVec = SmallVec<[Arg; 4]>;
