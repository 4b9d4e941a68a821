//! Async prelude: the sync [`prelude`](crate::prelude) plus the async combinators.
//!
//! ```
//! use constraint_rail::prelude_async::*;
//!
//! struct Token(String);
//!
//! let validator = Validator::<Token>::builder()
//!     .constraint("token", |t: &Token| &t.0, |c| c.not_blank())
//!     .build();
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let len = rt.block_on(async {
//!     validator
//!         .validate_to_either(Token("abc".into()))
//!         .await_fold(|v| async move { v.len() }, |t| async move { t.0.len() })
//!         .await
//! });
//! assert_eq!(len, 3);
//! ```
//!
//! The inherent `await_*` methods on [`Either`] and [`Validation`] need no import
//! beyond the types themselves.

pub use crate::prelude::*;

pub use crate::async_ext::{validate_all_async, validate_seq_async};
