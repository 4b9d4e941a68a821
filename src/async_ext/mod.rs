//! Async mapper adapters for [`Either`](crate::Either) and
//! [`Validation`](crate::validation::Validation).
//!
//! Validation itself is synchronous. These adapters post-process a finished result
//! with caller-supplied async mappers: each mapper runs at most once, only for the
//! active branch, and the branch tag is preserved. They are runtime-neutral; any
//! executor can drive the returned futures.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! constraint-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use constraint_rail::Either;
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let out = rt.block_on(async {
//!     Either::<String, u32>::Right(2)
//!         .await_right_map(|n| async move { n * 10 })
//!         .await
//! });
//! assert_eq!(out, Either::Right(20));
//! ```

mod either;
mod validation;

pub use validation::{validate_all_async, validate_seq_async};
