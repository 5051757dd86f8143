//! Foundation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Type erasure**: [`DynValidator`]
//! - **Errors**: [`AssertionError`]
//!
//! # Architecture
//!
//! ## 1. One contract
//!
//! A validator is anything that maps a [`Value`](crate::Value) to `bool`:
//!
//! ```rust,ignore
//! impl Validate for Positive {
//!     fn validate(&self, value: &Value) -> bool {
//!         value.as_f64().is_some_and(|n| n > 0.0)
//!     }
//! }
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose through combinators; the result is again a validator:
//!
//! ```rust,ignore
//! let id = number().or(string());
//! let maybe_id = id.optional();
//! ```
//!
//! ## 3. Static by default, dynamic when needed
//!
//! `.or()` / `.and()` build nested generic types that inline fully.
//! Schemas and variadic combinators store [`DynValidator`] handles instead,
//! since their members have different types.

pub mod error;
pub mod traits;

pub use error::{AssertionError, AssertionResult};
pub use traits::{DynValidator, Validate, ValidateExt};
