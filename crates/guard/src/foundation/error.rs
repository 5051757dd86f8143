//! Error types
//!
//! Validators report a mismatch by returning `false`. The only error in the
//! crate is raised by [`Asserts`](crate::combinators::Asserts).

/// Returned by [`Asserts::assert`](crate::combinators::Asserts::assert) when
/// the wrapped validator rejects a value.
///
/// Deliberately carries no detail: no path, no expected or actual value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("assertion failed")]
pub struct AssertionError;

/// Result of an assertion.
pub type AssertionResult = Result<(), AssertionError>;
