//! ASSERTS wrapper - turn a rejection into an error
//!
//! Bridges a boolean validator into control flow: callers propagate the
//! failure with `?` instead of branching on the result.
//!
//! # Examples
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! fn port(value: &Value) -> Result<f64, AssertionError> {
//!     asserts(number()).assert(value)?;
//!     Ok(value.as_f64().unwrap_or_default())
//! }
//!
//! assert_eq!(port(&Value::from(8080)), Ok(8080.0));
//! assert_eq!(port(&Value::from("8080")), Err(AssertionError));
//! ```

use crate::foundation::{AssertionError, AssertionResult, Validate};
use crate::value::Value;

/// Wraps a validator so that rejection becomes an [`AssertionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asserts<V> {
    inner: V,
}

impl<V> Asserts<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Asserts<V> {
    /// Returns `Ok(())` if the wrapped validator accepts `value`.
    ///
    /// # Errors
    ///
    /// [`AssertionError`] if the value is rejected.
    pub fn assert(&self, value: &Value) -> AssertionResult {
        if self.inner.validate(value) {
            Ok(())
        } else {
            tracing::debug!(kind = %value.kind(), "value rejected by assertion");
            Err(AssertionError)
        }
    }
}

/// Creates an [`Asserts`] wrapper.
pub fn asserts<V: Validate>(validator: V) -> Asserts<V> {
    Asserts::new(validator)
}
