//! Core traits for the validation system
//!
//! This module defines the contract every validator implements, the fluent
//! extension trait that composes them, and the shared type-erased handle used
//! by schemas and variadic combinators.

use crate::combinators::{And, Asserts, Nullable, Optional, Or};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait that all validators implement.
///
/// A validator classifies an untyped [`Value`]: `true` means the value has
/// the shape the validator describes. Implementations must be total (answer
/// for every value, never panic) and pure (same value, same answer).
///
/// Closures `Fn(&Value) -> bool` are validators too, which makes ad-hoc
/// predicates composable with the built-in ones.
///
/// # Examples
///
/// ```
/// use nebula_guard::{Validate, Value};
///
/// struct Positive;
///
/// impl Validate for Positive {
///     fn validate(&self, value: &Value) -> bool {
///         value.as_f64().is_some_and(|n| n > 0.0)
///     }
/// }
///
/// assert!(Positive.validate(&Value::from(3)));
/// assert!(!Positive.validate(&Value::from("3")));
/// ```
pub trait Validate: Send + Sync {
    /// Returns `true` if `value` conforms to this validator.
    fn validate(&self, value: &Value) -> bool;
}

impl<F> Validate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn validate(&self, value: &Value) -> bool {
        self(value)
    }
}

// ============================================================================
// DYNAMIC VALIDATOR
// ============================================================================

/// A shared, type-erased validator.
///
/// Schemas and the variadic [`any`](crate::combinators::any) /
/// [`all`](crate::combinators::all) hold heterogeneous validators through
/// this handle. Cloning is a reference-count bump.
#[derive(Clone)]
pub struct DynValidator(Arc<dyn Validate>);

impl DynValidator {
    pub fn new<V: Validate + 'static>(validator: V) -> Self {
        Self(Arc::new(validator))
    }
}

impl Validate for DynValidator {
    #[inline]
    fn validate(&self, value: &Value) -> bool {
        self.0.validate(value)
    }
}

impl fmt::Debug for DynValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynValidator")
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use nebula_guard::prelude::*;
///
/// let id = number().or(string());
/// assert!(id.validate(&Value::from(7)));
/// assert!(id.validate(&Value::from("7")));
/// assert!(!id.validate(&Value::from(true)));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Logical AND; short-circuits on the first rejection.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Logical OR; short-circuits on the first acceptance.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate,
    {
        Or::new(self, other)
    }

    /// Also accepts [`Value::Undefined`].
    fn optional(self) -> Optional<Self> {
        crate::combinators::optional(self)
    }

    /// Also accepts [`Value::Null`].
    fn nullable(self) -> Nullable<Self> {
        crate::combinators::nullable(self)
    }

    /// Turns the validator into an assertion.
    fn asserts(self) -> Asserts<Self> {
        Asserts::new(self)
    }

    /// Erases the validator's type.
    fn boxed(self) -> DynValidator
    where
        Self: 'static,
    {
        DynValidator::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        fn validate(&self, _value: &Value) -> bool {
            true
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate(&Value::Undefined));
    }

    #[test]
    fn test_closure_is_validator() {
        let short = |v: &Value| v.as_str().is_some_and(|s| s.len() < 3);
        assert!(short.validate(&Value::from("ab")));
        assert!(!short.validate(&Value::from("abc")));
    }

    #[test]
    fn test_boxed_keeps_behaviour() {
        let boxed = AlwaysValid.boxed();
        let shared = boxed.clone();
        assert!(boxed.validate(&Value::Null));
        assert!(shared.validate(&Value::from(1)));
    }
}
