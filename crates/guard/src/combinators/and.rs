//! AND combinators - logical conjunction of validators
//!
//! [`And`] joins two validators; [`All`] joins a runtime list. Evaluation is
//! left to right and stops at the first rejection.
//!
//! # Examples
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! let named = record! { "name" => string() };
//! let aged = record! { "age" => number() };
//! let person = all([named.boxed(), aged.boxed()]);
//!
//! let alice = Value::object([("name", Value::from("alice")), ("age", Value::from(31))]);
//! assert!(person.validate(&alice));
//! assert!(!person.validate(&Value::object([("name", "bob")])));
//! ```

use crate::foundation::{DynValidator, Validate};
use crate::value::Value;

/// Combines two validators with logical AND.
///
/// If the left validator rejects, the right one is not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    #[inline]
    fn validate(&self, value: &Value) -> bool {
        self.left.validate(value) && self.right.validate(value)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}

/// Accepts a value only if every one of its validators does.
///
/// An empty `All` accepts everything.
#[derive(Debug, Clone, Default)]
pub struct All {
    validators: Vec<DynValidator>,
}

impl All {
    pub fn validators(&self) -> &[DynValidator] {
        &self.validators
    }
}

impl Validate for All {
    fn validate(&self, value: &Value) -> bool {
        self.validators.iter().all(|v| v.validate(value))
    }
}

impl FromIterator<DynValidator> for All {
    fn from_iter<I: IntoIterator<Item = DynValidator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

/// Creates an [`All`] combinator.
#[must_use]
pub fn all<I>(validators: I) -> All
where
    I: IntoIterator<Item = DynValidator>,
{
    validators.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn is_number(v: &Value) -> bool {
        matches!(v, Value::Number(_))
    }

    fn is_finite(v: &Value) -> bool {
        v.as_f64().is_some_and(f64::is_finite)
    }

    #[test]
    fn test_and_both_pass() {
        assert!(And::new(is_number, is_finite).validate(&Value::from(1.5)));
    }

    #[test]
    fn test_and_right_fails() {
        assert!(!and(is_number, is_finite).validate(&Value::from(f64::INFINITY)));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let validator = is_number.and(move |_: &Value| {
            seen.fetch_add(1, Ordering::SeqCst);
            true
        });
        assert!(!validator.validate(&Value::from("1")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_stops_at_first_rejection() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let validator = all([
            is_number.boxed(),
            is_finite.boxed(),
            (move |_: &Value| {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            })
            .boxed(),
        ]);
        assert!(!validator.validate(&Value::from(f64::NAN)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(validator.validate(&Value::from(3)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(validator.validators().len(), 3);
    }

    #[test]
    fn test_all_empty_accepts() {
        assert!(all([]).validate(&Value::Undefined));
    }
}
