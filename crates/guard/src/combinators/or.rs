//! OR combinators - logical disjunction of validators
//!
//! [`Or`] joins two validators of any types; [`Any`] joins a runtime list of
//! [`DynValidator`]s. Both evaluate left to right and stop at the first
//! validator that accepts.
//!
//! # Examples
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! let id = any([number().boxed(), string().boxed()]);
//! assert!(id.validate(&Value::from(1)));
//! assert!(id.validate(&Value::from("x")));
//! assert!(!id.validate(&Value::from(true)));
//! ```

use crate::foundation::{DynValidator, Validate};
use crate::value::Value;

/// Combines two validators with logical OR.
///
/// If the left validator accepts, the right one is not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate,
{
    #[inline]
    fn validate(&self, value: &Value) -> bool {
        self.left.validate(value) || self.right.validate(value)
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate,
{
    Or::new(left, right)
}

/// Accepts a value if at least one of its validators does.
///
/// An empty `Any` rejects everything.
#[derive(Debug, Clone, Default)]
pub struct Any {
    validators: Vec<DynValidator>,
}

impl Any {
    pub fn validators(&self) -> &[DynValidator] {
        &self.validators
    }
}

impl Validate for Any {
    fn validate(&self, value: &Value) -> bool {
        self.validators.iter().any(|v| v.validate(value))
    }
}

impl FromIterator<DynValidator> for Any {
    fn from_iter<I: IntoIterator<Item = DynValidator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

/// Creates an [`Any`] combinator.
///
/// Validators run in the given order; evaluation stops at the first one
/// that accepts.
#[must_use]
pub fn any<I>(validators: I) -> Any
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

    fn is_string(v: &Value) -> bool {
        matches!(v, Value::String(_))
    }

    fn counting(calls: &Arc<AtomicUsize>, answer: bool) -> impl Validate + 'static {
        let calls = Arc::clone(calls);
        move |_: &Value| {
            calls.fetch_add(1, Ordering::SeqCst);
            answer
        }
    }

    #[test]
    fn test_or_left_passes() {
        assert!(Or::new(is_number, is_string).validate(&Value::from(1)));
    }

    #[test]
    fn test_or_right_passes() {
        assert!(Or::new(is_number, is_string).validate(&Value::from("x")));
    }

    #[test]
    fn test_or_both_fail() {
        assert!(!or(is_number, is_string).validate(&Value::Null));
    }

    #[test]
    fn test_or_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let validator = Or::new(is_number, counting(&calls, true));
        assert!(validator.validate(&Value::from(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(validator.validate(&Value::Null));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_any_in_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let validator = any([
            is_string.boxed(),
            is_number.boxed(),
            counting(&calls, true).boxed(),
        ]);
        assert!(validator.validate(&Value::from(2)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(validator.validate(&Value::from(true)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_any_empty_rejects() {
        assert!(!any([]).validate(&Value::Null));
        assert!(Any::default().validators().is_empty());
    }
}
