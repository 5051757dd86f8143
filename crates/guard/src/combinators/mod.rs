//! Combinators for composing validators
//!
//! | Combinator | Accepts when |
//! |---|---|
//! | [`Or`] / [`any`] | at least one validator accepts (stops at the first) |
//! | [`And`] / [`all`] | every validator accepts (stops at the first rejection) |
//! | [`optional`] | value is `Undefined`, or the inner validator accepts |
//! | [`nullable`] | value is `Null`, or the inner validator accepts |
//! | [`Asserts`] | wraps a validator; rejection becomes [`AssertionError`](crate::AssertionError) |
//!
//! Combinators hold no state between calls: every call re-evaluates its
//! constituents against the current value, in order.

pub mod and;
pub mod asserts;
pub mod optional;
pub mod or;

pub use and::{All, And, all, and};
pub use asserts::{Asserts, asserts};
pub use optional::{Nullable, Optional, nullable, optional};
pub use or::{Any, Or, any, or};
