//! OPTIONAL / NULLABLE combinators - admit an absence marker
//!
//! `optional(v)` is exactly `empty().or(v)` and `nullable(v)` is exactly
//! `nil().or(v)`; the two markers stay distinct.

use super::or::Or;
use crate::validators::{Empty, Nil, empty, nil};

/// Accepts [`Value::Undefined`](crate::Value::Undefined) or anything `V`
/// accepts.
pub type Optional<V> = Or<Empty, V>;

/// Accepts [`Value::Null`](crate::Value::Null) or anything `V` accepts.
pub type Nullable<V> = Or<Nil, V>;

/// Makes a validator tolerate a missing value.
///
/// # Examples
///
/// ```
/// use nebula_guard::prelude::*;
///
/// let v = optional(number());
/// assert!(v.validate(&Value::from(1)));
/// assert!(v.validate(&Value::Undefined));
/// assert!(!v.validate(&Value::Null));
/// ```
pub fn optional<V>(validator: V) -> Optional<V> {
    Or::new(empty(), validator)
}

/// Makes a validator tolerate an explicit null.
///
/// # Examples
///
/// ```
/// use nebula_guard::prelude::*;
///
/// let v = nullable(number());
/// assert!(v.validate(&Value::Null));
/// assert!(!v.validate(&Value::Undefined));
/// ```
pub fn nullable<V>(validator: V) -> Nullable<V> {
    Or::new(nil(), validator)
}
