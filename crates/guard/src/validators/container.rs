//! Homogeneous container validators
//!
//! - [`object`] - every value of a keyed container matches one validator
//! - [`array`] - every element of a sequence matches one validator
//! - [`instance`] - the value is a host instance of a given Rust type
//!
//! Containers are checked one level deep; nested shapes are expressed by
//! nesting validators.
//!
//! # Examples
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! let matrix = array(array(number()));
//! assert!(matrix.validate(&Value::array([Value::array([1, 2]), Value::array([3])])));
//! assert!(!matrix.validate(&Value::array([Value::array(["x"])])));
//! ```

use crate::foundation::Validate;
use crate::value::Value;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// OBJECT
// ============================================================================

/// Accepts objects whose every value satisfies `V`.
///
/// An empty object matches vacuously. Arrays and `Null` are not objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectOf<V> {
    inner: V,
}

impl<V> ObjectOf<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for ObjectOf<V> {
    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Object(map) => map.values().all(|v| self.inner.validate(v)),
            _ => false,
        }
    }
}

/// Creates an [`ObjectOf`] validator.
pub fn object<V: Validate>(validator: V) -> ObjectOf<V> {
    ObjectOf::new(validator)
}

// ============================================================================
// ARRAY
// ============================================================================

/// Accepts arrays whose every element satisfies `V`.
///
/// An empty array matches vacuously. Objects with index-like keys are not
/// arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayOf<V> {
    inner: V,
}

impl<V> ArrayOf<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for ArrayOf<V> {
    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Array(items) => items.iter().all(|v| self.inner.validate(v)),
            _ => false,
        }
    }
}

/// Creates an [`ArrayOf`] validator.
pub fn array<V: Validate>(validator: V) -> ArrayOf<V> {
    ArrayOf::new(validator)
}

// ============================================================================
// INSTANCE
// ============================================================================

/// Accepts [`Value::Instance`]s wrapping exactly a `T`.
///
/// Membership is nominal: two distinct types with identical fields do not
/// match each other.
pub struct InstanceOf<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T: Any> Validate for InstanceOf<T> {
    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Instance(instance) => instance.is::<T>(),
            _ => false,
        }
    }
}

impl<T> Clone for InstanceOf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for InstanceOf<T> {}

impl<T> fmt::Debug for InstanceOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InstanceOf")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

/// Creates an [`InstanceOf`] validator.
///
/// # Examples
///
/// ```
/// use nebula_guard::prelude::*;
///
/// struct Connection;
///
/// let v = instance::<Connection>();
/// assert!(v.validate(&Value::instance(Connection)));
/// assert!(!v.validate(&Value::instance(42_u32)));
/// assert!(!v.validate(&Value::object([("open", true)])));
/// ```
#[must_use]
pub fn instance<T: Any>() -> InstanceOf<T> {
    InstanceOf {
        _phantom: PhantomData,
    }
}
