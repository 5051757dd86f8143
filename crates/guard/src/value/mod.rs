//! Untyped runtime values
//!
//! Every validator in this crate inspects a [`Value`]: a closed set of runtime
//! kinds, resolved with a single `match` per call.
//!
//! Containers and host instances are reference counted. Cloning a `Value`
//! therefore keeps its identity, which is what [`Value::strict_eq`] (and the
//! [`literal`](crate::validators::literal) validator built on it) compares.
//!
//! # Examples
//!
//! ```
//! use nebula_guard::{Kind, Value};
//!
//! let user = Value::object([("name", Value::from("alice")), ("age", Value::from(31))]);
//! assert_eq!(user.kind(), Kind::Object);
//! assert_eq!(user.get("name"), Value::from("alice"));
//! assert!(user.get("email").is_undefined());
//! ```

mod convert;

use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// VALUE
// ============================================================================

/// An untyped value as seen by validators.
///
/// There are two distinct absence markers: [`Value::Undefined`] stands for a
/// missing key or index, [`Value::Null`] for an explicit null.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Missing value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    Bool(bool),
    /// Any number, including NaN and the infinities.
    Number(f64),
    String(Arc<str>),
    /// Ordered sequence.
    Array(Arc<Vec<Value>>),
    /// Keyed container, in insertion order.
    Object(Arc<IndexMap<String, Value>>),
    /// Opaque host value of some nominal Rust type.
    Instance(Instance),
}

impl Value {
    /// Builds an `Object` from key/value pairs. Later duplicates win.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<IndexMap<_, _>>();
        Self::Object(Arc::new(map))
    }

    /// Builds an `Array` from elements.
    pub fn array<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(Arc::new(elements.into_iter().map(Into::into).collect()))
    }

    /// Wraps a host value so that [`instance`](crate::validators::instance)
    /// can test its type.
    pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
        Self::Instance(Instance::new(value))
    }

    /// Returns the discriminant of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
            Self::Instance(_) => Kind::Instance,
        }
    }

    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Object(map) => Some(&**map),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Returns the value stored under `key`.
    ///
    /// Yields [`Value::Undefined`] when the key is missing or `self` is not
    /// an object, mirroring property access on a dynamic value.
    pub fn get(&self, key: &str) -> Value {
        self.as_object()
            .and_then(|map| map.get(key))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the element at `index`, or [`Value::Undefined`].
    pub fn at(&self, index: usize) -> Value {
        self.as_array()
            .and_then(|items| items.get(index))
            .cloned()
            .unwrap_or_default()
    }

    /// Strict equality.
    ///
    /// Primitives compare by value (`NaN` is never equal to itself, `0.0`
    /// equals `-0.0`). Arrays, objects and instances compare by identity: two
    /// values are equal only if one was cloned from the other.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Instance(a), Self::Instance(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Structural equality: containers compare element-wise, instances by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => self.strict_eq(other),
        }
    }
}

// ============================================================================
// KIND
// ============================================================================

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Instance,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Instance => "instance",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// INSTANCE
// ============================================================================

/// A shared, type-erased host value.
#[derive(Clone)]
pub struct Instance {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Instance {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns `true` if the wrapped value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrows the wrapped value as a `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Name of the wrapped type, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Instance").field(&self.type_name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(Value::from(true).kind().to_string(), "boolean");
        assert_eq!(Value::Undefined.kind().to_string(), "undefined");
        assert_eq!(Value::array([1, 2]).kind().to_string(), "array");
    }

    #[test]
    fn test_get_missing_is_undefined() {
        let obj = Value::object([("a", 1)]);
        assert_eq!(obj.get("a"), Value::from(1));
        assert!(obj.get("b").is_undefined());
        assert!(Value::from("a").get("len").is_undefined());
    }

    #[test]
    fn test_at_out_of_range_is_undefined() {
        let arr = Value::array(["x"]);
        assert_eq!(arr.at(0), Value::from("x"));
        assert!(arr.at(1).is_undefined());
        assert!(Value::Null.at(0).is_undefined());
    }

    #[test]
    fn test_strict_eq_numbers() {
        assert!(Value::from(5).strict_eq(&Value::from(5.0)));
        assert!(Value::from(0.0).strict_eq(&Value::from(-0.0)));
        assert!(!Value::from(f64::NAN).strict_eq(&Value::from(f64::NAN)));
    }

    #[test]
    fn test_strict_eq_is_identity_for_containers() {
        let a = Value::object([("k", 1)]);
        let b = Value::object([("k", 1)]);
        assert!(a.strict_eq(&a.clone()));
        assert!(!a.strict_eq(&b));
        // structural equality still holds
        assert_eq!(a, b);
    }

    #[test]
    fn test_instance_type_checks() {
        struct Marker;
        let v = Instance::new(Marker);
        assert!(v.is::<Marker>());
        assert!(!v.is::<String>());
        assert!(v.type_name().ends_with("Marker"));
        assert!(v.ptr_eq(&v.clone()));
        assert!(!v.ptr_eq(&Instance::new(Marker)));
    }
}
