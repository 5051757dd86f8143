//! Schema validators for heterogeneous containers
//!
//! - [`Record`] checks an object key by key
//! - [`Tuple`] checks an array position by position
//!
//! Both are open: keys or trailing elements the schema does not mention are
//! ignored. A missing key or index is presented to its validator as
//! [`Value::Undefined`], so wrap it in [`optional`](crate::combinators::optional)
//! to allow it to be absent.
//!
//! # Examples
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! let user = record! {
//!     "name" => string(),
//!     "email" => optional(string()),
//! };
//!
//! assert!(user.validate(&Value::object([("name", "alice")])));
//! assert!(user.validate(&Value::object([("name", "bob"), ("role", "admin")])));
//! assert!(!user.validate(&Value::object([("email", "carol@example.com")])));
//! ```

use crate::foundation::{DynValidator, Validate, ValidateExt};
use crate::value::Value;
use indexmap::IndexMap;

// ============================================================================
// RECORD
// ============================================================================

/// Validates an object against a per-key schema.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: IndexMap<String, DynValidator>,
}

impl Record {
    /// Creates a record schema with no keys; it accepts any object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the validator for `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(mut self, key: impl Into<String>, validator: V) -> Self
    where
        V: Validate + 'static,
    {
        self.fields.insert(key.into(), validator.boxed());
        self
    }

    /// Keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Validate for Record {
    fn validate(&self, value: &Value) -> bool {
        let Value::Object(map) = value else {
            return false;
        };
        self.fields.iter().all(|(key, validator)| match map.get(key) {
            Some(field) => validator.validate(field),
            None => validator.validate(&Value::Undefined),
        })
    }
}

impl<K: Into<String>> FromIterator<(K, DynValidator)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, DynValidator)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Creates a [`Record`] from `(key, validator)` pairs.
///
/// The [`record!`](macro@crate::record) macro is usually more convenient.
#[must_use]
pub fn record<I, K>(schema: I) -> Record
where
    I: IntoIterator<Item = (K, DynValidator)>,
    K: Into<String>,
{
    schema.into_iter().collect()
}

// ============================================================================
// TUPLE
// ============================================================================

/// Validates an array against a positional schema.
///
/// Only the prefix covered by the schema is checked. Anything that is not an
/// array is rejected, even by an empty schema.
#[derive(Debug, Clone, Default)]
pub struct Tuple {
    items: Vec<DynValidator>,
}

impl Tuple {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the validator for the next position.
    #[must_use = "builder methods must be chained or built"]
    pub fn item<V>(mut self, validator: V) -> Self
    where
        V: Validate + 'static,
    {
        self.items.push(validator.boxed());
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Validate for Tuple {
    fn validate(&self, value: &Value) -> bool {
        let Value::Array(elements) = value else {
            return false;
        };
        self.items
            .iter()
            .enumerate()
            .all(|(index, validator)| match elements.get(index) {
                Some(element) => validator.validate(element),
                None => validator.validate(&Value::Undefined),
            })
    }
}

impl FromIterator<DynValidator> for Tuple {
    fn from_iter<I: IntoIterator<Item = DynValidator>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Creates a [`Tuple`] from positional validators.
#[must_use]
pub fn tuple<I>(schema: I) -> Tuple
where
    I: IntoIterator<Item = DynValidator>,
{
    schema.into_iter().collect()
}
