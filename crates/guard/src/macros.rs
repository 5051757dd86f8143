//! Macros for building validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] - Create a validator (struct + `Validate` impl + factory fn)
//! - [`any_of!`] - OR-chain validators of different types
//! - [`all_of!`] - AND-chain validators of different types
//! - [`record!`] - Build a [`Record`](crate::validators::Record) schema
//! - [`tuple!`] - Build a [`Tuple`](crate::validators::Tuple) schema
//!
//! # Examples
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! let point = record! {
//!     "x" => number(),
//!     "y" => number(),
//!     "label" => optional(string()),
//! };
//! let pair = tuple![string(), any_of![number(), nil()]];
//!
//! assert!(point.validate(&Value::object([("x", 1), ("y", 2)])));
//! assert!(pair.validate(&Value::array([Value::from("a"), Value::Null])));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a validator: struct definition, `Validate` implementation,
/// constructor and factory function.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Boolean;
///     rule(value) { matches!(value, Value::Bool(_)) }
///     fn boolean();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MinItems { min: usize };
///     rule(self, value) { value.as_array().is_some_and(|a| a.len() >= self.min) }
///     fn min_items(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Literal { expected: Value };
///     rule(self, value) { value.strict_eq(&self.expected) }
///     new(expected: impl Into<Value>) { Self { expected: expected.into() } }
///     fn literal(expected: impl Into<Value>);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[inline]
            fn validate(&self, $inp: &$crate::Value) -> bool $rule
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            fn validate(&$self_, $inp: &$crate::Value) -> bool $rule
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };
}

// ============================================================================
// ANY_OF / ALL_OF MACROS
// ============================================================================

/// Composes validators of different types using OR logic.
///
/// Evaluates left to right and stops at the first acceptance.
///
/// ```rust,ignore
/// let id = any_of![number(), string()];
/// ```
#[macro_export]
macro_rules! any_of {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::Or::new($first, $crate::any_of!($($rest),+))
    };
}

/// Composes validators of different types using AND logic.
///
/// Evaluates left to right and stops at the first rejection.
///
/// ```rust,ignore
/// let named_and_aged = all_of![record! { "name" => string() }, record! { "age" => number() }];
/// ```
#[macro_export]
macro_rules! all_of {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::And::new($first, $crate::all_of!($($rest),+))
    };
}

// ============================================================================
// SCHEMA MACROS
// ============================================================================

/// Builds a [`Record`](crate::validators::Record) from `key => validator`
/// pairs.
#[macro_export]
macro_rules! record {
    () => {
        $crate::validators::Record::new()
    };
    ($($key:expr => $validator:expr),+ $(,)?) => {
        $crate::validators::Record::new()$(.field($key, $validator))+
    };
}

/// Builds a [`Tuple`](crate::validators::Tuple) from positional validators.
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::validators::Tuple::new()
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::validators::Tuple::new()$(.item($validator))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::Value;
    use crate::foundation::Validate;

    validator! {
        /// A test unit validator.
        TestNonEmptyString;
        rule(value) { value.as_str().is_some_and(|s| !s.is_empty()) }
        fn test_non_empty_string();
    }

    #[test]
    fn test_unit_validator() {
        assert!(TestNonEmptyString.validate(&Value::from("x")));
        assert!(!test_non_empty_string().validate(&Value::from("")));
        assert!(!TestNonEmptyString.validate(&Value::from(1)));
    }

    validator! {
        TestMinItems { min: usize };
        rule(self, value) { value.as_array().is_some_and(|a| a.len() >= self.min) }
        fn test_min_items(min: usize);
    }

    #[test]
    fn test_struct_validator() {
        let v = test_min_items(2);
        assert_eq!(v.min, 2);
        assert!(v.validate(&Value::array([1, 2])));
        assert!(!TestMinItems::new(3).validate(&Value::array([1, 2])));
    }

    validator! {
        TestPrefix { prefix: String };
        rule(self, value) { value.as_str().is_some_and(|s| s.starts_with(&self.prefix)) }
        new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
        fn test_prefix(prefix: impl Into<String>);
    }

    #[test]
    fn test_custom_new() {
        let v = test_prefix("nb_");
        assert!(v.validate(&Value::from("nb_id")));
        assert!(!v.validate(&Value::from("id")));
    }

    #[test]
    fn test_any_of_and_all_of() {
        let either = any_of![TestNonEmptyString, test_min_items(1)];
        assert!(either.validate(&Value::from("a")));
        assert!(either.validate(&Value::array([0])));
        assert!(!either.validate(&Value::Null));

        let both = all_of![test_prefix("a"), test_prefix("ab"), TestNonEmptyString];
        assert!(both.validate(&Value::from("abc")));
        assert!(!both.validate(&Value::from("ac")));
    }
}
