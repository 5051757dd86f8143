//! Prelude module for convenient imports.
//!
//! `use nebula_guard::prelude::*;` brings in the value model, the core
//! traits, every built-in validator and combinator, and the macros.
//!
//! # Examples
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! let event = record! {
//!     "id" => any_of![number(), string()],
//!     "tags" => array(string()).optional(),
//!     "parent" => nullable(number()),
//! };
//! let json = Value::object([
//!     ("id", Value::from(7)),
//!     ("parent", Value::Null),
//! ]);
//! assert!(event.validate(&json));
//! ```

// ============================================================================
// FOUNDATION: Value model, core traits, errors
// ============================================================================

pub use crate::{AssertionError, DynValidator, Instance, Kind, Validate, ValidateExt, Value};

// ============================================================================
// VALIDATORS
// ============================================================================

// `record` and `tuple` name both the function and the macro.
pub use crate::{
    ArrayOf, Boolean, Empty, InstanceOf, Literal, Nil, Number, ObjectOf, Record, Str, Tuple, array,
    boolean, empty, instance, literal, nil, number, object, record, string, tuple,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::{
    All, And, Any, Asserts, Nullable, Optional, Or, all, and, any, asserts, nullable, optional, or,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all_of, any_of};
