//! # nebula-guard
//!
//! Composable runtime type guards for untyped values.
//!
//! A validator answers one question: does this [`Value`] have the expected
//! shape? Validators are plain predicates (`&Value -> bool`), and combinators
//! build larger validators out of smaller ones. Nothing is parsed, coerced or
//! repaired; values are only classified.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! let user = record! {
//!     "name" => string(),
//!     "age" => number(),
//!     "tags" => optional(array(string())),
//! };
//!
//! let alice = Value::object([("name", Value::from("alice")), ("age", Value::from(31))]);
//! assert!(user.validate(&alice));
//!
//! let bob = Value::object([("name", "bob"), ("age", "unknown")]);
//! assert!(!user.validate(&bob));
//! assert!(asserts(user).assert(&bob).is_err());
//! ```
//!
//! ## Building Blocks
//!
//! - **Primitive**: [`boolean`](validators::boolean), [`string`](validators::string),
//!   [`number`](validators::number), [`empty`](validators::empty),
//!   [`nil`](validators::nil), [`literal`](validators::literal)
//! - **Container**: [`object`](validators::object), [`array`](validators::array),
//!   [`instance`](validators::instance)
//! - **Schema**: [`record!`], [`tuple!`]
//! - **Combinators**: [`any`](combinators::any), [`all`](combinators::all),
//!   [`optional`](combinators::optional), [`nullable`](combinators::nullable),
//!   [`any_of!`], [`all_of!`]
//! - **Assertion**: [`asserts`](combinators::asserts)
//!
//! ## Absence markers
//!
//! [`Value::Undefined`] (a missing key or index) and [`Value::Null`] (an
//! explicit null) are distinct. `empty` and `optional` deal with the first,
//! `nil` and `nullable` with the second.
//!
//! ## Threading
//!
//! [`Validate`] requires `Send + Sync` and validators hold no mutable state,
//! so a single validator can be shared across threads freely.

// Deep combinator nesting (Or<Empty, And<..>>) produces complex types
// that are inherent to the static combinator design.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
pub mod value;

pub use combinators::{
    All, And, Any, Asserts, Nullable, Optional, Or, all, and, any, asserts, nullable, optional, or,
};
pub use foundation::{AssertionError, AssertionResult, DynValidator, Validate, ValidateExt};
pub use validators::{
    ArrayOf, Boolean, Empty, InstanceOf, Literal, Nil, Number, ObjectOf, Record, Str, Tuple, array,
    boolean, empty, instance, literal, nil, number, object, record, string, tuple,
};
pub use value::{Instance, Kind, Value};
