//! Built-in validators
//!
//! # Categories
//!
//! - **Primitive**: [`boolean`], [`string`], [`number`], [`empty`], [`nil`], [`literal`]
//! - **Container**: [`object`], [`array`], [`instance`]
//! - **Schema**: [`record`] / [`Record`], [`tuple`] / [`Tuple`]
//!
//! # Examples
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! let tags = array(string());
//! let scores = object(number());
//! let entry = tuple![string(), literal("v1")];
//!
//! assert!(tags.validate(&Value::array(["a", "b"])));
//! assert!(scores.validate(&Value::object([("alice", 3), ("bob", 5)])));
//! assert!(entry.validate(&Value::array(["key", "v1"])));
//! ```

pub mod container;
pub mod primitive;
pub mod schema;

pub use container::{ArrayOf, InstanceOf, ObjectOf, array, instance, object};
pub use primitive::{
    Boolean, Empty, Literal, Nil, Number, Str, boolean, empty, literal, nil, number, string,
};
pub use schema::{Record, Tuple, record, tuple};
