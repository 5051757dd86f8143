//! Primitive validators
//!
//! Each one checks a single runtime kind, or identity with a fixed value.
//! The kind checks are mutually exclusive: a primitive value is accepted by
//! exactly one of `boolean`, `string`, `number`, `empty` and `nil`.

use crate::value::Value;

crate::validator! {
    /// Accepts booleans.
    pub Boolean;
    rule(value) { matches!(value, Value::Bool(_)) }
    fn boolean();
}

crate::validator! {
    /// Accepts strings.
    pub Str;
    rule(value) { matches!(value, Value::String(_)) }
    fn string();
}

crate::validator! {
    /// Accepts numbers, including NaN and the infinities.
    pub Number;
    rule(value) { matches!(value, Value::Number(_)) }
    fn number();
}

crate::validator! {
    /// Accepts only [`Value::Undefined`].
    pub Empty;
    rule(value) { value.is_undefined() }
    fn empty();
}

crate::validator! {
    /// Accepts only [`Value::Null`].
    pub Nil;
    rule(value) { value.is_null() }
    fn nil();
}

crate::validator! {
    /// Accepts values strictly equal to `expected`.
    ///
    /// Primitives match by value; arrays, objects and instances match only
    /// the very same allocation (see [`Value::strict_eq`]).
    pub Literal { expected: Value };
    rule(self, value) { value.strict_eq(&self.expected) }
    new(expected: impl Into<Value>) { Self { expected: expected.into() } }
    fn literal(expected: impl Into<Value>);
}
