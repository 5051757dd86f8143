//! Guarding an incoming API payload before handing it to typed code.

use nebula_guard::prelude::*;

fn order_schema() -> Record {
    record! {
        "id" => string(),
        "total" => number(),
        "status" => any_of![literal("open"), literal("paid"), literal("refunded")],
        "coupon" => optional(string()),
        "shipped_at" => nullable(number()),
        "lines" => array(tuple![string(), number()]),
    }
}

fn main() {
    let order = Value::object([
        ("id", Value::from("ord-1")),
        ("total", Value::from(42.5)),
        ("status", Value::from("paid")),
        ("shipped_at", Value::Null),
        (
            "lines",
            Value::array([Value::array([Value::from("sku-1"), Value::from(2)])]),
        ),
    ]);

    let guard = asserts(order_schema());

    match guard.assert(&order) {
        Ok(()) => println!("✓ order accepted"),
        Err(e) => println!("✗ order rejected: {e}"),
    }

    let broken = Value::object([("id", Value::from("ord-2")), ("status", Value::from("lost"))]);
    match guard.assert(&broken) {
        Ok(()) => println!("✓ order accepted"),
        Err(e) => println!("✗ order rejected: {e}"),
    }
}
