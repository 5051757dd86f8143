//! Sharing validators across threads.

use nebula_guard::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn one_validator_many_threads() {
    let guard: DynValidator = record! {
        "id" => number(),
        "tags" => array(string()),
    }
    .boxed();

    let good = Arc::new(Value::object([
        ("id", Value::from(1)),
        ("tags", Value::array(["a", "b"])),
    ]));
    let bad = Arc::new(Value::object([("id", Value::from("1"))]));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let guard = guard.clone();
            let good = Arc::clone(&good);
            let bad = Arc::clone(&bad);
            thread::spawn(move || {
                (0..1_000).all(|_| guard.validate(&good) && !guard.validate(&bad))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn scoped_threads_borrow_a_static_validator() {
    let guard = tuple![string(), optional(number())];
    let inputs = [
        Value::array(["a"]),
        Value::array([Value::from("b"), Value::from(2)]),
        Value::array([Value::from("c"), Value::from("3")]),
    ];

    let guard = &guard;
    let results: Vec<bool> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| s.spawn(move || guard.validate(input)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, [true, true, false]);
}
