//! Throughput of the validator algebra on small and medium payloads.

use criterion::{Criterion, criterion_group, criterion_main};
use nebula_guard::prelude::*;
use std::hint::black_box;

// ============================================================================
// Primitive & Binary Combinators
// ============================================================================

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary");
    let input = Value::from("hello");

    group.bench_function("or_second_branch", |b| {
        let v = number().or(string());
        b.iter(|| black_box(v.validate(black_box(&input))));
    });

    group.bench_function("and_both_pass", |b| {
        let v = string().and(literal("hello"));
        b.iter(|| black_box(v.validate(black_box(&input))));
    });

    group.bench_function("any_of_macro_last", |b| {
        let v = any_of![number(), boolean(), nil(), empty(), string()];
        b.iter(|| black_box(v.validate(black_box(&input))));
    });

    group.bench_function("any_dyn_last", |b| {
        let v = any([
            number().boxed(),
            boolean().boxed(),
            nil().boxed(),
            empty().boxed(),
            string().boxed(),
        ]);
        b.iter(|| black_box(v.validate(black_box(&input))));
    });

    group.finish();
}

// ============================================================================
// Schemas
// ============================================================================

fn user() -> Record {
    record! {
        "id" => number(),
        "name" => string(),
        "email" => nullable(string()),
        "roles" => array(any_of![literal("admin"), literal("member")]),
        "profile" => optional(record! { "bio" => string() }),
    }
}

fn bench_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema");
    let schema = user();

    let valid = Value::object([
        ("id", Value::from(1)),
        ("name", Value::from("alice")),
        ("email", Value::Null),
        ("roles", Value::array(["admin", "member"])),
        ("profile", Value::object([("bio", "hi")])),
    ]);
    let invalid = Value::object([("id", Value::from("1"))]);

    group.bench_function("record_valid", |b| {
        b.iter(|| black_box(schema.validate(black_box(&valid))));
    });

    group.bench_function("record_invalid_first_field", |b| {
        b.iter(|| black_box(schema.validate(black_box(&invalid))));
    });

    let users = Value::array((0..100).map(|_| valid.clone()));
    let list = array(schema.clone());
    group.bench_function("array_of_100_records", |b| {
        b.iter(|| black_box(list.validate(black_box(&users))));
    });

    let pair = tuple![string(), number()];
    let row = Value::array([Value::from("x"), Value::from(1)]);
    group.bench_function("tuple_pair", |b| {
        b.iter(|| black_box(pair.validate(black_box(&row))));
    });

    group.finish();
}

criterion_group!(benches, bench_binary, bench_schema);
criterion_main!(benches);
