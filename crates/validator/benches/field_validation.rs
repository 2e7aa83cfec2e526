//! Benchmarks for field validation and aggregation.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use vkit_option::{Optional, present};
use vkit_validator::prelude::*;

const ADDRESS: &str = "0x32Be343B94f860124dC4fEe278FDCBD38C102D88";

fn bench_single_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");

    let email = is_email();
    group.bench_function("is_email", |b| {
        b.iter(|| email.validate(black_box("alice@example.com")))
    });

    let eth = eth_address();
    group.bench_function("eth_address", |b| b.iter(|| eth.validate(black_box(ADDRESS))));

    let length = min_length(3).and(max_length(64));
    group.bench_function("min_and_max_length", |b| {
        b.iter(|| length.validate(black_box("a reasonably long display name")))
    });

    group.finish();
}

fn bench_field_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fields");

    group.bench_function("validate_field_passing", |b| {
        b.iter(|| {
            validate_field(
                "email",
                black_box("alice@example.com"),
                &[&not_empty(), &is_email(), &max_length(254)],
            )
        })
    });

    group.bench_function("validate_field_first_failure", |b| {
        b.iter(|| validate_field("name", black_box("Bar"), &[&max_length(2), &min_length(50)]))
    });

    let wallet: Optional<String> = present(ADDRESS.to_string());
    group.bench_function("validate_optional_field", |b| {
        b.iter(|| validate_optional_field("wallet", black_box(&wallet), &[&eth_address()]))
    });

    group.bench_function("aggregate_form", |b| {
        b.iter(|| {
            aggregate([
                validate_field("name", black_box(""), &[&not_empty()]),
                validate_field("email", black_box("abc@example"), &[&is_email()]),
                validate_field("age", black_box(&33_i64), &[&max(2_i64), &min(1_i64)]),
                validate_optional_field("wallet", black_box(&wallet), &[&eth_address()]),
            ])
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single_rules, bench_field_validation);
criterion_main!(benches);
