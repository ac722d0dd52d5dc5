//! Line-encoding throughput benchmark.
//!
//! Measures both encodings over a record-sized field set, which is the
//! entire per-call cost of a `print` apart from the stdout write.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kvlog::encode::fields::FieldSet;
use kvlog::encode::json::encode_json;
use kvlog::encode::keyval::encode_keyval;
use kvlog::{kv, Color};

fn record_fields() -> FieldSet {
    FieldSet::from_kv(kv![
        "time", "2024-01-01T00:00:00Z",
        "message", "Request.",
        "request_id", "52fdfc072182654f163f5f0f9a621d72",
        "request_uri", "/admin",
        "method", "GET",
        "code", 200,
        "duration_ms", 12,
    ])
}

fn bench_encode(c: &mut Criterion) {
    let fields = record_fields();

    c.bench_function("encode_json", |b| {
        b.iter(|| encode_json(black_box(&fields)))
    });

    c.bench_function("encode_keyval_plain", |b| {
        b.iter(|| encode_keyval(black_box(&fields), Color::None))
    });

    c.bench_function("encode_keyval_colored", |b| {
        b.iter(|| encode_keyval(black_box(&fields), Color::Yellow))
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
