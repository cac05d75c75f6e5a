//! Benchmarks for the JSON tokenizer.
//!
//! Run with `cargo bench --bench tokenize`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use jsonlex::tokenize;

/// An object with `n` entries mixing every token kind.
fn document(n: usize) -> String {
    let entries: Vec<String> = (1..=n)
        .map(|i| {
            format!(
                r#""key_{i}":{{"id":{i},"ratio":-{i}.25e-3,"tags":["a\"b","ü"],"ok":true,"none":null}}"#
            )
        })
        .collect();
    format!("{{{}}}", entries.join(",\n  "))
}

fn bench_sample(c: &mut Criterion) {
    let sample = r#"{"array":[1,2,3],"boolean":true,"color":"gold","null":null,"number":123,"object":{"a":"b","c":"d"},"string":"Hello World"}"#;
    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenize(black_box(sample)));
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_document");
    for n in [10, 100, 1_000] {
        let input = document(n);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| tokenize(black_box(input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample, bench_scaling);
criterion_main!(benches);
