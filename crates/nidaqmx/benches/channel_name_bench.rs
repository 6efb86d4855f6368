//! Benchmarks for the channel-name codec.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nidaqmx::{flatten_channel_string, unflatten_channel_string};

fn bench_unflatten(c: &mut Criterion) {
    c.bench_function("unflatten_range_64", |b| {
        b.iter(|| unflatten_channel_string(black_box("Dev1/ai0:63")))
    });

    c.bench_function("unflatten_mixed", |b| {
        b.iter(|| {
            unflatten_channel_string(black_box(
                "Dev1/ai0:15,Dev2/ai3,Dev2/port0/line0:7,temperature",
            ))
        })
    });
}

fn bench_flatten(c: &mut Criterion) {
    let names: Vec<String> = (0..64).map(|i| format!("Dev1/ai{i}")).collect();
    c.bench_function("flatten_run_64", |b| {
        b.iter(|| flatten_channel_string(black_box(&names)))
    });
}

criterion_group!(benches, bench_unflatten, bench_flatten);
criterion_main!(benches);
