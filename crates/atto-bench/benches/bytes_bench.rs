//! Byte-range check benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use atto_core::check::{all_zero, mem_equal, str_equal_prefix};

fn bench_byte_checks(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096, 65536];
    let mut group = c.benchmark_group("byte_checks");

    for &size in sizes {
        let zeros = vec![0u8; size];
        let mut text = vec![b'a'; size];
        if let Some(last) = text.last_mut() {
            *last = 0;
        }

        group.bench_with_input(BenchmarkId::new("mem_equal", size), &size, |b, &n| {
            b.iter(|| mem_equal(criterion::black_box(&zeros), &zeros, n));
        });
        group.bench_with_input(BenchmarkId::new("all_zero", size), &size, |b, &n| {
            b.iter(|| all_zero(criterion::black_box(&zeros), n));
        });
        group.bench_with_input(BenchmarkId::new("str_equal_prefix", size), &size, |b, &n| {
            b.iter(|| str_equal_prefix(criterion::black_box(&text), &text, n + 8));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_byte_checks);
criterion_main!(benches);
