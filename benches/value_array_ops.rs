// Comparing whole-value operations on ValueArray: deep copy against the
// constant-time transfers (swap, take) and the swap-based assignment.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use value_semantics::ValueArray;

fn benchmark_value_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_array_ops");

    for size in [16usize, 256, 4096] {
        let source = ValueArray::from(vec![7i32; size]);

        group.bench_with_input(BenchmarkId::new("clone", size), &source, |b, s| {
            b.iter(|| black_box(s.clone()))
        });

        group.bench_with_input(BenchmarkId::new("assign_copy", size), &source, |b, s| {
            b.iter(|| {
                let mut target = ValueArray::new();
                target.assign(s.clone());
                black_box(target)
            })
        });

        group.bench_with_input(BenchmarkId::new("swap", size), &source, |b, s| {
            b.iter(|| {
                let mut a = s.clone();
                let mut b2 = ValueArray::new();
                a.swap(&mut b2);
                black_box(b2)
            })
        });

        group.bench_with_input(BenchmarkId::new("take", size), &source, |b, s| {
            b.iter(|| {
                let mut a = s.clone();
                black_box(a.take())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_value_ops);
criterion_main!(benches);
