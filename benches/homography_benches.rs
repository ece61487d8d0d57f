use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use contlog::Number;

fn ratio(num: i64, den: i64) -> Number {
    Number::ratio(num, den).expect("defined ratio")
}

/// Nests `depth` copies of `(x + 1) / (x + 2)` around `x`.
fn nested(x: Number, depth: usize) -> Number {
    (0..depth).fold(x, |inner, _| {
        Number::homography(inner, 1, 1, 1, 2).expect("coefficients")
    })
}

fn bench_homography(c: &mut Criterion) {
    let mut group = c.benchmark_group("homography");

    group.bench_function("identity_drain", |b| {
        b.iter(|| {
            let mut y = Number::homography(ratio(-157, 50), 1, 0, 0, 1).expect("coefficients");
            black_box(y.drain_glyphs().expect("drain"))
        });
    });

    group.bench_function("affine_drain", |b| {
        b.iter(|| {
            let mut y = Number::homography(ratio(355, 113), 3, -7, 2, 11).expect("coefficients");
            black_box(y.drain_glyphs().expect("drain"))
        });
    });

    for depth in [1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("nested_drain", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut y = nested(ratio(22, 7), depth);
                black_box(y.drain_glyphs().expect("drain"))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_homography);
criterion_main!(benches);
