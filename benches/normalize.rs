//! Throughput of the normalization entry points.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plane_angle::{
  normalize, normalize_between_minus_pi_and_pi, normalize_between_zero_and_two_pi, try_normalize,
  Normalizer,
};

fn angles(count: usize, magnitude: f64) -> Vec<f64> {
  (0..count)
    .map(|i| (i as f64 / count as f64 - 0.5) * 2f64 * magnitude)
    .collect()
}

fn bench_normalize(c: &mut Criterion) {
  let mut group = c.benchmark_group("normalize");

  for &magnitude in &[10f64, 1e6, 1e12] {
    let input = angles(1024, magnitude);

    group.bench_with_input(
      BenchmarkId::new("minus_pi_to_pi", magnitude),
      &input,
      |b, input| {
        b.iter(|| {
          for &a in input {
            black_box(normalize_between_minus_pi_and_pi(black_box(a)));
          }
        })
      },
    );

    group.bench_with_input(
      BenchmarkId::new("zero_to_two_pi", magnitude),
      &input,
      |b, input| {
        b.iter(|| {
          for &a in input {
            black_box(normalize_between_zero_and_two_pi(black_box(a)));
          }
        })
      },
    );

    group.bench_with_input(BenchmarkId::new("centered", magnitude), &input, |b, input| {
      b.iter(|| {
        for &a in input {
          black_box(normalize(black_box(a), black_box(1.25)));
        }
      })
    });

    group.bench_with_input(BenchmarkId::new("checked", magnitude), &input, |b, input| {
      b.iter(|| {
        for &a in input {
          black_box(try_normalize(black_box(a), black_box(1.25)).ok());
        }
      })
    });
  }

  group.finish();
}

fn bench_single_precision(c: &mut Criterion) {
  let input: Vec<f32> = angles(1024, 100f64).into_iter().map(|a| a as f32).collect();
  let normalizer = Normalizer::<f32>::zero_to_two_pi();

  c.bench_function("normalizer_f32", |b| {
    b.iter(|| {
      for &a in &input {
        black_box(normalizer.apply(black_box(a)));
      }
    })
  });
}

criterion_group!(benches, bench_normalize, bench_single_precision);
criterion_main!(benches);
