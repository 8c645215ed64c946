//! Benchmarks for octree extraction against a full per-cell sweep, and for
//! scaling with worker count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tree_mesher::{GridConfig, PointCloudField, SharedTriangles, TreeMeshBuilder};

/// Samples spread over a sphere (Fibonacci lattice).
fn sphere_cloud(center: Vec3, radius: f32, count: usize) -> PointCloudField {
  let golden = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
  (0..count)
    .map(|i| {
      let y = 1.0 - 2.0 * (i as f32 + 0.5) / count as f32;
      let r = (1.0 - y * y).sqrt();
      let theta = golden * i as f32;
      center + Vec3::new(r * theta.cos(), y, r * theta.sin()) * radius
    })
    .collect()
}

/// Uniform samples in `[0, extent)³`.
fn random_cloud(seed: u64, count: usize, extent: f32) -> PointCloudField {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count)
    .map(|_| {
      Vec3::new(
        rng.random_range(0.0..extent),
        rng.random_range(0.0..extent),
        rng.random_range(0.0..extent),
      )
    })
    .collect()
}

/// Octree vs. exhaustive on a hollow sphere, where most of the grid is empty.
fn bench_octree_vs_exhaustive(c: &mut Criterion) {
  let mut group = c.benchmark_group("octree_vs_exhaustive");
  group.sample_size(10);

  for edge_size in [16u32, 32] {
    let config = GridConfig::new().with_edge_size(edge_size).with_iso_level(1.5);
    let half = edge_size as f32 * 0.5;
    let field = sphere_cloud(Vec3::splat(half), half * 0.6, 256);
    let Ok(builder) = TreeMeshBuilder::new(config) else {
      return;
    };

    group.bench_with_input(BenchmarkId::new("octree", edge_size), &field, |b, field| {
      b.iter(|| {
        let sink = SharedTriangles::new();
        black_box(builder.build(black_box(field), &sink))
      })
    });

    group.bench_with_input(
      BenchmarkId::new("exhaustive", edge_size),
      &field,
      |b, field| {
        b.iter(|| {
          let sink = SharedTriangles::new();
          black_box(builder.build_exhaustive(black_box(field), &sink))
        })
      },
    );
  }

  group.finish();
}

/// Same scattered cloud at increasing worker counts.
fn bench_thread_scaling(c: &mut Criterion) {
  let mut group = c.benchmark_group("thread_scaling");
  group.sample_size(10);

  let config = GridConfig::new().with_edge_size(64).with_iso_level(2.0);
  let field = random_cloud(42, 64, 64.0);

  for threads in [1usize, 2, 4, 8] {
    let Ok(builder) = TreeMeshBuilder::with_threads(config, threads) else {
      continue;
    };
    group.bench_with_input(BenchmarkId::from_parameter(threads), &field, |b, field| {
      b.iter(|| black_box(builder.extract(black_box(field))))
    });
  }

  group.finish();
}

criterion_group!(benches, bench_octree_vs_exhaustive, bench_thread_scaling);
criterion_main!(benches);
