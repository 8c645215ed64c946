//! Test utilities shared by the octree and driver tests.
//!
//! Provides deterministic point clouds and instrumented collaborators for
//! observing what the recursion actually touches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use glam::{UVec3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cube::{CubeBuilder, MarchingCubes};
use crate::field::{PointCloudField, ScalarField};
use crate::sink::TriangleSink;
use crate::types::{GridConfig, Triangle};

// =============================================================================
// Fields
// =============================================================================

/// `count` samples uniformly distributed in `[0, extent)³`.
pub fn random_cloud(seed: u64, count: usize, extent: f32) -> PointCloudField {
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

/// `count` samples spread over a sphere (Fibonacci lattice).
pub fn sphere_cloud(center: Vec3, radius: f32, count: usize) -> PointCloudField {
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

/// Same value everywhere. With `iso_level >= value` nothing is ever pruned.
pub struct ConstantField(pub f32);

impl ScalarField for ConstantField {
  fn evaluate(&self, _position: Vec3) -> f32 {
    self.0
  }
}

/// Wraps a field and counts evaluations.
pub struct CountingField<F> {
  pub inner: F,
  evaluations: AtomicU64,
}

impl<F: ScalarField> CountingField<F> {
  pub fn new(inner: F) -> Self {
    Self {
      inner,
      evaluations: AtomicU64::new(0),
    }
  }

  pub fn evaluations(&self) -> u64 {
    self.evaluations.load(Ordering::Relaxed)
  }
}

impl<F: ScalarField> ScalarField for CountingField<F> {
  fn evaluate(&self, position: Vec3) -> f32 {
    self.evaluations.fetch_add(1, Ordering::Relaxed);
    self.inner.evaluate(position)
  }
}

// =============================================================================
// Cube builders
// =============================================================================

/// Marching cubes that also records every cell it was asked to build.
#[derive(Default)]
pub struct RecordingCubeBuilder {
  visited: Mutex<Vec<UVec3>>,
}

impl RecordingCubeBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn visited(&self) -> Vec<UVec3> {
    self.visited.lock().unwrap().clone()
  }
}

impl CubeBuilder for RecordingCubeBuilder {
  fn build_leaf_cube<F, S>(&self, offset: Vec3, field: &F, config: &GridConfig, sink: &S) -> usize
  where
    F: ScalarField + ?Sized,
    S: TriangleSink + ?Sized,
  {
    self.visited.lock().unwrap().push(offset.as_uvec3());
    MarchingCubes.build_leaf_cube(offset, field, config, sink)
  }
}

// =============================================================================
// Comparison helpers
// =============================================================================

/// Order-independent representation of a triangle list.
pub fn sorted_keys(triangles: &[Triangle]) -> Vec<[u32; 9]> {
  let mut keys: Vec<_> = triangles.iter().map(Triangle::bit_key).collect();
  keys.sort_unstable();
  keys
}
