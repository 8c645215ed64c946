//! Scalar fields the isosurface is extracted from.
//!
//! The octree prune test assumes the field behaves like a distance function
//! (1-Lipschitz): moving a point by `d` changes its value by at most `d`.
//! [`PointCloudField`] satisfies this by construction.

use glam::Vec3;

/// A read-only scalar field sampled at arbitrary world positions.
///
/// Implementations are shared across every worker of a build without
/// locking, so they must be `Sync` and must not mutate on evaluation.
pub trait ScalarField: Send + Sync {
  /// Field value at a world-space position.
  fn evaluate(&self, position: Vec3) -> f32;
}

impl<T: ScalarField + ?Sized> ScalarField for &T {
  #[inline]
  fn evaluate(&self, position: Vec3) -> f32 {
    (**self).evaluate(position)
  }
}

/// Unsigned distance to the nearest of a set of sample points.
///
/// Evaluation is a linear scan over every sample; there is no spatial
/// index. The octree exists precisely so this is called rarely.
#[derive(Clone, Debug, Default)]
pub struct PointCloudField {
  points: Vec<Vec3>,
}

impl PointCloudField {
  pub fn new(points: Vec<Vec3>) -> Self {
    Self { points }
  }

  /// Build from `[x, y, z]` arrays.
  pub fn from_arrays(points: &[[f32; 3]]) -> Self {
    points.iter().copied().map(Vec3::from_array).collect()
  }

  pub fn points(&self) -> &[Vec3] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }
}

impl FromIterator<Vec3> for PointCloudField {
  fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl ScalarField for PointCloudField {
  /// Returns `f32::MAX` for an empty cloud ("infinitely far" everywhere).
  #[inline]
  fn evaluate(&self, position: Vec3) -> f32 {
    self
      .points
      .iter()
      .map(|p| p.distance_squared(position))
      .reduce(f32::min)
      .map_or(f32::MAX, f32::sqrt)
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
