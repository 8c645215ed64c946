//! Core data types for octree isosurface extraction.

use glam::Vec3;

use crate::error::ConfigError;

/// One output triangle in world space.
///
/// The extraction core never looks inside a triangle; it only counts and
/// forwards them to a [`TriangleSink`](crate::TriangleSink).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
  pub vertices: [Vec3; 3],
}

impl Triangle {
  pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
    Self {
      vertices: [a, b, c],
    }
  }

  /// Unnormalized face normal (winding a → b → c).
  #[inline]
  pub fn normal(&self) -> Vec3 {
    let [a, b, c] = self.vertices;
    (b - a).cross(c - a)
  }

  #[inline]
  pub fn area(&self) -> f32 {
    self.normal().length() * 0.5
  }

  /// Bit-exact key, for comparing triangle sets produced in different orders.
  pub fn bit_key(&self) -> [u32; 9] {
    let [a, b, c] = self.vertices;
    [
      a.x.to_bits(),
      a.y.to_bits(),
      a.z.to_bits(),
      b.x.to_bits(),
      b.y.to_bits(),
      b.z.to_bits(),
      c.x.to_bits(),
      c.y.to_bits(),
      c.z.to_bits(),
    ]
  }
}

/// Grid the isosurface is extracted on.
///
/// The grid spans `[0, edge_size * resolution]` on every axis in world
/// space, starting at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
  /// Unit cells per axis. Must be a power of two.
  pub edge_size: u32,

  /// World-space edge length of one unit cell.
  pub resolution: f32,

  /// Field value that defines the surface.
  pub iso_level: f32,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      edge_size: 64,
      resolution: 1.0,
      iso_level: 1.5,
    }
  }
}

impl GridConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_edge_size(mut self, edge_size: u32) -> Self {
    self.edge_size = edge_size;
    self
  }

  pub fn with_resolution(mut self, resolution: f32) -> Self {
    self.resolution = resolution;
    self
  }

  /// Pick the resolution so the grid spans `extent` world units per axis.
  ///
  /// Call after [`with_edge_size`](Self::with_edge_size).
  pub fn with_world_extent(mut self, extent: f32) -> Self {
    self.resolution = extent / self.edge_size as f32;
    self
  }

  pub fn with_iso_level(mut self, iso_level: f32) -> Self {
    self.iso_level = iso_level;
    self
  }

  /// World-space size of the whole grid along one axis.
  #[inline]
  pub fn world_extent(&self) -> f32 {
    self.edge_size as f32 * self.resolution
  }

  /// Deepest recursion level: `log2(edge_size)`.
  #[inline]
  pub fn max_depth(&self) -> u32 {
    self.edge_size.trailing_zeros()
  }

  /// Total number of unit cells in the grid.
  #[inline]
  pub fn cell_count(&self) -> u64 {
    let n = self.edge_size as u64;
    n * n * n
  }

  /// Check the preconditions the recursion relies on.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !self.edge_size.is_power_of_two() {
      return Err(ConfigError::EdgeSizeNotPowerOfTwo(self.edge_size));
    }
    if !self.resolution.is_finite() || self.resolution <= 0.0 {
      return Err(ConfigError::InvalidResolution(self.resolution));
    }
    if !self.iso_level.is_finite() {
      return Err(ConfigError::InvalidIsoLevel(self.iso_level));
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
