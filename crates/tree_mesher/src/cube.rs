//! Single-cell triangulation.
//!
//! A [`CubeBuilder`] turns one unit cell of the grid into triangles. The
//! octree only ever hands it cells whose conservative bound admits the
//! surface; it is the expensive leaf primitive the recursion tries to avoid.
//!
//! # Processing
//!
//! ```text
//! offset (grid units)
//!    │
//!    ▼
//! 8 corners ── (offset + CUBE_CORNERS[i]) * resolution
//!    │
//!    ▼
//! 8 field samples ── bit i set when value < iso_level
//!    │
//!    ▼
//! EDGE_TABLE[cube_index] == 0 ? ── yes ──► 0 triangles
//!    │ no
//!    ▼
//! interpolate crossed edges ──► TRI_TABLE rows ──► sink.append(..)
//! ```

use glam::Vec3;

use crate::constants::CUBE_CORNERS;
use crate::edge_table::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use crate::field::ScalarField;
use crate::sink::TriangleSink;
use crate::types::{GridConfig, Triangle};

/// Triangulates one unit cell and forwards the result to a sink.
pub trait CubeBuilder: Sync {
  /// Triangulate the unit cell at `offset` (grid units), append every
  /// triangle to `sink` and return how many were appended.
  fn build_leaf_cube<F, S>(&self, offset: Vec3, field: &F, config: &GridConfig, sink: &S) -> usize
  where
    F: ScalarField + ?Sized,
    S: TriangleSink + ?Sized;
}

/// Classic table-driven marching cubes.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarchingCubes;

impl CubeBuilder for MarchingCubes {
  fn build_leaf_cube<F, S>(&self, offset: Vec3, field: &F, config: &GridConfig, sink: &S) -> usize
  where
    F: ScalarField + ?Sized,
    S: TriangleSink + ?Sized,
  {
    let corners: [Vec3; 8] =
      std::array::from_fn(|i| (offset + CUBE_CORNERS[i]) * config.resolution);
    let values: [f32; 8] = std::array::from_fn(|i| field.evaluate(corners[i]));

    let cube_index = cube_index(&values, config.iso_level);
    let edge_mask = EDGE_TABLE[cube_index];
    if edge_mask == 0 {
      return 0;
    }

    let mut edge_points = [Vec3::ZERO; 12];
    for (edge, [a, b]) in EDGE_CORNERS.iter().copied().enumerate() {
      if edge_mask & (1 << edge) != 0 {
        edge_points[edge] = interpolate_vertex(
          corners[a],
          corners[b],
          values[a],
          values[b],
          config.iso_level,
        );
      }
    }

    let mut count = 0;
    for tri in TRI_TABLE[cube_index]
      .chunks_exact(3)
      .take_while(|tri| tri[0] != -1)
    {
      sink.append(Triangle::new(
        edge_points[tri[0] as usize],
        edge_points[tri[1] as usize],
        edge_points[tri[2] as usize],
      ));
      count += 1;
    }
    count
  }
}

/// 8-bit corner classification: bit `i` set when corner `i` is below
/// `iso_level`.
#[inline]
pub fn cube_index(values: &[f32; 8], iso_level: f32) -> usize {
  let mut mask = 0;
  for (i, &value) in values.iter().enumerate() {
    if value < iso_level {
      mask |= 1 << i;
    }
  }
  mask
}

/// Point on the segment `p0 → p1` where the linearly interpolated field
/// equals `iso_level`.
#[inline]
pub fn interpolate_vertex(p0: Vec3, p1: Vec3, v0: f32, v1: f32, iso_level: f32) -> Vec3 {
  const EPSILON: f32 = 1e-5;

  if (iso_level - v0).abs() < EPSILON {
    return p0;
  }
  if (iso_level - v1).abs() < EPSILON {
    return p1;
  }
  if (v0 - v1).abs() < EPSILON {
    return p0;
  }
  let t = (iso_level - v0) / (v1 - v0);
  p0 + (p1 - p0) * t
}

#[cfg(test)]
#[path = "cube_test.rs"]
mod cube_test;
