//! Region - immutable value type for an implicit octree node.
//!
//! A region is fully described by its offset (in grid cells) and edge
//! length (in grid cells). Children are derived on demand; no tree is ever
//! materialized.

use glam::{UVec3, Vec3};

use crate::constants::{HALF_SQRT_3, OCTANT_COUNT, OCTANT_OFFSETS};

/// Cubic block of grid cells.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Region {
  /// Minimum corner, in grid-cell units.
  pub offset: Vec3,
  /// Edge length in grid cells. 1 = unit cell (leaf).
  pub edge: u32,
}

impl Region {
  pub fn new(offset: Vec3, edge: u32) -> Self {
    Self { offset, edge }
  }

  /// The whole grid: origin offset, `edge_size` cells per axis.
  pub fn root(edge_size: u32) -> Self {
    Self::new(Vec3::ZERO, edge_size)
  }

  /// Unit cells are triangulated directly instead of subdivided.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.edge <= 1
  }

  /// Get child region (half the edge).
  ///
  /// Octant: 0-7 where bits represent +X, +Y, +Z offsets:
  /// - bit 0: X offset (0 or 1)
  /// - bit 1: Y offset (0 or 1)
  /// - bit 2: Z offset (0 or 1)
  ///
  /// Returns None for a unit cell (cannot subdivide further).
  pub fn get_child(&self, octant: u8) -> Option<Self> {
    if self.is_leaf() || octant as usize >= OCTANT_COUNT {
      return None;
    }
    Some(self.child(octant))
  }

  /// All 8 children in octant order.
  pub fn children(&self) -> [Self; OCTANT_COUNT] {
    debug_assert!(!self.is_leaf(), "unit cells cannot be subdivided");
    std::array::from_fn(|octant| self.child(octant as u8))
  }

  #[inline]
  fn child(&self, octant: u8) -> Self {
    let half = self.edge / 2;
    Self {
      offset: self.offset + OCTANT_OFFSETS[octant as usize] * half as f32,
      edge: half,
    }
  }

  /// Which octant of its parent this region occupies.
  ///
  /// Only meaningful for regions produced by subdivision of a root at the
  /// origin.
  pub fn octant_in_parent(&self) -> u8 {
    let cell = self.cell_coords() / self.edge.max(1);
    ((cell.x & 1) | ((cell.y & 1) << 1) | ((cell.z & 1) << 2)) as u8
  }

  /// Edge length in world units.
  #[inline]
  pub fn world_edge(&self, resolution: f32) -> f32 {
    self.edge as f32 * resolution
  }

  /// Geometric center in world units.
  #[inline]
  pub fn world_center(&self, resolution: f32) -> Vec3 {
    self.offset * resolution + Vec3::splat(self.world_edge(resolution) * 0.5)
  }

  /// Radius of the sphere circumscribing the region, in world units.
  #[inline]
  pub fn bounding_radius(&self, resolution: f32) -> f32 {
    HALF_SQRT_3 * self.world_edge(resolution)
  }

  /// Offset as integer cell coordinates.
  #[inline]
  pub fn cell_coords(&self) -> UVec3 {
    self.offset.as_uvec3()
  }

  /// Number of unit cells inside the region.
  #[inline]
  pub fn cell_count(&self) -> u64 {
    let e = self.edge as u64;
    e * e * e
  }

  /// Offset of the `index`-th unit cell (X fastest, then Y, then Z).
  pub fn unit_cell(&self, index: u64) -> Vec3 {
    debug_assert!(index < self.cell_count());
    let e = self.edge as u64;
    let x = index % e;
    let y = (index / e) % e;
    let z = index / (e * e);
    self.offset + Vec3::new(x as f32, y as f32, z as f32)
  }

  /// Whether the unit cell at `cell` lies inside this region.
  pub fn contains_cell(&self, cell: UVec3) -> bool {
    let min = self.cell_coords();
    let max = min + UVec3::splat(self.edge);
    cell.cmpge(min).all() && cell.cmplt(max).all()
  }
}

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;
