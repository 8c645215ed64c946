//! Geometric constants shared by the octree recursion and the cell
//! triangulator.
//!
//! Two different corner orderings live here and they are NOT interchangeable:
//!
//! ```text
//! OCTANT_OFFSETS (bit-coded, used for child regions):
//!   octant = z << 2 | y << 1 | x
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//!
//! CUBE_CORNERS (marching cubes winding, used by EDGE_TABLE / TRI_TABLE):
//!       7──────6
//!      /│     /│
//!     4─┼────5 │          +Y
//!     │ 3────┼─2           │  +Z
//!     │/     │/            │ /
//!     0──────1             └───+X
//! ```

use glam::Vec3;

/// `√3 / 2`: circumscribed-sphere radius of a cube with unit edge.
///
/// Multiplied by a region's world-space edge this gives the farthest any
/// point of the region can be from its center.
pub const HALF_SQRT_3: f32 = 0.866_025_4;

/// Number of children produced by one subdivision.
pub const OCTANT_COUNT: usize = 8;

/// Child offsets in units of half the parent edge, indexed by octant code
/// (bit 0 = X, bit 1 = Y, bit 2 = Z).
pub const OCTANT_OFFSETS: [Vec3; OCTANT_COUNT] = [
  Vec3::new(0.0, 0.0, 0.0),
  Vec3::new(1.0, 0.0, 0.0),
  Vec3::new(0.0, 1.0, 0.0),
  Vec3::new(1.0, 1.0, 0.0),
  Vec3::new(0.0, 0.0, 1.0),
  Vec3::new(1.0, 0.0, 1.0),
  Vec3::new(0.0, 1.0, 1.0),
  Vec3::new(1.0, 1.0, 1.0),
];

/// Unit cell corners in marching cubes order.
pub const CUBE_CORNERS: [Vec3; 8] = [
  Vec3::new(0.0, 0.0, 0.0),
  Vec3::new(1.0, 0.0, 0.0),
  Vec3::new(1.0, 1.0, 0.0),
  Vec3::new(0.0, 1.0, 0.0),
  Vec3::new(0.0, 0.0, 1.0),
  Vec3::new(1.0, 0.0, 1.0),
  Vec3::new(1.0, 1.0, 1.0),
  Vec3::new(0.0, 1.0, 1.0),
];

/// Decode an octant code into its (x, y, z) bits.
#[inline]
pub const fn octant_bits(octant: u8) -> (u32, u32, u32) {
  (
    (octant & 1) as u32,
    ((octant >> 1) & 1) as u32,
    ((octant >> 2) & 1) as u32,
  )
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
