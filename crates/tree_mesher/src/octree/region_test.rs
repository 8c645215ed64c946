use std::collections::HashSet;

use super::*;

/// Child region should have half the edge.
#[test]
fn test_get_child_halves_edge() {
  let parent = Region::root(16);
  let child = parent.get_child(0).expect("Should return child of a 16-cell region");

  assert_eq!(child.edge, 8, "Child edge should be parent edge / 2");
  assert_eq!(child.offset, Vec3::ZERO);
}

/// All 8 octants (0-7) should produce children at the right offsets.
///
/// Octant bits: X (bit 0), Y (bit 1), Z (bit 2)
/// child.offset = parent.offset + bits * parent.edge / 2
#[test]
fn test_get_child_all_8_octants() {
  let parent = Region::new(Vec3::new(8.0, 16.0, 24.0), 8);

  for octant in 0u8..8 {
    let child = parent
      .get_child(octant)
      .unwrap_or_else(|| panic!("Octant {} should return a child", octant));

    let expected = Vec3::new(
      8.0 + 4.0 * (octant & 1) as f32,
      16.0 + 4.0 * ((octant >> 1) & 1) as f32,
      24.0 + 4.0 * ((octant >> 2) & 1) as f32,
    );

    assert_eq!(child.offset, expected, "Octant {} offset mismatch", octant);
    assert_eq!(child.edge, 4, "Octant {} edge mismatch", octant);
    assert_eq!(child.octant_in_parent(), octant);
  }
}

#[test]
fn test_children_matches_get_child() {
  let parent = Region::new(Vec3::new(0.0, 4.0, 0.0), 4);
  let children = parent.children();

  for octant in 0u8..8 {
    assert_eq!(Some(children[octant as usize]), parent.get_child(octant));
  }
}

/// Cannot subdivide a unit cell.
#[test]
fn test_get_child_of_leaf_returns_none() {
  let leaf = Region::new(Vec3::new(3.0, 5.0, 7.0), 1);
  assert!(leaf.is_leaf());

  for octant in 0u8..8 {
    assert!(
      leaf.get_child(octant).is_none(),
      "Unit cell should not produce children for octant {}",
      octant
    );
  }
}

#[test]
fn test_invalid_octant_returns_none() {
  assert!(Region::root(4).get_child(8).is_none());
}

/// Children tile the parent exactly: no cell missing, no cell shared.
#[test]
fn test_children_partition_parent() {
  let parent = Region::new(Vec3::new(4.0, 0.0, 8.0), 4);
  let mut seen = HashSet::new();

  for child in parent.children() {
    for i in 0..child.cell_count() {
      let cell = child.unit_cell(i).as_uvec3();
      assert!(parent.contains_cell(cell));
      assert!(seen.insert(cell), "Cell {:?} covered twice", cell);
    }
  }

  assert_eq!(seen.len() as u64, parent.cell_count());
}

/// Halving from a power-of-two root reaches edge 1 after log2(edge) steps.
#[test]
fn test_depth_is_log2_of_root_edge() {
  let mut region = Region::root(64);
  let mut depth = 0;
  while !region.is_leaf() {
    region = region.children()[7];
    depth += 1;
  }
  assert_eq!(depth, 6);
  assert_eq!(region.edge, 1);
  assert_eq!(region.offset, Vec3::splat(63.0));
}

#[test]
fn test_world_center_and_edge() {
  let region = Region::new(Vec3::new(2.0, 4.0, 6.0), 2);
  let resolution = 0.5;

  assert_eq!(region.world_edge(resolution), 1.0);
  assert_eq!(region.world_center(resolution), Vec3::new(1.5, 2.5, 3.5));
}

#[test]
fn test_bounding_radius_reaches_corners() {
  let region = Region::new(Vec3::ZERO, 4);
  let resolution = 0.25;
  let center = region.world_center(resolution);
  let far_corner = Vec3::splat(region.world_edge(resolution));

  let corner_distance = center.distance(far_corner);
  assert!((region.bounding_radius(resolution) - corner_distance).abs() < 1e-6);
}

#[test]
fn test_unit_cell_ordering() {
  let region = Region::new(Vec3::new(10.0, 20.0, 30.0), 2);
  assert_eq!(region.unit_cell(0), Vec3::new(10.0, 20.0, 30.0));
  assert_eq!(region.unit_cell(1), Vec3::new(11.0, 20.0, 30.0));
  assert_eq!(region.unit_cell(2), Vec3::new(10.0, 21.0, 30.0));
  assert_eq!(region.unit_cell(4), Vec3::new(10.0, 20.0, 31.0));
  assert_eq!(region.unit_cell(7), Vec3::new(11.0, 21.0, 31.0));
}

#[test]
fn test_contains_cell_bounds() {
  let region = Region::new(Vec3::new(4.0, 4.0, 4.0), 4);
  assert!(region.contains_cell(UVec3::splat(4)));
  assert!(region.contains_cell(UVec3::splat(7)));
  assert!(!region.contains_cell(UVec3::splat(8)));
  assert!(!region.contains_cell(UVec3::new(3, 5, 5)));
}
