use super::*;
use crate::field::PointCloudField;
use crate::sink::SharedTriangles;

fn contains_point(tri: &Triangle, p: Vec3) -> bool {
  tri.vertices.iter().any(|v| v.distance(p) < 1e-5)
}

#[test]
fn test_cube_index_all_outside_and_inside() {
  assert_eq!(cube_index(&[1.0; 8], 0.5), 0);
  assert_eq!(cube_index(&[0.0; 8], 0.5), 255);
}

#[test]
fn test_cube_index_bit_order() {
  let mut values = [1.0; 8];
  values[0] = 0.0;
  values[6] = 0.0;
  assert_eq!(cube_index(&values, 0.5), 0b0100_0001);
}

/// Values exactly at the iso-level count as outside.
#[test]
fn test_cube_index_iso_level_is_outside() {
  assert_eq!(cube_index(&[0.5; 8], 0.5), 0);
}

#[test]
fn test_interpolate_vertex_midpoint() {
  let p = interpolate_vertex(Vec3::ZERO, Vec3::X * 2.0, 0.0, 1.0, 0.5);
  assert!((p - Vec3::X).length() < 1e-6);
}

#[test]
fn test_interpolate_vertex_snaps_to_endpoints() {
  assert_eq!(interpolate_vertex(Vec3::ZERO, Vec3::X, 0.5, 1.0, 0.5), Vec3::ZERO);
  assert_eq!(interpolate_vertex(Vec3::ZERO, Vec3::X, 0.0, 0.5, 0.5), Vec3::X);
  // Degenerate edge with equal values does not divide by zero
  assert_eq!(interpolate_vertex(Vec3::ZERO, Vec3::X, 0.3, 0.3, 0.5), Vec3::ZERO);
}

#[test]
fn test_empty_field_produces_nothing() {
  let field = PointCloudField::default();
  let sink = SharedTriangles::new();
  let config = GridConfig::default();

  let count = MarchingCubes.build_leaf_cube(Vec3::ZERO, &field, &config, &sink);

  assert_eq!(count, 0);
  assert!(sink.is_empty());
}

/// A sample on corner 0 with iso 0.5 cuts off that corner with one triangle
/// through the midpoints of its three edges.
#[test]
fn test_single_corner_cut() {
  let field = PointCloudField::new(vec![Vec3::ZERO]);
  let sink = SharedTriangles::new();
  let config = GridConfig::new().with_edge_size(1).with_iso_level(0.5);

  let count = MarchingCubes.build_leaf_cube(Vec3::ZERO, &field, &config, &sink);

  assert_eq!(count, 1);
  let tris = sink.into_inner();
  assert_eq!(tris.len(), 1);
  for p in [Vec3::X * 0.5, Vec3::Y * 0.5, Vec3::Z * 0.5] {
    assert!(contains_point(&tris[0], p), "Missing vertex {:?}", p);
  }
}

/// Offset is in grid units and is scaled by the resolution.
#[test]
fn test_offset_and_resolution_place_cell_in_world() {
  let offset = Vec3::new(2.0, 3.0, 4.0);
  let config = GridConfig::new().with_resolution(0.5).with_iso_level(0.25);
  let corner0 = offset * config.resolution;
  let field = PointCloudField::new(vec![corner0]);
  let sink = SharedTriangles::new();

  let count = MarchingCubes.build_leaf_cube(offset, &field, &config, &sink);

  assert_eq!(count, 1);
  let tri = sink.into_inner()[0];
  for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
    assert!(contains_point(&tri, corner0 + axis * 0.25));
  }
}

/// A cell whose corners are all farther than the iso-level is empty even
/// when a sample sits inside it.
#[test]
fn test_all_corners_outside_is_empty() {
  let config = GridConfig::new().with_iso_level(0.5);
  let field = PointCloudField::new(vec![Vec3::splat(0.5)]);
  let sink = SharedTriangles::new();

  assert_eq!(
    MarchingCubes.build_leaf_cube(Vec3::ZERO, &field, &config, &sink),
    0
  );
}

/// Emitted triangle count always agrees with what reached the sink.
#[test]
fn test_count_matches_sink() {
  let field = PointCloudField::from_arrays(&[[0.2, 0.1, 0.0], [1.0, 1.0, 0.7], [0.0, 0.9, 1.0]]);
  let config = GridConfig::new().with_iso_level(0.6);
  let sink = SharedTriangles::new();

  let count = MarchingCubes.build_leaf_cube(Vec3::ZERO, &field, &config, &sink);

  assert!(count > 0);
  assert_eq!(count, sink.len());
}
