//! Exhaustive extraction: triangulate every unit cell, no pruning.
//!
//! This is the ground truth the octree is checked against and the baseline
//! it is benchmarked against. Cells are independent, so they are simply
//! fanned out with a rayon parallel iterator.

use rayon::prelude::*;

use crate::cube::CubeBuilder;
use crate::field::ScalarField;
use crate::octree::Region;
use crate::sink::TriangleSink;
use crate::types::GridConfig;

/// Triangulate the whole grid described by `config`.
#[tracing::instrument(skip_all, name = "tree_mesher::exhaustive")]
pub fn build<F, C, S>(config: &GridConfig, field: &F, cube_builder: &C, sink: &S) -> usize
where
  F: ScalarField + ?Sized,
  C: CubeBuilder,
  S: TriangleSink + ?Sized,
{
  build_region(Region::root(config.edge_size), config, field, cube_builder, sink)
}

/// Triangulate every unit cell of `region`.
pub fn build_region<F, C, S>(
  region: Region,
  config: &GridConfig,
  field: &F,
  cube_builder: &C,
  sink: &S,
) -> usize
where
  F: ScalarField + ?Sized,
  C: CubeBuilder,
  S: TriangleSink + ?Sized,
{
  (0..region.cell_count())
    .into_par_iter()
    .map(|i| cube_builder.build_leaf_cube(region.unit_cell(i), field, config, sink))
    .sum()
}
