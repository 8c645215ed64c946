//! Recursive octree decomposition with conservative pruning.
//!
//! ```text
//! decompose(region)
//!   │
//!   ├─ edge <= 1 ─────────────────────────► cube_builder.build_leaf_cube
//!   │
//!   ├─ field(center) > iso + √3/2 · edge ──► 0   (no descendant evaluated)
//!   │
//!   └─ rayon::scope ┬─ spawn decompose(child 0) ─┐
//!                   ├─ ...                       ├─ fetch_add(total)
//!                   └─ spawn decompose(child 7) ─┘
//!                   (scope returns after all 8)  ──► total
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use super::Region;
use crate::cube::CubeBuilder;
use crate::field::ScalarField;
use crate::metrics::TraversalCounters;
use crate::sink::TriangleSink;
use crate::types::GridConfig;

/// Whether the surface provably cannot cross `region`.
///
/// Every point of the region is within `√3/2 · edge` of its center. For a
/// distance-like field the value anywhere in the region is therefore at
/// least `field(center) - √3/2 · edge`; if that still exceeds the iso-level
/// no corner can be inside and no triangle can be produced.
#[inline]
pub fn can_prune<F>(field: &F, region: &Region, config: &GridConfig) -> bool
where
  F: ScalarField + ?Sized,
{
  let center = region.world_center(config.resolution);
  field.evaluate(center) > config.iso_level + region.bounding_radius(config.resolution)
}

/// Borrowed state for one build's recursion.
///
/// Holds only shared references; each recursive call's node is the
/// [`Region`] argument itself.
pub struct Decomposer<'a, F: ?Sized, C, S: ?Sized> {
  config: &'a GridConfig,
  field: &'a F,
  cube_builder: &'a C,
  sink: &'a S,
  counters: &'a TraversalCounters,
}

impl<'a, F, C, S> Decomposer<'a, F, C, S>
where
  F: ScalarField + ?Sized,
  C: CubeBuilder,
  S: TriangleSink + ?Sized,
{
  pub fn new(
    config: &'a GridConfig,
    field: &'a F,
    cube_builder: &'a C,
    sink: &'a S,
    counters: &'a TraversalCounters,
  ) -> Self {
    Self {
      config,
      field,
      cube_builder,
      sink,
      counters,
    }
  }

  /// Triangulate `region`, returning the number of triangles appended to
  /// the sink.
  ///
  /// Must be called from inside a rayon pool for the children to run in
  /// parallel; outside one it falls back to rayon's global pool.
  pub fn decompose(&self, region: Region) -> usize {
    self.counters.record_visit();

    if region.is_leaf() {
      self.counters.record_leaf();
      return self
        .cube_builder
        .build_leaf_cube(region.offset, self.field, self.config, self.sink);
    }

    if can_prune(self.field, &region, self.config) {
      self.counters.record_prune();
      return 0;
    }

    let total = AtomicUsize::new(0);
    rayon::scope(|scope| {
      for child in region.children() {
        let total = &total;
        scope.spawn(move |_| {
          let count = self.decompose(child);
          total.fetch_add(count, Ordering::Relaxed);
        });
      }
    });
    // The scope has joined every child; nothing else touches `total`.
    total.into_inner()
  }
}

#[cfg(test)]
#[path = "decompose_test.rs"]
mod decompose_test;
