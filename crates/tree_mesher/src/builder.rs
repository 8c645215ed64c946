//! Parallel driver for octree extraction.
//!
//! Owns one rayon thread pool for its whole lifetime. Each build enters the
//! pool through `install`, so exactly one worker makes the root
//! `decompose` call; the others stay idle until the recursion starts
//! spawning children.
//!
//! # Usage
//!
//! ```ignore
//! let config = GridConfig::new().with_edge_size(64).with_iso_level(0.15);
//! let builder = TreeMeshBuilder::with_threads(config, 8)?;
//!
//! let sink = SharedTriangles::new();
//! let count = builder.build(&field, &sink);
//! assert_eq!(count, sink.len());
//! ```

use rayon::{ThreadPool, ThreadPoolBuilder};
use web_time::Instant;

use crate::cube::{CubeBuilder, MarchingCubes};
use crate::error::ConfigError;
use crate::exhaustive;
use crate::field::ScalarField;
use crate::metrics::{BuildStats, TraversalCounters};
use crate::octree::{Decomposer, Region};
use crate::sink::{SharedTriangles, TriangleSink};
use crate::types::{GridConfig, Triangle};

/// Octree isosurface extractor bound to a grid and a worker pool.
pub struct TreeMeshBuilder<C = MarchingCubes> {
  config: GridConfig,
  cube_builder: C,
  pool: ThreadPool,
}

impl TreeMeshBuilder<MarchingCubes> {
  /// Create a builder using rayon's default worker count.
  pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
    Self::with_threads(config, 0)
  }

  /// Create a builder with exactly `num_threads` workers (0 = rayon
  /// default).
  pub fn with_threads(config: GridConfig, num_threads: usize) -> Result<Self, ConfigError> {
    config.validate()?;

    let pool = ThreadPoolBuilder::new()
      .num_threads(num_threads)
      .thread_name(|index| format!("tree-mesher-{index}"))
      .build()?;

    tracing::debug!(
      edge_size = config.edge_size,
      resolution = config.resolution,
      iso_level = config.iso_level,
      threads = pool.current_num_threads(),
      "created tree mesh builder"
    );

    Ok(Self {
      config,
      cube_builder: MarchingCubes,
      pool,
    })
  }
}

impl<C: CubeBuilder> TreeMeshBuilder<C> {
  /// Swap the leaf triangulator, keeping the grid and the pool.
  pub fn with_cube_builder<D: CubeBuilder>(self, cube_builder: D) -> TreeMeshBuilder<D> {
    TreeMeshBuilder {
      config: self.config,
      cube_builder,
      pool: self.pool,
    }
  }

  pub fn config(&self) -> &GridConfig {
    &self.config
  }

  pub fn cube_builder(&self) -> &C {
    &self.cube_builder
  }

  /// Number of workers in this builder's pool.
  pub fn num_threads(&self) -> usize {
    self.pool.current_num_threads()
  }

  /// Extract the isosurface of `field`, appending triangles to `sink`.
  ///
  /// Returns the total triangle count once the entire recursion has
  /// completed.
  pub fn build<F, S>(&self, field: &F, sink: &S) -> usize
  where
    F: ScalarField + ?Sized,
    S: TriangleSink + ?Sized,
  {
    self.build_timed(field, sink).triangle_count
  }

  /// [`build`](Self::build), also reporting traversal counters and timing.
  #[tracing::instrument(skip_all, name = "tree_mesher::build")]
  pub fn build_timed<F, S>(&self, field: &F, sink: &S) -> BuildStats
  where
    F: ScalarField + ?Sized,
    S: TriangleSink + ?Sized,
  {
    let counters = TraversalCounters::new();
    let root = Region::root(self.config.edge_size);
    let decomposer = Decomposer::new(&self.config, field, &self.cube_builder, sink, &counters);

    let start = Instant::now();
    let triangle_count = self.pool.install(|| decomposer.decompose(root));
    let stats = counters.finish(triangle_count, start.elapsed().as_micros() as u64);

    tracing::debug!(
      triangles = stats.triangle_count,
      visited = stats.regions_visited,
      pruned = stats.regions_pruned,
      leaves = stats.leaves_built,
      build_time_us = stats.build_time_us,
      "octree build complete"
    );

    stats
  }

  /// Build into a fresh triangle list and hand it back.
  pub fn extract<F>(&self, field: &F) -> (usize, Vec<Triangle>)
  where
    F: ScalarField + ?Sized,
  {
    let sink = SharedTriangles::new();
    let count = self.build(field, &sink);
    (count, sink.into_inner())
  }

  /// Triangulate every cell with no pruning, on this builder's pool.
  pub fn build_exhaustive<F, S>(&self, field: &F, sink: &S) -> usize
  where
    F: ScalarField + ?Sized,
    S: TriangleSink + ?Sized,
  {
    self
      .pool
      .install(|| exhaustive::build(&self.config, field, &self.cube_builder, sink))
  }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
