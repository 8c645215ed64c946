//! Per-build traversal statistics.
//!
//! Counters are relaxed atomics bumped from every worker during the
//! recursion and read once, after the root join has completed.
//!
//! # Usage
//!
//! ```ignore
//! let stats = builder.build_timed(&field, &sink);
//! println!(
//!   "{} triangles, {:.1}% of internal regions pruned",
//!   stats.triangle_count,
//!   stats.prune_ratio() * 100.0
//! );
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters shared by every branch of one build.
#[derive(Debug, Default)]
pub struct TraversalCounters {
  visited: AtomicU64,
  pruned: AtomicU64,
  leaves: AtomicU64,
}

impl TraversalCounters {
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub fn record_visit(&self) {
    self.visited.fetch_add(1, Ordering::Relaxed);
  }

  #[inline]
  pub fn record_prune(&self) {
    self.pruned.fetch_add(1, Ordering::Relaxed);
  }

  #[inline]
  pub fn record_leaf(&self) {
    self.leaves.fetch_add(1, Ordering::Relaxed);
  }

  /// Freeze the counters into a [`BuildStats`].
  pub fn finish(&self, triangle_count: usize, build_time_us: u64) -> BuildStats {
    BuildStats {
      triangle_count,
      regions_visited: self.visited.load(Ordering::Relaxed),
      regions_pruned: self.pruned.load(Ordering::Relaxed),
      leaves_built: self.leaves.load(Ordering::Relaxed),
      build_time_us,
    }
  }
}

/// Summary of one completed build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
  /// Triangles reported by the root of the recursion.
  pub triangle_count: usize,
  /// Every region `decompose` was called on, leaves included.
  pub regions_visited: u64,
  /// Internal regions rejected by the distance bound.
  pub regions_pruned: u64,
  /// Unit cells handed to the cube builder.
  pub leaves_built: u64,
  /// Wall time of the build in microseconds.
  pub build_time_us: u64,
}

impl BuildStats {
  /// Visited regions that were not unit cells.
  pub fn internal_regions(&self) -> u64 {
    self.regions_visited - self.leaves_built
  }

  /// Internal regions that were subdivided (neither pruned nor leaves).
  pub fn expanded_regions(&self) -> u64 {
    self.internal_regions() - self.regions_pruned
  }

  /// Fraction of internal regions that were pruned, in `[0, 1]`.
  pub fn prune_ratio(&self) -> f64 {
    let internal = self.internal_regions();
    if internal == 0 {
      0.0
    } else {
      self.regions_pruned as f64 / internal as f64
    }
  }
}
