//! Configuration errors.
//!
//! Extraction itself is infallible; everything that can go wrong is caught
//! once when a [`TreeMeshBuilder`](crate::TreeMeshBuilder) is constructed.

use thiserror::Error;

/// Rejected grid configuration or worker pool setup.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The halving recursion only terminates exactly at unit cells when the
  /// root edge is a power of two.
  #[error("grid edge size {0} is not a power of two")]
  EdgeSizeNotPowerOfTwo(u32),

  #[error("grid resolution must be finite and positive, got {0}")]
  InvalidResolution(f32),

  #[error("iso level must be finite, got {0}")]
  InvalidIsoLevel(f32),

  #[error("failed to build worker pool: {0}")]
  ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
