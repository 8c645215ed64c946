//! Shared append targets for triangles produced by concurrent leaves.

use std::sync::{Mutex, PoisonError};

use crate::types::Triangle;

/// Destination for triangles emitted during extraction.
///
/// `append` is called concurrently from any number of workers with no
/// ordering guarantee. The extraction core never reads back from a sink.
pub trait TriangleSink: Sync {
  fn append(&self, triangle: Triangle);
}

impl TriangleSink for Mutex<Vec<Triangle>> {
  fn append(&self, triangle: Triangle) {
    self
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(triangle);
  }
}

/// Coarse-locked triangle list owned by the caller.
///
/// Leaves are the rare, pruned-down case, so a single mutex is not the
/// bottleneck.
#[derive(Debug, Default)]
pub struct SharedTriangles {
  triangles: Mutex<Vec<Triangle>>,
}

impl SharedTriangles {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      triangles: Mutex::new(Vec::with_capacity(capacity)),
    }
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  /// Move out everything appended so far, leaving the sink empty.
  pub fn take(&self) -> Vec<Triangle> {
    std::mem::take(&mut *self.lock())
  }

  pub fn into_inner(self) -> Vec<Triangle> {
    self
      .triangles
      .into_inner()
      .unwrap_or_else(PoisonError::into_inner)
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Triangle>> {
    self.triangles.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl TriangleSink for SharedTriangles {
  #[inline]
  fn append(&self, triangle: Triangle) {
    self.lock().push(triangle);
  }
}

#[cfg(test)]
mod tests {
  use glam::Vec3;
  use rayon::prelude::*;

  use super::*;

  fn tri(i: usize) -> Triangle {
    let x = i as f32;
    Triangle::new(Vec3::new(x, 0.0, 0.0), Vec3::new(x, 1.0, 0.0), Vec3::new(x, 0.0, 1.0))
  }

  #[test]
  fn test_append_and_take() {
    let sink = SharedTriangles::new();
    assert!(sink.is_empty());

    sink.append(tri(0));
    sink.append(tri(1));
    assert_eq!(sink.len(), 2);

    let taken = sink.take();
    assert_eq!(taken, vec![tri(0), tri(1)]);
    assert!(sink.is_empty());
  }

  #[test]
  fn test_concurrent_appends_are_not_lost() {
    let sink = SharedTriangles::with_capacity(10_000);

    (0..10_000usize).into_par_iter().for_each(|i| sink.append(tri(i)));

    let mut xs: Vec<usize> = sink
      .into_inner()
      .iter()
      .map(|t| t.vertices[0].x as usize)
      .collect();
    xs.sort_unstable();
    assert_eq!(xs, (0..10_000).collect::<Vec<_>>());
  }

  #[test]
  fn test_plain_mutex_is_a_sink() {
    let sink = Mutex::new(Vec::new());
    (0..100usize).into_par_iter().for_each(|i| sink.append(tri(i)));
    assert_eq!(sink.into_inner().unwrap().len(), 100);
  }
}
