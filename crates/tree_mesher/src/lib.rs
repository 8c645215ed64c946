//! tree_mesher - parallel octree isosurface extraction
//!
//! Extracts a triangle mesh of the surface `field(p) == iso_level` from a
//! distance-like scalar field defined by a set of sample points. Instead of
//! visiting every cell of the grid, the grid is recursively split into
//! octants and whole octants are skipped when a single sample at their
//! center proves the surface cannot pass through them.
//!
//! # Features
//!
//! - **Conservative pruning**: a region is skipped only when
//!   `field(center) > iso + √3/2 · edge`, which can never drop surface for a
//!   distance-like field
//! - **Implicit octree**: regions are `(offset, edge)` values; no tree is
//!   allocated
//! - **Fork-join parallelism**: every subdivision spawns 8 rayon tasks and
//!   joins them before returning the summed triangle count
//! - **Pluggable collaborators**: field, leaf triangulator and triangle sink
//!   are traits
//!
//! # Example
//!
//! ```ignore
//! use tree_mesher::{GridConfig, PointCloudField, SharedTriangles, TreeMeshBuilder};
//!
//! let field = PointCloudField::from_arrays(&[[32.0, 32.0, 32.0]]);
//! let config = GridConfig::new().with_edge_size(64).with_iso_level(10.0);
//! let builder = TreeMeshBuilder::new(config)?;
//!
//! let sink = SharedTriangles::new();
//! let count = builder.build(&field, &sink);
//!
//! println!("Generated {} triangles", count);
//! ```

pub mod constants;
pub mod edge_table;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{CUBE_CORNERS, HALF_SQRT_3, OCTANT_OFFSETS};
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
pub use error::ConfigError;
pub use types::{GridConfig, Triangle};

// Field evaluation
pub mod field;
pub use field::{PointCloudField, ScalarField};

// Leaf triangulation and triangle collection
pub mod cube;
pub mod sink;
pub use cube::{CubeBuilder, MarchingCubes};
pub use sink::{SharedTriangles, TriangleSink};

// Implicit octree recursion
pub mod octree;
pub use octree::{can_prune, Decomposer, Region};

// Parallel driver
pub mod builder;
pub use builder::TreeMeshBuilder;

// Non-pruning reference extraction
pub mod exhaustive;

// Traversal statistics
pub mod metrics;
pub use metrics::{BuildStats, TraversalCounters};

// Test fixtures
#[cfg(test)]
pub(crate) mod test_utils;
