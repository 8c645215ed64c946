//! Implicit octree over the extraction grid.
//!
//! No tree nodes are stored. A node is a [`Region`] value (offset + edge in
//! grid cells), children are computed on demand, and the recursion's call
//! stack is the only tree that ever exists.
//!
//! # Module Structure
//!
//! - [`region`]: `Region` - immutable value type for octree nodes
//! - [`decompose`]: prune test and the parallel fork-join recursion

pub mod decompose;
pub mod region;

// Re-exports
pub use decompose::{can_prune, Decomposer};
pub use region::Region;
