// Library exports for percolation
pub mod error;
pub mod grid;
pub mod stats;
pub mod union_find;

pub use error::{PercolationError, Result};
pub use grid::PercolationGrid;
pub use stats::PercolationStats;
pub use union_find::UnionFind;
