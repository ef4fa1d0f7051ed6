/// Error types shared by the union-find, grid and trial driver
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// Bad grid dimension, trial count or site coordinate
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Union-find element outside the universe
    #[error("index {index} out of range for {count} elements")]
    OutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, PercolationError>;
