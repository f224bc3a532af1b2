//! Error types shared by the storage engine and the graph algorithms.

use crate::graph::Index;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Failures surfaced by graph storage and search.
///
/// Every variant is detected and returned synchronously at the call that hit
/// it; nothing is retried or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    /// A vertex slot at or beyond the current capacity was addressed.
    #[error("vertex index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: Index,
        /// Number of allocated slots at the time of the call.
        capacity: usize,
    },
    /// A* exhausted its open set without reaching the destination.
    #[error("no path from vertex {origin} to vertex {destination}")]
    PathNotFound {
        /// Where the search started.
        origin: Index,
        /// The unreachable target.
        destination: Index,
    },
}

impl GraphError {
    /// Checks `index` against `capacity`, producing [`GraphError::IndexOutOfRange`] on failure.
    #[inline]
    pub(crate) fn check_index(index: Index, capacity: usize) -> Result<()> {
        if index < capacity {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange { index, capacity })
        }
    }
}
