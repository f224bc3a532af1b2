//! The capability set every graph backend exposes.
//!
//! Algorithms in [`crate::graph::algorithms`] are written against [`Graph`]
//! only, so a different storage layout (a dense matrix, a memory-mapped
//! table) can be substituted without touching them.

use crate::error::Result;
use crate::graph::view::EdgeView;
use crate::graph::Index;

/// A mutable directed graph with stable vertex indices.
///
/// Indices are dense over `[0, capacity)`. A slot may be dead (removed and not
/// yet reissued); `size` counts only live slots while `capacity` counts all of
/// them. At most one edge exists per ordered `(from, to)` pair.
pub trait Graph {
    /// Data stored per vertex.
    type Vertex;
    /// Payload stored per directed edge.
    type Edge;
    /// Iterator over live vertices in ascending index order.
    type Vertices<'a>: Iterator<Item = (Index, &'a Self::Vertex)>
    where
        Self: 'a;

    /// Number of live vertices.
    fn size(&self) -> usize;

    /// Number of allocated slots, live or dead.
    fn capacity(&self) -> usize;

    /// Returns the data in slot `index`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`](crate::GraphError::IndexOutOfRange) if
    /// `index >= capacity`.
    fn vertex(&self, index: Index) -> Result<&Self::Vertex>;

    /// Mutable counterpart of [`Graph::vertex`].
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`](crate::GraphError::IndexOutOfRange) if
    /// `index >= capacity`.
    fn vertex_mut(&mut self, index: Index) -> Result<&mut Self::Vertex>;

    /// Returns the edge `from -> to`, if connected.
    fn edge(&self, from: Index, to: Index) -> Option<&Self::Edge>;

    /// Mutable counterpart of [`Graph::edge`].
    fn edge_mut(&mut self, from: Index, to: Index) -> Option<&mut Self::Edge>;

    /// Inserts or replaces the edge `from -> to`, returning the replaced payload.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`](crate::GraphError::IndexOutOfRange) if
    /// either endpoint is `>= capacity`.
    fn connect(&mut self, from: Index, to: Index, edge: Self::Edge) -> Result<Option<Self::Edge>>;

    /// Removes the edge `from -> to`. Returns `true` iff an edge was removed.
    fn disconnect(&mut self, from: Index, to: Index) -> bool;

    /// Snapshot of the outgoing `(destination, edge)` pairs of `index`.
    ///
    /// The pairs are materialized at call time and carry no ordering guarantee.
    /// An out-of-range index yields an empty view.
    fn edges_from(&self, index: Index) -> EdgeView<'_, Self::Edge>;

    /// Live vertices in ascending index order.
    fn all_vertices(&self) -> Self::Vertices<'_>;

    /// Adds a vertex, reusing a freed slot when one is available.
    fn push(&mut self, vertex: Self::Vertex) -> Index;

    /// Clears slot `index` and returns it to the free pool.
    ///
    /// Returns the previous data, or `None` if the slot was already free.
    /// Edges *into* `index` held by other vertices are left in place.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`](crate::GraphError::IndexOutOfRange) if
    /// `index >= capacity`.
    fn remove(&mut self, index: Index) -> Result<Option<Self::Vertex>>
    where
        Self::Vertex: Default;

    /// Returns `true` if there are no live vertices.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Like [`Graph::vertex`] but discards the error.
    fn get_vertex(&self, index: Index) -> Option<&Self::Vertex> {
        self.vertex(index).ok()
    }

    /// Returns `true` if `from -> to` is connected.
    fn contains_edge(&self, from: Index, to: Index) -> bool {
        self.edge(from, to).is_some()
    }
}
