//! Lazy and snapshot views over graph contents.
//!
//! - [`Vertices`] / [`VerticesMut`]: live `(index, vertex)` pairs in ascending
//!   index order, computed lazily from the slot table.
//! - [`EdgeView`]: a materialized list of one vertex's outgoing edges.
//! - [`GraphView`]: vertices for a caller-chosen list of indices.
//!
//! Every view is single-pass; call the producing method again to restart.

use core::iter::{Enumerate, FusedIterator};
use core::slice;

use crate::collections::FreeIndexPool;
use crate::error::{GraphError, Result};
use crate::graph::basic::adjacency_list::Node;
use crate::graph::contract::Graph;
use crate::graph::Index;

/// Iterator over live vertices of an [`AdjacencyList`](crate::AdjacencyList).
pub struct Vertices<'a, V, E> {
    slots: Enumerate<slice::Iter<'a, Node<V, E>>>,
    free: &'a FreeIndexPool,
    remaining: usize,
}

impl<'a, V, E> Vertices<'a, V, E> {
    pub(crate) fn new(nodes: &'a [Node<V, E>], free: &'a FreeIndexPool) -> Self {
        Self {
            slots: nodes.iter().enumerate(),
            free,
            remaining: nodes.len() - free.len(),
        }
    }
}

impl<'a, V, E> Iterator for Vertices<'a, V, E> {
    type Item = (Index, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for (index, node) in self.slots.by_ref() {
            if self.free.contains(index) {
                continue;
            }
            self.remaining -= 1;
            return Some((index, node.data()));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, E> ExactSizeIterator for Vertices<'_, V, E> {}

impl<V, E> FusedIterator for Vertices<'_, V, E> {}

impl<V, E> Clone for Vertices<'_, V, E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            free: self.free,
            remaining: self.remaining,
        }
    }
}

/// Iterator over live vertices with mutable access to their data.
pub struct VerticesMut<'a, V, E> {
    slots: Enumerate<slice::IterMut<'a, Node<V, E>>>,
    free: &'a FreeIndexPool,
    remaining: usize,
}

impl<'a, V, E> VerticesMut<'a, V, E> {
    pub(crate) fn new(nodes: &'a mut [Node<V, E>], free: &'a FreeIndexPool) -> Self {
        let remaining = nodes.len() - free.len();
        Self {
            slots: nodes.iter_mut().enumerate(),
            free,
            remaining,
        }
    }
}

impl<'a, V, E> Iterator for VerticesMut<'a, V, E> {
    type Item = (Index, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for (index, node) in self.slots.by_ref() {
            if self.free.contains(index) {
                continue;
            }
            self.remaining -= 1;
            return Some((index, node.data_mut()));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, E> ExactSizeIterator for VerticesMut<'_, V, E> {}

impl<V, E> FusedIterator for VerticesMut<'_, V, E> {}

/// A snapshot of one vertex's outgoing edges.
///
/// The pairs are copied out of the adjacency map when the view is created, so
/// the view's contents do not follow later edits to that map.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeView<'a, E> {
    edges: Vec<(Index, &'a E)>,
}

impl<'a, E> EdgeView<'a, E> {
    /// Wraps an already materialized list of `(destination, edge)` pairs.
    pub fn new(edges: Vec<(Index, &'a E)>) -> Self {
        Self { edges }
    }

    /// Number of edges in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the snapshot holds no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the snapshot without consuming it.
    pub fn iter(&self) -> impl Iterator<Item = (Index, &'a E)> + '_ {
        self.edges.iter().copied()
    }

    /// Destination indices in snapshot order.
    pub fn destinations(&self) -> impl Iterator<Item = Index> + '_ {
        self.edges.iter().map(|&(to, _)| to)
    }

    /// Returns the snapshot as a slice.
    pub fn as_slice(&self) -> &[(Index, &'a E)] {
        &self.edges
    }
}

impl<E> Default for EdgeView<'_, E> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<'a, E> FromIterator<(Index, &'a E)> for EdgeView<'a, E> {
    fn from_iter<I: IntoIterator<Item = (Index, &'a E)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, E> IntoIterator for EdgeView<'a, E> {
    type Item = (Index, &'a E);
    type IntoIter = std::vec::IntoIter<(Index, &'a E)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'v, 'a, E> IntoIterator for &'v EdgeView<'a, E> {
    type Item = (Index, &'a E);
    type IntoIter = core::iter::Copied<slice::Iter<'v, (Index, &'a E)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter().copied()
    }
}

/// Vertices of a graph restricted to a caller-chosen sequence of indices.
///
/// Indices are validated when the view is built and yielded in the order
/// given, duplicates included.
pub struct GraphView<'g, G: Graph> {
    graph: &'g G,
    indices: Vec<Index>,
}

impl<'g, G: Graph> GraphView<'g, G> {
    /// Builds a view over `indices`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] for the first index `>= capacity`.
    pub fn new<I>(graph: &'g G, indices: I) -> Result<Self>
    where
        I: IntoIterator<Item = Index>,
    {
        let capacity = graph.capacity();
        let indices = indices
            .into_iter()
            .map(|index| GraphError::check_index(index, capacity).map(|()| index))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { graph, indices })
    }

    /// Number of indices in the view.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The viewed indices.
    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    /// Iterates over `(index, vertex)` pairs in view order.
    pub fn iter(&self) -> impl Iterator<Item = (Index, &'g G::Vertex)> + '_ {
        let graph = self.graph;
        self.indices
            .iter()
            .filter_map(move |&index| graph.get_vertex(index).map(|vertex| (index, vertex)))
    }
}

impl<G: Graph> Clone for GraphView<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            indices: self.indices.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdjacencyList;

    fn sample() -> AdjacencyList<char, u32> {
        let mut graph: AdjacencyList<char, u32> = "abcde".chars().collect();
        graph.connect(0, 1, 10).unwrap();
        graph.connect(0, 2, 20).unwrap();
        graph.connect(1, 2, 30).unwrap();
        graph
    }

    #[test]
    fn test_vertices_ascending_and_exact_size() {
        let mut graph = sample();
        graph.remove(1).unwrap();
        graph.remove(3).unwrap();

        let vertices = graph.all_vertices();
        assert_eq!(vertices.len(), 3);
        let collected: Vec<_> = vertices.map(|(i, v)| (i, *v)).collect();
        assert_eq!(collected, vec![(0, 'a'), (2, 'c'), (4, 'e')]);
    }

    #[test]
    fn test_vertices_restartable() {
        let graph = sample();
        let first: Vec<_> = graph.all_vertices().map(|(i, _)| i).collect();
        let second: Vec<_> = graph.all_vertices().map(|(i, _)| i).collect();
        assert_eq!(first, second);

        let mut iter = graph.all_vertices();
        let copy = iter.clone();
        iter.next();
        assert_eq!(copy.count(), 5);
        assert_eq!(iter.count(), 4);
    }

    #[test]
    fn test_edge_view_contents() {
        let graph = sample();
        let view = graph.edges_from(0);
        assert_eq!(view.len(), 2);

        let mut pairs: Vec<_> = view.iter().map(|(to, e)| (to, *e)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(1, 10), (2, 20)]);

        let mut destinations: Vec<_> = view.destinations().collect();
        destinations.sort_unstable();
        assert_eq!(destinations, vec![1, 2]);

        assert!(graph.edges_from(4).is_empty());
        assert!(graph.edges_from(99).is_empty());
    }

    #[test]
    fn test_edge_view_read_then_act() {
        let mut graph = sample();
        let owned: Vec<(Index, u32)> = graph
            .edges_from(0)
            .into_iter()
            .map(|(to, e)| (to, *e))
            .collect();

        // Acting on the snapshot while mutating the same adjacency.
        for (to, _) in &owned {
            graph.disconnect(0, *to);
        }
        assert!(graph.edges_from(0).is_empty());
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_graph_view_order_and_validation() {
        let graph = sample();
        let view = GraphView::new(&graph, [4, 0, 2]).unwrap();
        assert_eq!(view.len(), 3);
        let collected: Vec<_> = view.iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(collected, vec![(4, 'e'), (0, 'a'), (2, 'c')]);

        assert_eq!(
            GraphView::new(&graph, [1, 5]).err(),
            Some(GraphError::IndexOutOfRange { index: 5, capacity: 5 })
        );
    }
}
