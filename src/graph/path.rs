//! `GraphPath`: an ordered walk through a graph, as produced by A*.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::contract::Graph;
use crate::graph::view::GraphView;
use crate::graph::Index;

/// Vertex indices from an origin to a destination.
///
/// Each consecutive pair is an edge of the graph the path was found in. A path
/// with a single index means origin and destination coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphPath {
    vertices: Vec<Index>,
}

impl GraphPath {
    /// Wraps an ordered list of vertex indices.
    pub fn new(vertices: Vec<Index>) -> Self {
        Self { vertices }
    }

    /// The vertex indices, origin first.
    pub fn vertices(&self) -> &[Index] {
        &self.vertices
    }

    /// Number of vertices on the path.
    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns `true` if the path holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex.
    pub fn origin(&self) -> Option<Index> {
        self.vertices.first().copied()
    }

    /// Last vertex.
    pub fn destination(&self) -> Option<Index> {
        self.vertices.last().copied()
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (Index, Index)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Calls `block(from, to)` for every edge along the path.
    pub fn for_each<F>(&self, mut block: F)
    where
        F: FnMut(Index, Index),
    {
        for (from, to) in self.edges() {
            block(from, to);
        }
    }

    /// Sums `distance` over the path's edges in `graph`.
    ///
    /// Returns `None` if some consecutive pair is not connected in `graph`.
    pub fn cost<G, F, D>(&self, graph: &G, mut distance: D) -> Option<F>
    where
        G: Graph,
        F: Float,
        D: FnMut(Index, Index, &G::Edge) -> F,
    {
        self.edges().try_fold(F::zero(), |total, (from, to)| {
            graph.edge(from, to).map(|edge| total + distance(from, to, edge))
        })
    }

    /// The path's vertices as a [`GraphView`] over `graph`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`](crate::GraphError::IndexOutOfRange) if
    /// the path names a slot `graph` does not have.
    pub fn view<'g, G: Graph>(&self, graph: &'g G) -> Result<GraphView<'g, G>> {
        GraphView::new(graph, self.vertices.iter().copied())
    }

    /// Consumes the path, returning its indices.
    pub fn into_vertices(self) -> Vec<Index> {
        self.vertices
    }
}

impl From<Vec<Index>> for GraphPath {
    fn from(vertices: Vec<Index>) -> Self {
        Self::new(vertices)
    }
}

impl IntoIterator for GraphPath {
    type Item = Index;
    type IntoIter = std::vec::IntoIter<Index>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a> IntoIterator for &'a GraphPath {
    type Item = Index;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Index>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdjacencyList;

    #[test]
    fn test_path_edges_and_endpoints() {
        let path = GraphPath::new(vec![4, 2, 7]);
        assert_eq!(path.count(), 3);
        assert_eq!(path.edge_count(), 2);
        assert_eq!(path.origin(), Some(4));
        assert_eq!(path.destination(), Some(7));
        assert_eq!(path.edges().collect::<Vec<_>>(), vec![(4, 2), (2, 7)]);

        let mut seen = Vec::new();
        path.for_each(|from, to| seen.push((from, to)));
        assert_eq!(seen, vec![(4, 2), (2, 7)]);
    }

    #[test]
    fn test_single_vertex_path_has_no_edges() {
        let path = GraphPath::from(vec![3]);
        assert_eq!(path.edge_count(), 0);
        assert_eq!(path.edges().count(), 0);
        assert!(!path.is_empty());
        assert!(GraphPath::default().is_empty());
    }

    #[test]
    fn test_path_cost_and_view() {
        let mut graph: AdjacencyList<&str, f32> = ["a", "b", "c"].into_iter().collect();
        graph.connect(0, 1, 1.5).unwrap();
        graph.connect(1, 2, 2.0).unwrap();

        let path = GraphPath::new(vec![0, 1, 2]);
        assert_eq!(path.cost(&graph, |_, _, &w| w), Some(3.5));
        assert_eq!(GraphPath::new(vec![0, 2]).cost(&graph, |_, _, &w| w), None);

        let names: Vec<_> = path.view(&graph).unwrap().iter().map(|(_, v)| *v).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(GraphPath::new(vec![0, 9]).view(&graph).is_err());
    }

    #[test]
    fn test_path_into_iter() {
        let path = GraphPath::new(vec![1, 2, 3]);
        assert_eq!((&path).into_iter().sum::<usize>(), 6);
        assert_eq!(path.into_vertices(), vec![1, 2, 3]);
    }
}
