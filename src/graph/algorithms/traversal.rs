//! Breadth-first and depth-first traversal over any [`Graph`].
//!
//! Both orders share one loop body: a frontier deque plus a visited table.
//! The [`Frontier`] tag decides which end of the deque is popped, FIFO head
//! for [`BreadthFirst`] and LIFO tail for [`DepthFirst`].
//!
//! Visiting follows a skip-on-dequeue policy. A vertex may sit in the frontier
//! several times before its first visit, but it is reported once:
//! 1. pop an index; if already visited, drop it silently
//! 2. report the vertex and mark it visited
//! 3. for every neighbor not visited *right now*, report the edge and push the neighbor
//!
//! Because step 3 checks only the visited table, an edge is reported for each
//! time a not-yet-visited vertex is discovered, which can be more than once.

use core::marker::PhantomData;
use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::graph::contract::Graph;
use crate::graph::Index;

/// Pop discipline for the traversal frontier.
pub trait Frontier {
    /// Human-readable name, used in diagnostics.
    const NAME: &'static str;

    /// Removes the next index to examine from `open`.
    fn next(open: &mut VecDeque<Index>) -> Option<Index>;
}

/// FIFO frontier: level by level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BreadthFirst;

/// LIFO frontier: most recently discovered first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DepthFirst;

impl Frontier for BreadthFirst {
    const NAME: &'static str = "breadth-first";

    #[inline]
    fn next(open: &mut VecDeque<Index>) -> Option<Index> {
        open.pop_front()
    }
}

impl Frontier for DepthFirst {
    const NAME: &'static str = "depth-first";

    #[inline]
    fn next(open: &mut VecDeque<Index>) -> Option<Index> {
        open.pop_back()
    }
}

/// One step reported by a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalEvent {
    /// A vertex was visited for the first time.
    Vertex(Index),
    /// An edge led to a vertex that was not yet visited.
    Edge {
        /// The vertex being visited.
        from: Index,
        /// The newly discovered neighbor.
        to: Index,
    },
}

/// A lazy traversal yielding [`TraversalEvent`]s in callback order.
///
/// Each vertex event is followed by the edge events discovered while visiting
/// it. Origins at or beyond the graph's capacity are ignored.
pub struct Traversal<'g, G: Graph, O: Frontier> {
    graph: &'g G,
    open: VecDeque<Index>,
    visited: Vec<bool>,
    visited_count: usize,
    pending: VecDeque<TraversalEvent>,
    _order: PhantomData<O>,
}

/// Breadth-first [`Traversal`].
pub type Bfs<'g, G> = Traversal<'g, G, BreadthFirst>;

/// Depth-first [`Traversal`].
pub type Dfs<'g, G> = Traversal<'g, G, DepthFirst>;

impl<'g, G: Graph, O: Frontier> Traversal<'g, G, O> {
    /// Seeds a traversal of `graph` with `origins`, in iteration order.
    pub fn new<I>(graph: &'g G, origins: I) -> Self
    where
        I: IntoIterator<Item = Index>,
    {
        let capacity = graph.capacity();
        let open = origins.into_iter().filter(|&origin| origin < capacity).collect();
        Self {
            graph,
            open,
            visited: vec![false; capacity],
            visited_count: 0,
            pending: VecDeque::new(),
            _order: PhantomData,
        }
    }

    /// Returns `true` if `index` has been visited so far.
    pub fn is_visited(&self, index: Index) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }

    /// Number of vertices visited so far.
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Drops edge events and yields only visited vertex indices.
    pub fn vertices(self) -> impl Iterator<Item = Index> + 'g
    where
        O: 'g,
    {
        self.filter_map(|event| match event {
            TraversalEvent::Vertex(index) => Some(index),
            TraversalEvent::Edge { .. } => None,
        })
    }

    fn visit_next(&mut self) -> Option<Index> {
        while let Some(next) = O::next(&mut self.open) {
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.visited_count += 1;

            for (neighbor, _) in self.graph.edges_from(next) {
                // Dangling edges past the table are not followed.
                if neighbor >= self.visited.len() || self.visited[neighbor] {
                    continue;
                }
                self.pending.push_back(TraversalEvent::Edge {
                    from: next,
                    to: neighbor,
                });
                self.open.push_back(neighbor);
            }
            return Some(next);
        }
        None
    }
}

impl<G: Graph, O: Frontier> Iterator for Traversal<'_, G, O> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        self.visit_next().map(TraversalEvent::Vertex)
    }
}

/// Visits every vertex reachable from `origins` using frontier discipline `O`.
///
/// `per_vertex` fires once per reached vertex; `per_edge(from, to)` fires for
/// each edge that leads to a vertex not yet visited at that moment.
///
/// The two callbacks are separate closures, so they cannot both mutably
/// borrow the same state. To consume vertices and edges as one interleaved
/// stream, iterate a [`Traversal`] ([`Bfs`] or [`Dfs`]) instead: it yields
/// [`TraversalEvent`]s in exactly the order these callbacks fire.
pub fn traverse<O, G, I, VF, EF>(graph: &G, origins: I, mut per_vertex: VF, mut per_edge: EF)
where
    O: Frontier,
    G: Graph,
    I: IntoIterator<Item = Index>,
    VF: FnMut(Index),
    EF: FnMut(Index, Index),
{
    let mut traversal = Traversal::<G, O>::new(graph, origins);
    trace_event!(order = O::NAME, seeds = traversal.open.len(), "traversal started");

    for event in traversal.by_ref() {
        match event {
            TraversalEvent::Vertex(index) => per_vertex(index),
            TraversalEvent::Edge { from, to } => per_edge(from, to),
        }
    }

    debug_event!(
        order = O::NAME,
        visited = traversal.visited_count(),
        "traversal finished"
    );
}

/// Breadth-first [`traverse`].
pub fn breadth_first_traverse<G, I, VF, EF>(graph: &G, origins: I, per_vertex: VF, per_edge: EF)
where
    G: Graph,
    I: IntoIterator<Item = Index>,
    VF: FnMut(Index),
    EF: FnMut(Index, Index),
{
    traverse::<BreadthFirst, _, _, _, _>(graph, origins, per_vertex, per_edge);
}

/// Depth-first [`traverse`].
pub fn depth_first_traverse<G, I, VF, EF>(graph: &G, origins: I, per_vertex: VF, per_edge: EF)
where
    G: Graph,
    I: IntoIterator<Item = Index>,
    VF: FnMut(Index),
    EF: FnMut(Index, Index),
{
    traverse::<DepthFirst, _, _, _, _>(graph, origins, per_vertex, per_edge);
}

/// Floods outward from `origins`. Same as [`breadth_first_traverse`].
pub fn flood<G, I, VF, EF>(graph: &G, origins: I, per_vertex: VF, per_edge: EF)
where
    G: Graph,
    I: IntoIterator<Item = Index>,
    VF: FnMut(Index),
    EF: FnMut(Index, Index),
{
    breadth_first_traverse(graph, origins, per_vertex, per_edge);
}

/// Replays a breadth-first traversal from the leaves inward.
///
/// Runs a full breadth-first traversal first, recording vertex and edge order.
/// Vertices are then reported in reverse; right after each vertex, the
/// recorded edges ending at it are reported, also in reverse order.
pub fn reverse_level_order_traverse<G, I, VF, EF>(
    graph: &G,
    origins: I,
    mut per_vertex: VF,
    mut per_edge: EF,
) where
    G: Graph,
    I: IntoIterator<Item = Index>,
    VF: FnMut(Index),
    EF: FnMut(Index, Index),
{
    let mut vertex_order = Vec::new();
    let mut edge_order = Vec::new();
    breadth_first_traverse(
        graph,
        origins,
        |vertex| vertex_order.push(vertex),
        |from, to| edge_order.push((from, to)),
    );

    let mut incoming: FxHashMap<Index, Vec<Index>> = FxHashMap::default();
    for &(from, to) in edge_order.iter().rev() {
        incoming.entry(to).or_default().push(from);
    }

    for &vertex in vertex_order.iter().rev() {
        per_vertex(vertex);
        if let Some(sources) = incoming.get(&vertex) {
            for &from in sources {
                per_edge(from, vertex);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdjacencyList;

    fn tree() -> AdjacencyList<i32, bool> {
        let mut graph: AdjacencyList<i32, bool> = (0..10).map(|_| 0).collect();
        for (from, to) in [(0, 1), (1, 2), (1, 3), (2, 6), (3, 4), (3, 5), (6, 7), (6, 8), (6, 9)] {
            graph.connect(from, to, true).unwrap();
        }
        graph
    }

    fn record<F>(run: F) -> (Vec<Index>, Vec<(Index, Index)>)
    where
        F: FnOnce(&mut dyn FnMut(Index), &mut dyn FnMut(Index, Index)),
    {
        let mut vertices = Vec::new();
        let mut edges = Vec::new();
        run(&mut |v| vertices.push(v), &mut |from, to| edges.push((from, to)));
        (vertices, edges)
    }

    #[test]
    fn test_depth_first_order() {
        let graph = tree();
        let (vertices, edges) = record(|pv, pe| depth_first_traverse(&graph, [0], pv, pe));

        assert_eq!(vertices, vec![0, 1, 3, 5, 4, 2, 6, 9, 8, 7]);
        assert_eq!(
            edges,
            vec![(0, 1), (1, 2), (1, 3), (3, 4), (3, 5), (2, 6), (6, 7), (6, 8), (6, 9)]
        );
    }

    #[test]
    fn test_breadth_first_levels() {
        let graph = tree();
        let (vertices, edges) = record(|pv, pe| breadth_first_traverse(&graph, [0], pv, pe));

        assert_eq!(vertices.len(), 10);
        assert_eq!(vertices[..2], [0, 1]);
        let mut level = vertices[2..4].to_vec();
        level.sort_unstable();
        assert_eq!(level, vec![2, 3]);
        let mut level = vertices[4..7].to_vec();
        level.sort_unstable();
        assert_eq!(level, vec![4, 5, 6]);
        let mut level = vertices[7..].to_vec();
        level.sort_unstable();
        assert_eq!(level, vec![7, 8, 9]);
        assert_eq!(edges.len(), 9);
    }

    #[test]
    fn test_skip_on_dequeue_reports_vertex_once() {
        // Diamond: 3 is discovered from both 1 and 2 before it is visited.
        let mut graph: AdjacencyList<(), ()> = (0..4).map(|_| ()).collect();
        for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            graph.connect(from, to, ()).unwrap();
        }

        let (vertices, edges) = record(|pv, pe| breadth_first_traverse(&graph, [0], pv, pe));
        assert_eq!(vertices, vec![0, 1, 2, 3]);
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_cycles_and_self_loops_terminate() {
        let mut graph: AdjacencyList<(), ()> = (0..3).map(|_| ()).collect();
        for (from, to) in [(0, 0), (0, 1), (1, 2), (2, 0)] {
            graph.connect(from, to, ()).unwrap();
        }

        let (vertices, edges) = record(|pv, pe| depth_first_traverse(&graph, [0], pv, pe));
        assert_eq!(vertices, vec![0, 1, 2]);
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_empty_origins_and_out_of_range() {
        let graph = tree();
        let (vertices, edges) = record(|pv, pe| flood(&graph, [], pv, pe));
        assert!(vertices.is_empty());
        assert!(edges.is_empty());

        let (vertices, _) = record(|pv, pe| flood(&graph, [42], pv, pe));
        assert!(vertices.is_empty());

        let empty = AdjacencyList::<(), ()>::new();
        let (vertices, _) = record(|pv, pe| breadth_first_traverse(&empty, [0], pv, pe));
        assert!(vertices.is_empty());
    }

    #[test]
    fn test_multiple_origins() {
        let graph = tree();
        let (vertices, _) = record(|pv, pe| flood(&graph, [3, 6], pv, pe));
        let mut sorted = vertices.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(vertices[..2], [3, 6]);
    }

    #[test]
    fn test_reverse_level_order() {
        let graph = tree();
        let (forward, _) = record(|pv, pe| breadth_first_traverse(&graph, [0], pv, pe));
        let (vertices, edges) = record(|pv, pe| reverse_level_order_traverse(&graph, [0], pv, pe));

        let mut expected = forward;
        expected.reverse();
        assert_eq!(vertices, expected);
        assert_eq!(edges.len(), 9);
        // Every edge is reported right after its destination.
        assert_eq!(edges.last(), Some(&(0, 1)));
        assert!(edges.iter().all(|&(_, to)| to != 0));
    }

    #[test]
    fn test_iterator_events_and_vertices() {
        let graph = tree();
        let mut traversal = Dfs::new(&graph, [3]);
        assert_eq!(traversal.next(), Some(TraversalEvent::Vertex(3)));
        assert_eq!(traversal.next(), Some(TraversalEvent::Edge { from: 3, to: 4 }));
        assert!(traversal.is_visited(3));
        assert!(!traversal.is_visited(4));

        let order: Vec<_> = Bfs::new(&graph, [2]).vertices().collect();
        assert_eq!(order, vec![2, 6, 7, 8, 9]);
    }

    #[test]
    fn test_event_stream_interleaves_like_callbacks() {
        let graph = tree();
        let log = std::cell::RefCell::new(Vec::new());
        breadth_first_traverse(
            &graph,
            [1],
            |v| log.borrow_mut().push(TraversalEvent::Vertex(v)),
            |from, to| log.borrow_mut().push(TraversalEvent::Edge { from, to }),
        );

        let events: Vec<_> = Bfs::new(&graph, [1]).collect();
        assert_eq!(events, log.into_inner());
        assert_eq!(
            events[..4],
            [
                TraversalEvent::Vertex(1),
                TraversalEvent::Edge { from: 1, to: 2 },
                TraversalEvent::Edge { from: 1, to: 3 },
                TraversalEvent::Vertex(2),
            ]
        );
    }
}
