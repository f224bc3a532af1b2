//! A* search for a least-cost path between two vertices.
//!
//! The caller supplies two closures:
//! - `heuristic(from, to)`: an estimate of the remaining cost. It must never
//!   overestimate (admissible) for the returned path to be optimal.
//! - `distance(from, to, edge)`: the cost of traversing one edge. It must be
//!   non-negative.
//!
//! The open set is an [`IndexedHeap`] keyed by f-score (`g + h`). Membership
//! is a hash lookup and improving a queued vertex re-sifts it in place, so a
//! vertex is never queued twice and the heap order always matches the latest
//! scores. Among equal f-scores the pop order is unspecified, so when several
//! optimal paths exist any one of them may be returned.

use num_traits::Float;
use rustc_hash::FxHashMap;

use crate::collections::IndexedHeap;
use crate::error::{GraphError, Result};
use crate::graph::contract::Graph;
use crate::graph::path::GraphPath;
use crate::graph::Index;

/// Finds a least-cost path from `origin` to `destination`.
///
/// # Errors
/// - [`GraphError::IndexOutOfRange`] if either endpoint is `>= capacity`.
/// - [`GraphError::PathNotFound`] if `destination` is unreachable.
///
/// # Example
///
/// ```rust
/// use grapphs::{astar, AdjacencyList};
///
/// let mut graph: AdjacencyList<(f32, f32), f32> = AdjacencyList::new();
/// let a = graph.push((0.0, 0.0));
/// let b = graph.push((1.0, 0.0));
/// let c = graph.push((2.0, 0.0));
/// graph.connect(a, b, 1.0).unwrap();
/// graph.connect(b, c, 1.0).unwrap();
/// graph.connect(a, c, 5.0).unwrap();
///
/// let path = astar(
///     &graph,
///     a,
///     c,
///     |from, to| {
///         let (fx, fy) = graph.vertex(from).unwrap();
///         let (tx, ty) = graph.vertex(to).unwrap();
///         ((tx - fx).powi(2) + (ty - fy).powi(2)).sqrt()
///     },
///     |_, _, &cost| cost,
/// )
/// .unwrap();
/// assert_eq!(path.vertices(), &[a, b, c]);
/// ```
pub fn astar<G, F, H, D>(
    graph: &G,
    origin: Index,
    destination: Index,
    mut heuristic: H,
    mut distance: D,
) -> Result<GraphPath>
where
    G: Graph,
    F: Float,
    H: FnMut(Index, Index) -> F,
    D: FnMut(Index, Index, &G::Edge) -> F,
{
    let capacity = graph.capacity();
    GraphError::check_index(origin, capacity)?;
    GraphError::check_index(destination, capacity)?;
    debug_event!(origin, destination, "a* search started");

    let mut g_score: FxHashMap<Index, F> = FxHashMap::default();
    let mut predecessor: FxHashMap<Index, Index> = FxHashMap::default();
    let mut open = IndexedHeap::new();

    g_score.insert(origin, F::zero());
    open.push(origin, heuristic(origin, destination));

    while let Some((current, _)) = open.pop() {
        if current == destination {
            let path = rebuild_path(origin, destination, &predecessor);
            debug_event!(
                origin,
                destination,
                vertices = path.count(),
                scored = g_score.len(),
                "a* found path"
            );
            return Ok(path);
        }

        let current_g = g_score.get(&current).copied().unwrap_or_else(F::infinity);
        for (neighbor, edge) in graph.edges_from(current) {
            let attempt = current_g + distance(current, neighbor, edge);
            let improves = g_score.get(&neighbor).map_or(true, |&known| attempt < known);
            if !improves {
                continue;
            }

            predecessor.insert(neighbor, current);
            g_score.insert(neighbor, attempt);
            let f_score = attempt + heuristic(neighbor, destination);
            open.push(neighbor, f_score);
            trace_event!(vertex = neighbor, via = current, "a* relaxed edge");
        }
    }

    debug_event!(origin, destination, scored = g_score.len(), "a* exhausted open set");
    Err(GraphError::PathNotFound {
        origin,
        destination,
    })
}

/// Walks predecessor links back from `destination` and reverses them.
///
/// Every vertex scored by the search, other than `origin`, has a predecessor,
/// so the chain always ends at `origin`.
fn rebuild_path(
    origin: Index,
    destination: Index,
    predecessor: &FxHashMap<Index, Index>,
) -> GraphPath {
    let mut vertices = vec![destination];
    let mut current = destination;
    while let Some(&previous) = predecessor.get(&current).filter(|_| current != origin) {
        vertices.push(previous);
        current = previous;
    }
    debug_assert_eq!(vertices.last(), Some(&origin), "predecessor chain is broken");
    vertices.reverse();
    GraphPath::new(vertices)
}
