//! # `grapphs` - Directed Graph Toolkit
//!
//! In-memory directed graphs with stable integer vertex indices, typed vertex
//! and edge payloads, breadth-first and depth-first traversal, and A* search.
//!
//! ## Key Features
//!
//! - **Stable indices**: a vertex keeps its [`Index`] for as long as it lives;
//!   removed slots are recycled oldest-first.
//! - **Typed payloads**: any `V` per vertex and any `E` per directed edge, at
//!   most one edge per ordered pair.
//! - **Generic algorithms**: traversal and A* are written against the
//!   [`Graph`] contract rather than a concrete storage type.
//! - **Explicit errors**: out-of-range indices and unreachable destinations
//!   surface as [`GraphError`] values.
//!
//! ## Architecture
//!
//! 1. **Storage** ([`AdjacencyList`]): a slot table of vertices, each holding
//!    an insertion-ordered map of outgoing edges, plus a pool of free slots.
//! 2. **Views** ([`graph::view`]): lazy vertex iterators and edge snapshots.
//! 3. **Traversal** ([`graph::algorithms::traversal`]): one frontier loop
//!    parameterized by queue (breadth-first) or stack (depth-first) order.
//! 4. **Search** ([`astar()`]): A* with caller-supplied heuristic and edge cost.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events from traversal and search.
//!
//! ## Example
//!
//! ```rust
//! use grapphs::{breadth_first_traverse, AdjacencyList};
//!
//! let mut graph: AdjacencyList<&str, u32> = AdjacencyList::new();
//! let home = graph.push("home");
//! let work = graph.push("work");
//! let gym = graph.push("gym");
//! graph.connect(home, work, 12).unwrap();
//! graph.connect(work, gym, 3).unwrap();
//!
//! let mut order = Vec::new();
//! breadth_first_traverse(&graph, [home], |index| order.push(index), |_, _| {});
//! assert_eq!(order, vec![home, work, gym]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod collections;
pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::algorithms::{
    astar, breadth_first_traverse, depth_first_traverse, flood, reverse_level_order_traverse,
    traverse, Bfs, BreadthFirst, DepthFirst, Dfs, Frontier, Traversal, TraversalEvent,
};
pub use graph::{AdjacencyList, EdgeView, Graph, GraphPath, GraphView, Index};

// Compile-time assertions for layout expectations
const _: () = {
    use core::mem;

    // Errors are returned by value from every fallible call.
    assert!(mem::size_of::<GraphError>() <= mem::size_of::<usize>() * 3);

    // Traversal strategies carry no state.
    assert!(mem::size_of::<BreadthFirst>() == 0);
    assert!(mem::size_of::<DepthFirst>() == 0);
};
