//! Directed graphs with index-addressed vertices and the algorithms over them.
//!
//! Graph implementations are organized into categories:
//! - `basic`: the adjacency-list storage engine
//! - `view`: lazy and snapshot views over graph contents
//! - `algorithms`: breadth/depth-first traversal and A* search
//! - `path`: the path type produced by search

pub mod algorithms;
pub mod basic;
mod contract;
pub mod path;
pub mod view;

/// Position of a vertex slot inside a graph.
///
/// Indices are assigned by [`Graph::push`] and stay valid until the vertex is
/// removed, after which the slot may be handed out again.
pub type Index = usize;

pub use algorithms::{astar, breadth_first_traverse, depth_first_traverse, flood, traverse};
pub use basic::AdjacencyList;
pub use contract::Graph;
pub use path::GraphPath;
pub use view::{EdgeView, GraphView, Vertices, VerticesMut};
