//! Graph algorithms written against the [`Graph`](crate::Graph) contract.
//!
//! - [`traversal`]: breadth-first and depth-first visiting, as callbacks or as
//!   an iterator of [`TraversalEvent`]s
//! - [`astar`](mod@astar): least-cost path search

pub mod astar;
pub mod traversal;

pub use astar::astar;
pub use traversal::{
    breadth_first_traverse, depth_first_traverse, flood, reverse_level_order_traverse, traverse,
    Bfs, BreadthFirst, DepthFirst, Dfs, Frontier, Traversal, TraversalEvent,
};
