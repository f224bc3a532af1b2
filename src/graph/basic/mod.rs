//! Basic graph implementations.
//!
//! This module contains the adjacency-list storage engine that the
//! algorithms in [`crate::graph::algorithms`] run against.

pub mod adjacency_list;

pub use adjacency_list::AdjacencyList;
