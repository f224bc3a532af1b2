//! A mutable adjacency-list directed graph with stable indices and slot reuse.
//!
//! Vertices live in one growable table of records. Each record owns a small
//! hash map from destination index to edge payload, so an ordered pair holds
//! at most one edge and re-connecting it replaces the payload.
//!
//! Removing a vertex never renumbers anything: the slot is cleared (data reset
//! to `V::default()`, outgoing edges dropped) and its index goes into a FIFO
//! free pool. The next [`AdjacencyList::push`] reissues the oldest freed index.
//!
//! Edges *into* a removed vertex are not scrubbed. Reading through such an
//! edge after removal reaches the cleared slot (or whatever was pushed into it
//! since), so callers that remove vertices must drop those edges themselves.

use core::fmt;
use core::mem;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::collections::FreeIndexPool;
use crate::error::{GraphError, Result};
use crate::graph::contract::Graph;
use crate::graph::view::{EdgeView, Vertices, VerticesMut};
use crate::graph::Index;

pub(crate) type EdgeMap<E> = IndexMap<Index, E, FxBuildHasher>;

/// One vertex slot: user data plus outgoing adjacency.
#[derive(Clone)]
pub(crate) struct Node<V, E> {
    data: V,
    edges: EdgeMap<E>,
}

impl<V, E> Node<V, E> {
    fn new(data: V) -> Self {
        Self {
            data,
            edges: EdgeMap::default(),
        }
    }

    #[inline]
    pub(crate) fn data(&self) -> &V {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }
}

impl<V: Default, E> Default for Node<V, E> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

/// A directed graph stored as per-vertex edge maps.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `push` | O(1) amortized | Reuses the oldest freed slot first |
/// | `remove` | O(out-degree) | Incoming edges are left untouched |
/// | `connect` | O(1) average | Upsert into the origin's edge map |
/// | `disconnect` | O(1) average | |
/// | `edge` | O(1) average | |
/// | `edges_from` | O(out-degree) | Materializes a snapshot |
/// | `all_vertices` | O(capacity) | Skips free slots via the pool's set |
#[derive(Clone)]
pub struct AdjacencyList<V, E> {
    nodes: Vec<Node<V, E>>,
    free: FreeIndexPool,
}

impl<V, E> AdjacencyList<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: FreeIndexPool::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: FreeIndexPool::new(),
        }
    }

    /// Number of live vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Number of allocated slots, including free ones.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no live vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if `index` names an allocated slot that is not free.
    #[inline]
    pub fn is_live(&self, index: Index) -> bool {
        index < self.nodes.len() && !self.free.contains(index)
    }

    /// Adds a vertex and returns its index.
    ///
    /// If a slot was freed by [`AdjacencyList::remove`], the oldest such slot
    /// is reissued and starts with no outgoing edges; otherwise a new slot is
    /// appended.
    pub fn push(&mut self, vertex: V) -> Index {
        if let Some(index) = self.free.acquire() {
            let node = &mut self.nodes[index];
            node.data = vertex;
            node.edges.clear();
            trace_event!(index, "reused free vertex slot");
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(Node::new(vertex));
        trace_event!(index, "appended vertex slot");
        index
    }

    /// Returns the data in slot `index`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `index >= capacity`.
    pub fn vertex(&self, index: Index) -> Result<&V> {
        let capacity = self.nodes.len();
        self.nodes
            .get(index)
            .map(Node::data)
            .ok_or(GraphError::IndexOutOfRange { index, capacity })
    }

    /// Returns the data in slot `index` mutably.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `index >= capacity`.
    pub fn vertex_mut(&mut self, index: Index) -> Result<&mut V> {
        let capacity = self.nodes.len();
        self.nodes
            .get_mut(index)
            .map(Node::data_mut)
            .ok_or(GraphError::IndexOutOfRange { index, capacity })
    }

    /// Returns the edge `from -> to`, if connected.
    pub fn edge(&self, from: Index, to: Index) -> Option<&E> {
        self.nodes.get(from)?.edges.get(&to)
    }

    /// Returns the edge `from -> to` mutably, if connected.
    pub fn edge_mut(&mut self, from: Index, to: Index) -> Option<&mut E> {
        self.nodes.get_mut(from)?.edges.get_mut(&to)
    }

    /// Inserts or replaces the edge `from -> to`.
    ///
    /// Returns the payload that was replaced, if any.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if either endpoint is `>= capacity`.
    pub fn connect(&mut self, from: Index, to: Index, edge: E) -> Result<Option<E>> {
        let capacity = self.nodes.len();
        GraphError::check_index(from, capacity)?;
        GraphError::check_index(to, capacity)?;
        Ok(self.nodes[from].edges.insert(to, edge))
    }

    /// Removes the edge `from -> to`. Returns `true` iff it existed.
    pub fn disconnect(&mut self, from: Index, to: Index) -> bool {
        self.nodes
            .get_mut(from)
            .is_some_and(|node| node.edges.swap_remove(&to).is_some())
    }

    /// Snapshot of the outgoing `(destination, edge)` pairs of `index`.
    ///
    /// Empty if `index` is out of range.
    pub fn edges_from(&self, index: Index) -> EdgeView<'_, E> {
        match self.nodes.get(index) {
            Some(node) => node.edges.iter().map(|(&to, edge)| (to, edge)).collect(),
            None => EdgeView::default(),
        }
    }

    /// Number of outgoing edges of `index`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `index >= capacity`.
    pub fn out_degree(&self, index: Index) -> Result<usize> {
        let capacity = self.nodes.len();
        self.nodes
            .get(index)
            .map(|node| node.edges.len())
            .ok_or(GraphError::IndexOutOfRange { index, capacity })
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    /// Live vertices in ascending index order.
    pub fn all_vertices(&self) -> Vertices<'_, V, E> {
        Vertices::new(&self.nodes, &self.free)
    }

    /// Live vertices in ascending index order, with mutable data.
    pub fn all_vertices_mut(&mut self) -> VerticesMut<'_, V, E> {
        VerticesMut::new(&mut self.nodes, &self.free)
    }

    /// Alias for [`AdjacencyList::all_vertices`].
    pub fn iter(&self) -> Vertices<'_, V, E> {
        self.all_vertices()
    }

    /// Reserves room for at least `additional` more slots.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Drops every vertex, edge and free slot.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
    }
}

impl<V: Default, E> AdjacencyList<V, E> {
    /// Clears slot `index` and returns it to the free pool.
    ///
    /// The slot's outgoing edges are dropped and its data is replaced by
    /// `V::default()`. Returns the previous data, or `None` if the slot was
    /// already free.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `index >= capacity`.
    pub fn remove(&mut self, index: Index) -> Result<Option<V>> {
        GraphError::check_index(index, self.nodes.len())?;
        if self.free.contains(index) {
            return Ok(None);
        }

        let node = &mut self.nodes[index];
        node.edges.clear();
        let data = mem::take(&mut node.data);
        self.free.release(index);
        debug_event!(index, free = self.free.len(), "removed vertex");
        Ok(Some(data))
    }

    /// Sets the number of slots to `capacity`.
    ///
    /// Growing appends live vertices holding `V::default()`. Shrinking drops
    /// the truncated slots together with any free-pool entries and edges that
    /// refer to them.
    pub fn resize(&mut self, capacity: usize) {
        if capacity >= self.nodes.len() {
            self.nodes.resize_with(capacity, Node::default);
        } else {
            self.nodes.truncate(capacity);
            self.free.retain(|index| index < capacity);
            for node in &mut self.nodes {
                node.edges.retain(|&to, _| to < capacity);
            }
        }
        debug_event!(capacity, live = self.size(), "resized vertex table");
    }
}

impl<V, E> Graph for AdjacencyList<V, E> {
    type Vertex = V;
    type Edge = E;
    type Vertices<'a>
        = Vertices<'a, V, E>
    where
        Self: 'a;

    fn size(&self) -> usize {
        AdjacencyList::size(self)
    }

    fn capacity(&self) -> usize {
        AdjacencyList::capacity(self)
    }

    fn vertex(&self, index: Index) -> Result<&V> {
        AdjacencyList::vertex(self, index)
    }

    fn vertex_mut(&mut self, index: Index) -> Result<&mut V> {
        AdjacencyList::vertex_mut(self, index)
    }

    fn edge(&self, from: Index, to: Index) -> Option<&E> {
        AdjacencyList::edge(self, from, to)
    }

    fn edge_mut(&mut self, from: Index, to: Index) -> Option<&mut E> {
        AdjacencyList::edge_mut(self, from, to)
    }

    fn connect(&mut self, from: Index, to: Index, edge: E) -> Result<Option<E>> {
        AdjacencyList::connect(self, from, to, edge)
    }

    fn disconnect(&mut self, from: Index, to: Index) -> bool {
        AdjacencyList::disconnect(self, from, to)
    }

    fn edges_from(&self, index: Index) -> EdgeView<'_, E> {
        AdjacencyList::edges_from(self, index)
    }

    fn all_vertices(&self) -> Vertices<'_, V, E> {
        AdjacencyList::all_vertices(self)
    }

    fn push(&mut self, vertex: V) -> Index {
        AdjacencyList::push(self, vertex)
    }

    fn remove(&mut self, index: Index) -> Result<Option<V>>
    where
        V: Default,
    {
        AdjacencyList::remove(self, index)
    }
}

impl<V, E> Default for AdjacencyList<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> FromIterator<V> for AdjacencyList<V, E> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V, E> Extend<V> for AdjacencyList<V, E> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for vertex in iter {
            self.push(vertex);
        }
    }
}

impl<'a, V, E> IntoIterator for &'a AdjacencyList<V, E> {
    type Item = (Index, &'a V);
    type IntoIter = Vertices<'a, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_vertices()
    }
}

impl<V, E> fmt::Debug for AdjacencyList<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyList")
            .field("size", &self.size())
            .field("capacity", &self.capacity())
            .field("edges", &self.edge_count())
            .finish()
    }
}
