//! `IndexedHeap`: a binary min-heap of vertex indices keyed by a priority.
//!
//! Alongside the heap array it keeps an index → position map, which gives:
//! - O(1) membership tests (`contains`)
//! - O(log n) priority updates for an entry already queued
//!
//! Priorities only need `PartialOrd`; incomparable values (NaN) never win a
//! comparison, so they sink but do not corrupt the structure. Among equal
//! priorities the pop order is unspecified.

use crate::graph::Index;
use core::fmt;
use rustc_hash::FxHashMap;

/// A min-heap over `(Index, P)` entries with at most one entry per index.
pub struct IndexedHeap<P> {
    data: Vec<(Index, P)>,
    positions: FxHashMap<Index, usize>,
}

impl<P: PartialOrd + Copy> IndexedHeap<P> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of queued indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `index` is queued.
    #[inline]
    pub fn contains(&self, index: Index) -> bool {
        self.positions.contains_key(&index)
    }

    /// Returns the queued priority of `index`.
    pub fn priority(&self, index: Index) -> Option<P> {
        self.positions.get(&index).map(|&pos| self.data[pos].1)
    }

    /// Queues `index` with `priority`, or moves it to `priority` if already queued.
    ///
    /// Returns `true` if the index was newly inserted.
    pub fn push(&mut self, index: Index, priority: P) -> bool {
        if let Some(&pos) = self.positions.get(&index) {
            let previous = self.data[pos].1;
            self.data[pos].1 = priority;
            if priority < previous {
                self.sift_up(pos);
            } else {
                self.sift_down(pos);
            }
            return false;
        }

        let pos = self.data.len();
        self.data.push((index, priority));
        self.positions.insert(index, pos);
        self.sift_up(pos);
        true
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(Index, P)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap(0, last);
        let entry = self.data.pop()?;
        self.positions.remove(&entry.0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Returns the entry with the smallest priority without removing it.
    pub fn peek(&self) -> Option<(Index, P)> {
        self.data.first().copied()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.data[a].1 < self.data[b].1
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.data.swap(a, b);
        self.positions.insert(self.data[a].0, a);
        self.positions.insert(self.data[b].0, b);
    }
}

impl<P> IndexedHeap<P> {
    /// Iterates over queued entries in arbitrary order.
    pub fn iter(&self) -> core::slice::Iter<'_, (Index, P)> {
        self.data.iter()
    }
}

impl<P: PartialOrd + Copy> Default for IndexedHeap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug> fmt::Debug for IndexedHeap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedHeap")
            .field("len", &self.data.len())
            .finish()
    }
}
