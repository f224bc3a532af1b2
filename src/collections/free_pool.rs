//! `FreeIndexPool`: a FIFO of reusable slot indices with O(1) membership.
//!
//! Slot-based containers hand out dense indices and recycle them after a
//! removal. The queue decides *which* freed index is reissued next (oldest
//! first), while the companion set answers "is this slot free?" without a
//! scan, which is what live-only iteration needs.
//!
//! Invariant: every index appears in the queue at most once, and the queue
//! and the set always hold the same indices.

use crate::graph::Index;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// A queue of freed indices paired with a membership set.
#[derive(Debug, Clone, Default)]
pub struct FreeIndexPool {
    queue: VecDeque<Index>,
    members: FxHashSet<Index>,
}

impl FreeIndexPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of free indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if no index is waiting for reuse.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns `true` if `index` is currently free.
    #[inline]
    pub fn contains(&self, index: Index) -> bool {
        self.members.contains(&index)
    }

    /// Enqueues `index` for reuse.
    ///
    /// Returns `false` (and leaves the pool untouched) if it was already free.
    pub fn release(&mut self, index: Index) -> bool {
        if !self.members.insert(index) {
            return false;
        }
        self.queue.push_back(index);
        true
    }

    /// Takes the oldest freed index, if any.
    pub fn acquire(&mut self) -> Option<Index> {
        let index = self.queue.pop_front()?;
        self.members.remove(&index);
        Some(index)
    }

    /// Keeps only the indices for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(Index) -> bool,
    {
        let members = &mut self.members;
        self.queue.retain(|&index| {
            let kept = keep(index);
            if !kept {
                members.remove(&index);
            }
            kept
        });
    }

    /// Forgets every free index.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.members.clear();
    }

    /// Iterates over free indices in reuse order.
    pub fn iter(&self) -> impl Iterator<Item = Index> + '_ {
        self.queue.iter().copied()
    }
}
