//! Frontier strategies for the shared shortest-path routine.
//!
//! A FIFO frontier turns the routine into breadth-first search (valid for
//! unit costs, where the first discovery of a vertex is final); a
//! minimum-selection frontier turns it into Dijkstra.

use std::collections::{BTreeMap, VecDeque};

pub(crate) trait Frontier<N> {
    /// Enqueue `n` with tentative cost `cost`, replacing any earlier entry.
    fn push(&mut self, n: N, cost: f64);
    /// Remove and return the next vertex to finalise.
    fn pop(&mut self) -> Option<N>;
}

/// First-in first-out queue.
#[derive(Debug)]
pub(crate) struct Fifo<N> {
    queue: VecDeque<N>,
}

impl<N> Fifo<N> {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<N> Frontier<N> for Fifo<N> {
    #[inline]
    fn push(&mut self, n: N, _cost: f64) {
        self.queue.push_back(n);
    }

    #[inline]
    fn pop(&mut self) -> Option<N> {
        self.queue.pop_front()
    }
}

/// Open set scanned linearly for its cheapest entry.
///
/// Ties go to the smallest vertex key, so the selection order is fully
/// determined by the graph. Each `pop` is O(V), a whole search O(V²).
#[derive(Debug)]
pub(crate) struct MinScan<N> {
    open: BTreeMap<N, f64>,
}

impl<N: Ord> MinScan<N> {
    pub(crate) fn new() -> Self {
        Self {
            open: BTreeMap::new(),
        }
    }
}

impl<N: Ord + Copy> Frontier<N> for MinScan<N> {
    #[inline]
    fn push(&mut self, n: N, cost: f64) {
        self.open.insert(n, cost);
    }

    fn pop(&mut self) -> Option<N> {
        let mut best: Option<(N, f64)> = None;
        for (&n, &c) in &self.open {
            // strict `<` keeps the first (smallest) key among equal costs
            if best.is_none_or(|(_, bc)| c < bc) {
                best = Some((n, c));
            }
        }
        let (n, _) = best?;
        self.open.remove(&n);
        Some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_keeps_insertion_order() {
        let mut f = Fifo::new();
        f.push(3, 9.0);
        f.push(1, 0.0);
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn min_scan_breaks_ties_by_key() {
        let mut f = MinScan::new();
        f.push(5, 2.0);
        f.push(4, 2.0);
        f.push(9, 1.0);
        assert_eq!(f.pop(), Some(9));
        assert_eq!(f.pop(), Some(4));
        assert_eq!(f.pop(), Some(5));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn min_scan_push_replaces_cost() {
        let mut f = MinScan::new();
        f.push(1, 10.0);
        f.push(2, 5.0);
        f.push(1, 1.0);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
    }
}
