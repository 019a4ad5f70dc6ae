//! Connectivity: depth-first reachability between two vertices.

use std::fmt;
use std::hash::Hash;

use crate::PathFinder;
use crate::options::BlockedEndpoints;
use crate::traits::Pather;

impl<N: Copy + Ord + Hash + fmt::Debug + fmt::Display> PathFinder<N> {
    /// Whether `to` can be reached from `from` without passing through a
    /// blocked vertex.
    ///
    /// Returns `false` if either position is not a vertex, and `true` when
    /// both name the same vertex. Whether a blocked `from` or `to` may take
    /// part at all is decided by
    /// [`SearchOptions::blocked_endpoints`](crate::SearchOptions). The
    /// answer is symmetric in `from` and `to`.
    pub fn connected<P: Pather<Node = N> + ?Sized>(&mut self, pather: &P, from: N, to: N) -> bool {
        if !pather.contains(from) || !pather.contains(to) {
            return false;
        }
        if from == to {
            return true;
        }
        if !self.endpoints_admitted(pather, from, to) {
            return false;
        }

        self.visited.clear();
        self.stack.clear();
        self.stack.push(from);
        self.visited.insert(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        // Iterative DFS from `from`.
        'search: while let Some(cur) = self.stack.pop() {
            nbuf.clear();
            pather.neighbors(cur, &mut nbuf);
            for &n in nbuf.iter() {
                if n == to {
                    found = true;
                    break 'search;
                }
                if !pather.is_blocked(n) && self.visited.insert(n) {
                    self.stack.push(n);
                }
            }
        }

        self.nbuf = nbuf;
        log::trace!("connected {from} -> {to}: {found}");
        found
    }

    /// Every vertex `v` for which [`connected`](Self::connected)`(from, v)`
    /// holds, in ascending order. Empty if `from` is not a vertex.
    ///
    /// Blocked vertices bordering the reachable region are included when the
    /// policy allows blocked endpoints, but the flood never passes through
    /// them.
    pub fn reachable<P: Pather<Node = N> + ?Sized>(&mut self, pather: &P, from: N) -> Vec<N> {
        if !pather.contains(from) {
            return Vec::new();
        }
        let allow = self.options.blocked_endpoints == BlockedEndpoints::Allow;
        if !allow && pather.is_blocked(from) {
            return vec![from];
        }

        self.visited.clear();
        self.stack.clear();
        self.stack.push(from);
        self.visited.insert(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(cur) = self.stack.pop() {
            nbuf.clear();
            pather.neighbors(cur, &mut nbuf);
            for &n in nbuf.iter() {
                if pather.is_blocked(n) {
                    if allow {
                        self.visited.insert(n);
                    }
                } else if self.visited.insert(n) {
                    self.stack.push(n);
                }
            }
        }

        self.nbuf = nbuf;
        let mut out: Vec<N> = self.visited.iter().copied().collect();
        out.sort_unstable();
        out
    }
}
