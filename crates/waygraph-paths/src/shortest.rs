//! The single-source shortest-path routine behind BFS and Dijkstra.

use std::fmt;
use std::hash::Hash;

use crate::frontier::Frontier;
use crate::pathfinder::{PathFinder, Route, UNREACHABLE};
use crate::traits::WeightedPather;

impl<N: Copy + Ord + Hash + fmt::Debug + fmt::Display> PathFinder<N> {
    /// Shortest route from `from` to `to`, expanding vertices in the order the
    /// `frontier` hands them out.
    ///
    /// A vertex is final once popped. Relaxation is strict, so among equally
    /// cheap routes the first one discovered is kept. Blocked vertices other
    /// than `to` are never entered. `None` means `to` was never discovered;
    /// a found route may still have an infinite distance if its weights
    /// overflow `f64`.
    pub(crate) fn shortest<P, F>(
        &mut self,
        pather: &P,
        from: N,
        to: N,
        frontier: &mut F,
    ) -> Option<Route<N>>
    where
        P: WeightedPather<Node = N> + ?Sized,
        F: Frontier<N>,
    {
        if !pather.contains(from) || !pather.contains(to) {
            return None;
        }
        if from == to {
            return Some(Route {
                distance: 0.0,
                path: vec![from],
            });
        }
        if !self.endpoints_admitted(pather, from, to) {
            return None;
        }

        self.visited.clear();
        self.costs.clear();
        self.parents.clear();

        self.costs.insert(from, 0.0);
        frontier.push(from, 0.0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(cur) = frontier.pop() {
            if !self.visited.insert(cur) {
                continue;
            }
            if cur == to {
                break;
            }
            let cur_cost = self.costs.get(&cur).copied().unwrap_or(UNREACHABLE);

            nbuf.clear();
            pather.neighbors(cur, &mut nbuf);

            for &n in nbuf.iter() {
                if self.visited.contains(&n) || !Self::passable(pather, n, to) {
                    continue;
                }
                let tentative = cur_cost + pather.cost(cur, n);
                // A sum of finite weights may overflow to infinity; the first
                // discovery still counts.
                let improves = self.costs.get(&n).is_none_or(|&known| tentative < known);
                if improves {
                    self.costs.insert(n, tentative);
                    self.parents.insert(n, cur);
                    frontier.push(n, tentative);
                }
            }
        }

        self.nbuf = nbuf;

        // `to` was never discovered.
        let distance = self.costs.get(&to).copied()?;

        // Reconstruct path.
        let mut path = vec![to];
        let mut cur = to;
        while cur != from {
            cur = *self.parents.get(&cur)?;
            path.push(cur);
        }
        path.reverse();
        Some(Route { distance, path })
    }
}
