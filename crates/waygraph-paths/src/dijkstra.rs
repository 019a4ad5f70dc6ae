use std::fmt;
use std::hash::Hash;

use crate::PathFinder;
use crate::frontier::MinScan;
use crate::pathfinder::Route;
use crate::traits::WeightedPather;

impl<N: Copy + Ord + Hash + fmt::Debug + fmt::Display> PathFinder<N> {
    /// Cheapest route from `from` to `to` by Dijkstra's algorithm.
    ///
    /// The next vertex to finalise is found by a linear scan of the open set,
    /// ties going to the smallest vertex; a search is O(V²). Relaxation never
    /// steps onto a blocked vertex other than `to`. Returns `None` when no
    /// route reaches `to`. Weights large enough to overflow give a route with
    /// an infinite `distance`, not `None`.
    pub fn dijkstra_path<P: WeightedPather<Node = N> + ?Sized>(
        &mut self,
        pather: &P,
        from: N,
        to: N,
    ) -> Option<Route<N>> {
        log::trace!("dijkstra {from} -> {to}");
        let route = self.shortest(pather, from, to, &mut MinScan::new());
        match &route {
            Some(r) => log::debug!(
                "dijkstra {from} -> {to}: distance {} over {} hop(s)",
                r.distance,
                r.hops()
            ),
            None => log::debug!("dijkstra {from} -> {to}: no path"),
        }
        route
    }
}
