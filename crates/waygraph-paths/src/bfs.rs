use std::fmt;
use std::hash::Hash;

use crate::PathFinder;
use crate::frontier::Fifo;
use crate::pathfinder::Route;
use crate::traits::{Pather, UnitCost};

impl<N: Copy + Ord + Hash + fmt::Debug + fmt::Display> PathFinder<N> {
    /// Fewest-hops route from `from` to `to` by breadth-first search.
    ///
    /// Edge weights are ignored; `distance` is the hop count. Neighbours are
    /// expanded in ascending order, so among routes of equal length the one
    /// that turns towards the smaller vertex first wins. Returns `None` if no
    /// route avoids the blocked vertices.
    pub fn bfs_path<P: Pather<Node = N> + ?Sized>(
        &mut self,
        pather: &P,
        from: N,
        to: N,
    ) -> Option<Route<N>> {
        log::trace!("bfs {from} -> {to}");
        let route = self.shortest(&UnitCost(pather), from, to, &mut Fifo::new());
        match &route {
            Some(r) => log::debug!("bfs {from} -> {to}: {} hop(s)", r.hops()),
            None => log::debug!("bfs {from} -> {to}: no path"),
        }
        route
    }
}
