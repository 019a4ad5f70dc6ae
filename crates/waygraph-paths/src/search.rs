//! One-call searches on any graph, with default [`SearchOptions`].
//!
//! [`GraphSearch`] is implemented for every [`WeightedPather`], which gives
//! [`Graph`](waygraph_core::Graph) and
//! [`WeightedGraph`](waygraph_core::WeightedGraph) their `connected`,
//! `breadth_first_search` and `dijkstra_search` methods. Each call uses a
//! fresh [`PathFinder`]; keep one around and call it directly to reuse its
//! buffers or to choose other options.
//!
//! [`SearchOptions`]: crate::SearchOptions

use crate::pathfinder::{PathFinder, Route};
use crate::traits::WeightedPather;

pub trait GraphSearch: WeightedPather {
    /// Whether `a` and `b` are joined by a path avoiding blocked vertices.
    /// `false` if either is not a vertex.
    fn connected(&self, a: Self::Node, b: Self::Node) -> bool {
        PathFinder::new().connected(self, a, b)
    }

    /// Positions strictly between `start` and `end` on a fewest-hops path,
    /// or `None` if there is no path. An empty vector means the two are
    /// adjacent (or the same vertex).
    fn breadth_first_search(&self, start: Self::Node, end: Self::Node) -> Option<Vec<Self::Node>> {
        PathFinder::new()
            .bfs_path(self, start, end)
            .map(|r| r.intermediates().to_vec())
    }

    /// Cheapest route from `start` to `end`, both included in its path, or
    /// `None` if `end` cannot be reached.
    fn dijkstra_search(&self, start: Self::Node, end: Self::Node) -> Option<Route<Self::Node>> {
        PathFinder::new().dijkstra_path(self, start, end)
    }

    /// Every vertex connected to `start`, in ascending order.
    fn reachable_from(&self, start: Self::Node) -> Vec<Self::Node> {
        PathFinder::new().reachable(self, start)
    }
}

impl<G: WeightedPather + ?Sized> GraphSearch for G {}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::BlockedEndpoints;
    use proptest::prelude::*;
    use std::collections::BTreeMap;
    use waygraph_core::{Coord, Graph, Point, VertexState, WeightedGraph};

    type Adjacency = BTreeMap<usize, BTreeMap<usize, f64>>;

    /// Up to 8 vertices, a list of weighted edges and a blocked flag per vertex.
    fn small_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u8)>, Vec<bool>)> {
        (2usize..=8).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0u8..10), 0..16),
                prop::collection::vec(any::<bool>(), n),
            )
        })
    }

    fn pt(i: usize) -> Point {
        Point::new(i as i32, 0)
    }

    fn co(i: usize) -> Coord {
        Coord::new(i as f64, 0.0)
    }

    fn build(
        n: usize,
        edges: &[(usize, usize, u8)],
        blocked: &[bool],
    ) -> (Graph, WeightedGraph, Adjacency) {
        let mut g = Graph::new();
        let mut w = WeightedGraph::new();
        let mut adj: Adjacency = (0..n).map(|i| (i, BTreeMap::new())).collect();
        for i in 0..n {
            let st = if blocked[i] {
                VertexState::Blocked
            } else {
                VertexState::Normal
            };
            g.add_vertex(pt(i), st);
            w.add_vertex(co(i), format!("v{i}"), None, st);
        }
        for &(a, b, wt) in edges {
            if a == b {
                continue;
            }
            g.add_edge(pt(a), pt(b)).unwrap();
            w.add_edge(co(a), co(b), f64::from(wt)).unwrap();
            adj.get_mut(&a).unwrap().insert(b, f64::from(wt));
            adj.get_mut(&b).unwrap().insert(a, f64::from(wt));
        }
        (g, w, adj)
    }

    /// Fewest hops and cheapest cost over every simple path from `s` to `t`
    /// whose intermediate vertices are not blocked.
    fn brute_force(adj: &Adjacency, blocked: &[bool], s: usize, t: usize) -> Option<(usize, f64)> {
        fn walk(
            adj: &Adjacency,
            blocked: &[bool],
            u: usize,
            t: usize,
            on_path: &mut Vec<bool>,
            hops: usize,
            cost: f64,
            best: &mut Option<(usize, f64)>,
        ) {
            for (&v, &wt) in &adj[&u] {
                if on_path[v] {
                    continue;
                }
                if v == t {
                    let (h, c) = (hops + 1, cost + wt);
                    *best = Some(match *best {
                        None => (h, c),
                        Some((bh, bc)) => (bh.min(h), bc.min(c)),
                    });
                } else if !blocked[v] {
                    on_path[v] = true;
                    walk(adj, blocked, v, t, on_path, hops + 1, cost + wt, best);
                    on_path[v] = false;
                }
            }
        }
        if s == t {
            return Some((0, 0.0));
        }
        let mut on_path = vec![false; blocked.len()];
        on_path[s] = true;
        let mut best = None;
        walk(adj, blocked, s, t, &mut on_path, 0, 0.0, &mut best);
        best
    }

    proptest! {
        #[test]
        fn connected_is_symmetric((n, edges, blocked) in small_graph(), a in 0usize..8, b in 0usize..8) {
            let (a, b) = (a % n, b % n);
            let (g, w, _) = build(n, &edges, &blocked);
            prop_assert_eq!(g.connected(pt(a), pt(b)), g.connected(pt(b), pt(a)));
            prop_assert_eq!(w.connected(co(a), co(b)), w.connected(co(b), co(a)));
            for policy in [BlockedEndpoints::Allow, BlockedEndpoints::Deny] {
                let opts = crate::SearchOptions::new().with_blocked_endpoints(policy);
                let mut pf = PathFinder::with_options(opts);
                prop_assert_eq!(pf.connected(&g, pt(a), pt(b)), pf.connected(&g, pt(b), pt(a)));
                let mut pw = PathFinder::with_options(opts);
                prop_assert_eq!(pw.connected(&w, co(a), co(b)), pw.connected(&w, co(b), co(a)));
            }
        }

        #[test]
        fn searches_agree_with_brute_force((n, edges, blocked) in small_graph(), a in 0usize..8, b in 0usize..8) {
            let (a, b) = (a % n, b % n);
            let (g, w, adj) = build(n, &edges, &blocked);
            let expected = brute_force(&adj, &blocked, a, b);

            prop_assert_eq!(g.connected(pt(a), pt(b)), expected.is_some());
            prop_assert_eq!(w.connected(co(a), co(b)), expected.is_some());

            let mid = g.breadth_first_search(pt(a), pt(b));
            prop_assert_eq!(mid.is_some(), expected.is_some());
            if let (Some(mid), Some((hops, _))) = (&mid, expected) {
                if a != b {
                    prop_assert_eq!(mid.len() + 1, hops);
                }
                prop_assert!(mid.iter().all(|&q| !g.is_blocked(q)));
            }

            let route = w.dijkstra_search(co(a), co(b));
            prop_assert_eq!(route.is_some(), expected.is_some());
            if let (Some(route), Some((_, cost))) = (&route, expected) {
                prop_assert_eq!(route.distance, cost);
                prop_assert_eq!(route.start(), Some(co(a)));
                prop_assert_eq!(route.end(), Some(co(b)));
                prop_assert!(route.intermediates().iter().all(|&q| !w.is_blocked(q)));
                let summed: f64 = route
                    .path
                    .windows(2)
                    .map(|e| w.weight(e[0], e[1]).unwrap())
                    .sum();
                prop_assert_eq!(summed, route.distance);
            }
        }

        #[test]
        fn reachable_agrees_with_connected((n, edges, blocked) in small_graph(), a in 0usize..8) {
            let a = a % n;
            let (g, _, _) = build(n, &edges, &blocked);
            let reach = g.reachable_from(pt(a));
            for i in 0..n {
                prop_assert_eq!(reach.contains(&pt(i)), g.connected(pt(a), pt(i)));
            }
        }
    }
}
