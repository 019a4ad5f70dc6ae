//! [`Pather`] implementations for the `waygraph-core` graphs.

use waygraph_core::{Coord, Graph, Point, WeightedGraph};

use crate::traits::{Pather, WeightedPather};

impl Pather for Graph {
    type Node = Point;

    #[inline]
    fn contains(&self, n: Point) -> bool {
        Graph::contains(self, n)
    }

    #[inline]
    fn is_blocked(&self, n: Point) -> bool {
        Graph::is_blocked(self, n)
    }

    fn neighbors(&self, n: Point, buf: &mut Vec<Point>) {
        let start = buf.len();
        buf.extend(self.neighbours(n));
        debug_assert!(
            buf[start..].iter().all(|&q| Graph::contains(self, q)),
            "dangling neighbour of {n}"
        );
    }
}

impl WeightedPather for Graph {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> f64 {
        1.0
    }
}

impl Pather for WeightedGraph {
    type Node = Coord;

    #[inline]
    fn contains(&self, n: Coord) -> bool {
        WeightedGraph::contains(self, n)
    }

    #[inline]
    fn is_blocked(&self, n: Coord) -> bool {
        WeightedGraph::is_blocked(self, n)
    }

    fn neighbors(&self, n: Coord, buf: &mut Vec<Coord>) {
        let start = buf.len();
        buf.extend(self.neighbours(n).map(|(c, _)| c));
        debug_assert!(
            buf[start..].iter().all(|&q| WeightedGraph::contains(self, q)),
            "dangling neighbour of {n}"
        );
    }
}

impl WeightedPather for WeightedGraph {
    /// Stored weight of the edge; infinite if the two are not adjacent.
    #[inline]
    fn cost(&self, from: Coord, to: Coord) -> f64 {
        self.weight(from, to).unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygraph_core::VertexState;

    #[test]
    fn grid_neighbours_are_sorted() {
        let g = Graph::grid(3, 3).unwrap();
        let mut buf = Vec::new();
        Pather::neighbors(&g, Point::new(1, 1), &mut buf);
        let mut sorted = buf.clone();
        sorted.sort();
        assert_eq!(buf, sorted);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn weighted_cost_reads_edge_weight() {
        let (a, b, z) = (Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), Coord::new(5.0, 5.0));
        let mut g = WeightedGraph::new();
        for p in [a, b, z] {
            g.add_vertex(p, "", None, VertexState::Normal);
        }
        g.add_edge(a, b, 2.5).unwrap();
        assert_eq!(g.cost(a, b), 2.5);
        assert_eq!(g.cost(b, a), 2.5);
        assert!(g.cost(a, z).is_infinite());
    }
}
