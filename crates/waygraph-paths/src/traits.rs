use std::fmt;
use std::hash::Hash;

/// Minimal pathfinding interface: vertex membership, blocking and neighbour
/// enumeration.
pub trait Pather {
    /// Vertex key. Its order is the canonical tie-break order of every search.
    type Node: Copy + Ord + Hash + fmt::Debug + fmt::Display;

    /// Whether `n` is a vertex of the graph.
    fn contains(&self, n: Self::Node) -> bool;

    /// Whether `n` must not be used as an intermediate hop.
    fn is_blocked(&self, n: Self::Node) -> bool;

    /// Append the neighbours of `n` into `buf`, in ascending order. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, n: Self::Node, buf: &mut Vec<Self::Node>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: Self::Node, to: Self::Node) -> f64;
}

/// Views any [`Pather`] as a [`WeightedPather`] where every edge costs 1.
///
/// Breadth-first search runs through this adapter, so on a weighted graph it
/// counts hops and ignores the stored weights.
#[derive(Debug, Clone, Copy)]
pub struct UnitCost<'a, P: ?Sized>(pub &'a P);

impl<P: Pather + ?Sized> Pather for UnitCost<'_, P> {
    type Node = P::Node;

    #[inline]
    fn contains(&self, n: Self::Node) -> bool {
        self.0.contains(n)
    }

    #[inline]
    fn is_blocked(&self, n: Self::Node) -> bool {
        self.0.is_blocked(n)
    }

    #[inline]
    fn neighbors(&self, n: Self::Node, buf: &mut Vec<Self::Node>) {
        self.0.neighbors(n, buf)
    }
}

impl<P: Pather + ?Sized> WeightedPather for UnitCost<'_, P> {
    #[inline]
    fn cost(&self, _from: Self::Node, _to: Self::Node) -> f64 {
        1.0
    }
}
