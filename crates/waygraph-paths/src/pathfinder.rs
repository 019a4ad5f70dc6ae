use std::collections::{HashMap, HashSet};

use crate::options::{BlockedEndpoints, SearchOptions};
use crate::traits::Pather;

/// Sentinel cost meaning "unreachable".
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A found path together with its total cost.
///
/// `path` runs from the start to the end, both included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N> {
    pub distance: f64,
    pub path: Vec<N>,
}

impl<N: Copy> Route<N> {
    /// First position of the path.
    pub fn start(&self) -> Option<N> {
        self.path.first().copied()
    }

    /// Last position of the path.
    pub fn end(&self) -> Option<N> {
        self.path.last().copied()
    }

    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The positions strictly between start and end.
    pub fn intermediates(&self) -> &[N] {
        match self.path.len() {
            0..=2 => &[],
            n => &self.path[1..n - 1],
        }
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for searches over one kind of graph.
///
/// `PathFinder` owns the search scratch state (neighbour buffer, DFS stack,
/// visited set, cost and parent maps) so that repeated queries reuse their
/// allocations. Searches never modify the graph.
#[derive(Debug, Clone)]
pub struct PathFinder<N> {
    pub(crate) options: SearchOptions,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<N>,
    // connectivity caches
    pub(crate) stack: Vec<N>,
    pub(crate) visited: HashSet<N>,
    // shortest-path caches
    pub(crate) costs: HashMap<N, f64>,
    pub(crate) parents: HashMap<N, N>,
}

impl<N> Default for PathFinder<N> {
    fn default() -> Self {
        Self::with_options(SearchOptions::default())
    }
}

impl<N> PathFinder<N> {
    /// Create a `PathFinder` with default [`SearchOptions`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            nbuf: Vec::with_capacity(8),
            stack: Vec::new(),
            visited: HashSet::new(),
            costs: HashMap::new(),
            parents: HashMap::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }
}

impl<N: Copy + Eq> PathFinder<N> {
    /// Whether the blocked-endpoint policy lets a query between the distinct
    /// vertices `from` and `to` proceed.
    pub(crate) fn endpoints_admitted<P>(&self, pather: &P, from: N, to: N) -> bool
    where
        P: Pather<Node = N> + ?Sized,
    {
        match self.options.blocked_endpoints {
            BlockedEndpoints::Allow => true,
            BlockedEndpoints::Deny => !pather.is_blocked(from) && !pather.is_blocked(to),
        }
    }

    /// Whether a search may step onto `n` while heading for `to`.
    #[inline]
    pub(crate) fn passable<P>(pather: &P, n: N, to: N) -> bool
    where
        P: Pather<Node = N> + ?Sized,
    {
        n == to || !pather.is_blocked(n)
    }
}
