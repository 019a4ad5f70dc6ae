//! The weighted map graph: [`WeightedGraph`] and its [`WeightedVertex`].
//!
//! Same arena layout as [`Graph`](crate::Graph), keyed by [`Coord`], with a
//! symmetric weight stored on both sides of every edge.

use std::collections::BTreeMap;

use crate::error::GraphError;
use crate::geom::{Coord, Point};
use crate::state::VertexState;

// ---------------------------------------------------------------------------
// WeightedVertex
// ---------------------------------------------------------------------------

/// A named, positioned vertex of a [`WeightedGraph`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedVertex {
    position: Coord,
    neighbours: BTreeMap<Coord, f64>,
    name: String,
    menu_position: Option<Point>,
    /// Current state. Callers may overwrite it freely.
    pub state: VertexState,
}

impl WeightedVertex {
    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Adjacent positions with their edge weights, in position order.
    pub fn neighbours(&self) -> impl Iterator<Item = (Coord, f64)> + '_ {
        self.neighbours.iter().map(|(&c, &w)| (c, w))
    }

    /// Weight of the edge to `other`, if adjacent.
    pub fn weight_to(&self, other: Coord) -> Option<f64> {
        self.neighbours.get(&other).copied()
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Display name (city, country, ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell of this vertex in the renderer's selection menu, if it has one.
    #[inline]
    pub fn menu_position(&self) -> Option<Point> {
        self.menu_position
    }
}

/// One undirected edge of a [`WeightedGraph`], as listed by
/// [`WeightedGraph::edges`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// The lower endpoint.
    pub a: Coord,
    /// The higher endpoint.
    pub b: Coord,
    pub weight: f64,
    /// Whether either endpoint is currently blocked.
    pub blocked: bool,
}

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// An undirected graph with symmetric non-negative edge weights, whose
/// vertices are keyed by [`Coord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    vertices: BTreeMap<Coord, WeightedVertex>,
}

impl WeightedGraph {
    /// Create an empty graph (no vertices or edges).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with no neighbours.
    ///
    /// A vertex already at `position` is replaced, and the edges that touched
    /// it are removed from its former neighbours too.
    pub fn add_vertex(
        &mut self,
        position: Coord,
        name: impl Into<String>,
        menu_position: Option<Point>,
        state: VertexState,
    ) {
        let v = WeightedVertex {
            position,
            neighbours: BTreeMap::new(),
            name: name.into(),
            menu_position,
            state,
        };
        if let Some(old) = self.vertices.insert(position, v) {
            log::warn!(
                "replacing vertex {:?} at {position}, dropping {} edge(s)",
                old.name,
                old.degree()
            );
            for n in old.neighbours.keys() {
                if let Some(v) = self.vertices.get_mut(n) {
                    v.neighbours.remove(&position);
                }
            }
        }
    }

    /// Add an undirected edge of the given weight, or overwrite the weight of
    /// an existing one (in both directions).
    ///
    /// On error the graph is left unchanged.
    pub fn add_edge(&mut self, p1: Coord, p2: Coord, weight: f64) -> Result<(), GraphError> {
        if !self.vertices.contains_key(&p1) {
            return Err(GraphError::missing(p1));
        }
        if !self.vertices.contains_key(&p2) {
            return Err(GraphError::missing(p2));
        }
        if p1 == p2 {
            return Err(GraphError::self_loop(p1));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }
        if let Some(v) = self.vertices.get_mut(&p1) {
            v.neighbours.insert(p2, weight);
        }
        if let Some(v) = self.vertices.get_mut(&p2) {
            v.neighbours.insert(p1, weight);
        }
        Ok(())
    }

    /// [`add_edge`](Self::add_edge) with the default weight of 1.
    pub fn add_unit_edge(&mut self, p1: Coord, p2: Coord) -> Result<(), GraphError> {
        self.add_edge(p1, p2, 1.0)
    }

    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.vertices.contains_key(&p)
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices
            .values()
            .map(WeightedVertex::degree)
            .sum::<usize>()
            / 2
    }

    pub fn vertex(&self, p: Coord) -> Option<&WeightedVertex> {
        self.vertices.get(&p)
    }

    /// Mutable access to the vertex at `p`, for direct state writes.
    pub fn vertex_mut(&mut self, p: Coord) -> Option<&mut WeightedVertex> {
        self.vertices.get_mut(&p)
    }

    /// Every vertex of the graph, in position order.
    pub fn get_vertices(&self) -> impl Iterator<Item = &WeightedVertex> + '_ {
        self.vertices.values()
    }

    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.vertices.keys().copied()
    }

    /// Neighbours of `p` with their weights, in order. Empty if `p` is absent.
    pub fn neighbours(&self, p: Coord) -> impl Iterator<Item = (Coord, f64)> + '_ {
        self.vertices
            .get(&p)
            .into_iter()
            .flat_map(|v| v.neighbours())
    }

    /// Weight of the edge between `p1` and `p2`, if there is one.
    pub fn weight(&self, p1: Coord, p2: Coord) -> Option<f64> {
        self.vertices.get(&p1).and_then(|v| v.weight_to(p2))
    }

    /// Each undirected edge exactly once, ordered by its lower endpoint.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.values().flat_map(move |v| {
            v.neighbours()
                .filter(move |&(n, _)| v.position < n)
                .map(move |(n, weight)| Edge {
                    a: v.position,
                    b: n,
                    weight,
                    blocked: v.state.is_blocked() || self.is_blocked(n),
                })
        })
    }

    pub fn state(&self, p: Coord) -> Option<VertexState> {
        self.vertices.get(&p).map(|v| v.state)
    }

    /// Overwrite the state of the vertex at `p`, returning the previous one.
    pub fn set_state(&mut self, p: Coord, state: VertexState) -> Result<VertexState, GraphError> {
        let v = self
            .vertices
            .get_mut(&p)
            .ok_or_else(|| GraphError::missing(p))?;
        Ok(std::mem::replace(&mut v.state, state))
    }

    #[inline]
    pub fn is_blocked(&self, p: Coord) -> bool {
        self.state(p).is_some_and(VertexState::is_blocked)
    }

    /// Paint [`VertexState::Path`] onto each listed position, leaving
    /// `Start`, `End` and `Blocked` vertices alone. Returns how many vertices
    /// were painted.
    pub fn mark_path<I>(&mut self, path: I) -> usize
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut n = 0;
        for p in path {
            if let Some(v) = self.vertices.get_mut(&p) {
                if !v.state.is_pinned() {
                    v.state = VertexState::Path;
                    n += 1;
                }
            }
        }
        n
    }

    /// Reset every vertex holding `state` to [`VertexState::Normal`].
    pub fn clear_state(&mut self, state: VertexState) -> usize {
        let mut n = 0;
        for v in self.vertices.values_mut() {
            if v.state == state && state != VertexState::Normal {
                v.state = VertexState::Normal;
                n += 1;
            }
        }
        n
    }

    pub fn positions_with(&self, state: VertexState) -> impl Iterator<Item = Coord> + '_ {
        self.vertices
            .values()
            .filter(move |v| v.state == state)
            .map(WeightedVertex::position)
    }

    /// Position of the first vertex (in position order) named `name`.
    pub fn position_of(&self, name: &str) -> Option<Coord> {
        self.vertices
            .values()
            .find(|v| v.name == name)
            .map(WeightedVertex::position)
    }

    /// The vertex shown at `cell` of the selection menu.
    pub fn at_menu_position(&self, cell: Point) -> Option<&WeightedVertex> {
        self.vertices
            .values()
            .find(|v| v.menu_position == Some(cell))
    }

    /// Names of the vertices along `path`. Absent positions are skipped.
    pub fn names_along(&self, path: &[Coord]) -> Vec<&str> {
        path.iter()
            .filter_map(|p| self.vertices.get(p))
            .map(WeightedVertex::name)
            .collect()
    }
}
