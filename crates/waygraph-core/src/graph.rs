//! The unweighted grid graph: [`Graph`] and its [`Vertex`].
//!
//! Vertices live in an arena keyed by their [`Point`]; a vertex refers to its
//! neighbours by position, never by pointer, so the cyclic neighbour relation
//! needs no shared ownership. Every neighbour key resolves to a vertex of the
//! same graph and the relation is always symmetric.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;
use crate::geom::Point;
use crate::state::VertexState;

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// A positioned vertex of a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    position: Point,
    neighbours: BTreeSet<Point>,
    /// Current state. Callers may overwrite it freely.
    pub state: VertexState,
}

impl Vertex {
    fn new(position: Point, state: VertexState) -> Self {
        Self {
            position,
            neighbours: BTreeSet::new(),
            state,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Positions of the adjacent vertices, in position order.
    pub fn neighbours(&self) -> impl Iterator<Item = Point> + '_ {
        self.neighbours.iter().copied()
    }

    /// Number of adjacent vertices.
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    #[inline]
    pub fn is_adjacent(&self, p: Point) -> bool {
        self.neighbours.contains(&p)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected, unweighted graph whose vertices are keyed by [`Point`].
///
/// Structure changes only through [`add_vertex`](Self::add_vertex) and
/// [`add_edge`](Self::add_edge); afterwards only vertex states change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: BTreeMap<Point, Vertex>,
}

impl Graph {
    /// Create an empty graph (no vertices or edges).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex at `position` with no neighbours.
    ///
    /// A vertex already at `position` is replaced, and the edges that touched
    /// it are removed from its former neighbours too.
    pub fn add_vertex(&mut self, position: Point, state: VertexState) {
        if let Some(old) = self.vertices.insert(position, Vertex::new(position, state)) {
            log::warn!(
                "replacing vertex at {position}, dropping {} edge(s)",
                old.degree()
            );
            for n in old.neighbours {
                if let Some(v) = self.vertices.get_mut(&n) {
                    v.neighbours.remove(&position);
                }
            }
        }
    }

    /// Add an undirected edge between the vertices at `p1` and `p2`.
    ///
    /// Adding an existing edge again is a no-op. On error the graph is left
    /// unchanged.
    pub fn add_edge(&mut self, p1: Point, p2: Point) -> Result<(), GraphError> {
        if !self.vertices.contains_key(&p1) {
            return Err(GraphError::missing(p1));
        }
        if !self.vertices.contains_key(&p2) {
            return Err(GraphError::missing(p2));
        }
        if p1 == p2 {
            return Err(GraphError::self_loop(p1));
        }
        if let Some(v) = self.vertices.get_mut(&p1) {
            v.neighbours.insert(p2);
        }
        if let Some(v) = self.vertices.get_mut(&p2) {
            v.neighbours.insert(p1);
        }
        Ok(())
    }

    /// Whether a vertex exists at `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
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
        self.vertices.values().map(Vertex::degree).sum::<usize>() / 2
    }

    /// The vertex at `p`, if any.
    pub fn vertex(&self, p: Point) -> Option<&Vertex> {
        self.vertices.get(&p)
    }

    /// Mutable access to the vertex at `p`, for direct state writes.
    pub fn vertex_mut(&mut self, p: Point) -> Option<&mut Vertex> {
        self.vertices.get_mut(&p)
    }

    /// Every vertex of the graph, in position order.
    pub fn get_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// Every vertex position, in order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.keys().copied()
    }

    /// Positions adjacent to `p`, in order. Empty if `p` is absent.
    pub fn neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        self.vertices
            .get(&p)
            .into_iter()
            .flat_map(|v| v.neighbours())
    }

    /// State of the vertex at `p`.
    pub fn state(&self, p: Point) -> Option<VertexState> {
        self.vertices.get(&p).map(|v| v.state)
    }

    /// Overwrite the state of the vertex at `p`, returning the previous one.
    pub fn set_state(&mut self, p: Point, state: VertexState) -> Result<VertexState, GraphError> {
        let v = self
            .vertices
            .get_mut(&p)
            .ok_or_else(|| GraphError::missing(p))?;
        Ok(std::mem::replace(&mut v.state, state))
    }

    /// Whether the vertex at `p` exists and is blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.state(p).is_some_and(VertexState::is_blocked)
    }

    /// Paint [`VertexState::Path`] onto each listed position.
    ///
    /// Vertices that are `Start`, `End` or `Blocked` keep their state, as do
    /// absent positions. Returns how many vertices were painted.
    pub fn mark_path<I>(&mut self, path: I) -> usize
    where
        I: IntoIterator<Item = Point>,
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
    /// Returns how many vertices changed.
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

    /// Positions of the vertices currently holding `state`, in order.
    pub fn positions_with(&self, state: VertexState) -> impl Iterator<Item = Point> + '_ {
        self.vertices
            .values()
            .filter(move |v| v.state == state)
            .map(Vertex::position)
    }
}
