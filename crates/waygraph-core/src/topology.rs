//! Rectangular lattice construction for [`Graph`].

use crate::error::GraphError;
use crate::geom::Range;
use crate::graph::Graph;
use crate::state::VertexState;

impl Graph {
    /// Build a `width`×`height` lattice with a vertex at every `(x, y)` in
    /// `[0, width) × [0, height)`, each connected to its right and lower
    /// neighbour. No diagonals; interior vertices end up with degree 4.
    pub fn grid(width: i32, height: i32) -> Result<Graph, GraphError> {
        if width < 1 || height < 1 {
            return Err(GraphError::InvalidDimensions { width, height });
        }
        let rng = Range::new(0, 0, width, height);
        let mut g = Graph::new();
        for p in rng {
            g.add_vertex(p, VertexState::Normal);
        }
        g.connect_lattice(rng)?;
        Ok(g)
    }

    /// Connect every vertex in `rng` to its right and lower neighbour.
    ///
    /// Cells of `rng` with no vertex are skipped, so this also wires up a
    /// graph whose vertices were inserted one by one (e.g. from a map file).
    /// Returns the number of edge insertions made.
    pub fn connect_lattice(&mut self, rng: Range) -> Result<usize, GraphError> {
        let mut n = 0;
        for p in rng {
            if !self.contains(p) {
                continue;
            }
            for q in [p.shift(1, 0), p.shift(0, 1)] {
                if rng.contains(q) && self.contains(q) {
                    self.add_edge(p, q)?;
                    n += 1;
                }
            }
        }
        log::debug!("connected {rng} lattice with {n} edge(s)");
        Ok(n)
    }
}
