//! Errors raised while building or mutating a graph.

use thiserror::Error;

/// Error type for graph construction and state updates.
///
/// Positions are stored already rendered so that one error type serves both
/// the grid graph ([`Point`](crate::Point)) and the map graph
/// ([`Coord`](crate::Coord)).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// An edge or state update named a position with no vertex.
    #[error("no vertex at {0}")]
    MissingVertex(String),
    /// Both endpoints of an edge are the same vertex.
    #[error("edge from {0} to itself")]
    SelfLoop(String),
    /// Edge weights must be finite and non-negative.
    #[error("invalid edge weight {weight}")]
    InvalidWeight { weight: f64 },
    /// Grid dimensions must both be at least 1.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

impl GraphError {
    pub(crate) fn missing(pos: impl std::fmt::Display) -> Self {
        Self::MissingVertex(pos.to_string())
    }

    pub(crate) fn self_loop(pos: impl std::fmt::Display) -> Self {
        Self::SelfLoop(pos.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn messages_render_positions() {
        let e = GraphError::missing(Point::new(3, 4));
        assert_eq!(e.to_string(), "no vertex at (3, 4)");
        let e = GraphError::InvalidDimensions {
            width: 0,
            height: 2,
        };
        assert_eq!(e.to_string(), "invalid grid dimensions 0x2");
    }
}
