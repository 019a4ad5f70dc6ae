//! **waygraph-core**: positioned graphs whose vertices carry a state.
//!
//! This crate provides the foundational types of the *waygraph* workspace:
//! geometry primitives, the [`VertexState`] tag, the unweighted grid
//! [`Graph`], the weighted map [`WeightedGraph`] and the lattice builder.
//! Path searches over these graphs live in `waygraph-paths`.

pub mod error;
pub mod geom;
pub mod graph;
pub mod state;
pub mod topology;
pub mod weighted;

pub use error::GraphError;
pub use geom::{Coord, Point, Range, RangeIter};
pub use graph::{Graph, Vertex};
pub use state::{ParseStateError, VertexState};
pub use weighted::{Edge, WeightedGraph, WeightedVertex};
