//! Building waygraph graphs from data files.
//!
//! - [`Maze`]: a rectangular, comma-separated map of cell codes turned into a
//!   grid [`Graph`](waygraph_core::Graph) with start, end and blocked cells.
//! - [`atlas`]: a table of named locations and a table of weighted routes
//!   between them, turned into a [`WeightedGraph`](waygraph_core::WeightedGraph).

pub mod atlas;
mod error;
pub mod maze;

pub use atlas::AtlasLayout;
pub use error::MapError;
pub use maze::{Maze, MazeCodes};
