use std::io;

use thiserror::Error;
use waygraph_core::GraphError;

/// Errors raised while loading a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A maze row has a different number of cells than the first row.
    #[error("maze row {row} has {found} cell(s), expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A table row has fewer fields than its format needs.
    #[error("line {line}: expected {expected} field(s), found {found}")]
    ShortRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    /// An edge row names a location that was never loaded.
    #[error("unknown location {0:?}")]
    UnknownLocation(String),
    /// Two rows of a locations table share a name.
    #[error("line {line}: location {name:?} is already defined")]
    DuplicateLocation { line: u64, name: String },
    #[error("line {line}: {value:?} is not a number")]
    BadNumber { line: u64, value: String },
    /// More locations than cells in the menu grid.
    #[error("menu grid {width}x{height} is full")]
    MenuFull { width: i32, height: i32 },
    #[error("map has no cells")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygraph_core::Point;

    #[test]
    fn messages() {
        let e = MapError::Ragged {
            row: 2,
            expected: 5,
            found: 4,
        };
        assert_eq!(e.to_string(), "maze row 2 has 4 cell(s), expected 5");
        let e: MapError = GraphError::MissingVertex(Point::new(1, 2).to_string()).into();
        assert_eq!(e.to_string(), "no vertex at (1, 2)");
        assert_eq!(
            MapError::UnknownLocation("Oslo".into()).to_string(),
            "unknown location \"Oslo\""
        );
    }
}
