//! Grid graphs read from cell-coded map files.
//!
//! A maze map is comma-separated text, one line per row, one code per cell.
//! The cell in column `x` of line `y` becomes the vertex at `(x, y)`; every
//! row must have as many cells as the first. Codes are matched against
//! [`MazeCodes`] after trimming whitespace, and any other code is an ordinary
//! open cell:
//!
//! ```text
//! S,0,0
//! B,B,0
//! E,0,0
//! ```

use std::fs::File;
use std::io;
use std::path::Path;

use waygraph_core::{Graph, Point, Range, VertexState};

use crate::error::MapError;

/// Cell codes recognised in a maze map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeCodes {
    pub blocked: String,
    pub start: String,
    pub end: String,
}

impl Default for MazeCodes {
    fn default() -> Self {
        Self {
            blocked: "B".into(),
            start: "S".into(),
            end: "E".into(),
        }
    }
}

impl MazeCodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocked(mut self, code: impl Into<String>) -> Self {
        self.blocked = code.into();
        self
    }

    pub fn with_start(mut self, code: impl Into<String>) -> Self {
        self.start = code.into();
        self
    }

    pub fn with_end(mut self, code: impl Into<String>) -> Self {
        self.end = code.into();
        self
    }

    /// State of a cell with the given code.
    pub fn state_of(&self, code: &str) -> VertexState {
        if code == self.blocked {
            VertexState::Blocked
        } else if code == self.start {
            VertexState::Start
        } else if code == self.end {
            VertexState::End
        } else {
            VertexState::Normal
        }
    }
}

/// Whether `record` came from a line holding nothing but whitespace. A line
/// of empty cells (`,,`) is not blank.
pub(crate) fn is_blank(record: &csv::StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(str::is_empty)
}

/// A grid graph loaded from a maze map, with the map's size and its first
/// start and end cells.
#[derive(Debug, Clone)]
pub struct Maze {
    graph: Graph,
    bounds: Range,
    start: Option<Point>,
    end: Option<Point>,
}

impl Maze {
    /// Read a maze map from `rdr`.
    ///
    /// Blank lines, including lines of only whitespace, are skipped. Returns
    /// [`MapError::Ragged`] if a row's length differs from the first row's
    /// and [`MapError::Empty`] if there are no cells at all.
    pub fn from_reader<R: io::Read>(rdr: R, codes: &MazeCodes) -> Result<Self, MapError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let mut graph = Graph::new();
        let mut width: Option<usize> = None;
        let mut height = 0;
        let mut start = None;
        let mut end = None;

        for record in rdr.records() {
            let record = record?;
            if is_blank(&record) {
                continue;
            }
            let y = height;
            let expected = *width.get_or_insert(record.len());
            if record.len() != expected {
                return Err(MapError::Ragged {
                    row: y,
                    expected,
                    found: record.len(),
                });
            }
            for (x, code) in record.iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let state = codes.state_of(code);
                match state {
                    VertexState::Start if start.is_none() => start = Some(p),
                    VertexState::End if end.is_none() => end = Some(p),
                    _ => {}
                }
                graph.add_vertex(p, state);
            }
            height = y + 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        let bounds = Range::new(0, 0, width as i32, height as i32);
        graph.connect_lattice(bounds)?;
        log::debug!(
            "loaded {}x{} maze: {} vertices, {} edges, {} blocked",
            bounds.width(),
            bounds.height(),
            graph.len(),
            graph.edge_count(),
            graph.positions_with(VertexState::Blocked).count()
        );
        Ok(Self {
            graph,
            bounds,
            start,
            end,
        })
    }

    /// Read a maze map from the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P, codes: &MazeCodes) -> Result<Self, MapError> {
        let file = File::open(path)?;
        Self::from_reader(io::BufReader::new(file), codes)
    }

    /// Read a maze map held in a string.
    pub fn parse(s: &str, codes: &MazeCodes) -> Result<Self, MapError> {
        Self::from_reader(s.as_bytes(), codes)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// The cells of the map, from `(0, 0)` to `(width, height)`.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// (width, height) of the map in cells.
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// First start cell in reading order.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// First end cell in reading order.
    pub fn end(&self) -> Option<Point> {
        self.end
    }
}
