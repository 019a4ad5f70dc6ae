//! Weighted graphs of named locations.
//!
//! Two headerless CSV tables describe an atlas:
//!
//! - locations, `name,x,y`: one vertex per row at `Coord(x, y)`;
//! - routes, `name_a,name_b,weight`: one undirected edge per row.
//!
//! Locations also get a cell of a small menu grid, handed out row-major in
//! file order ([`AtlasLayout`]), so a picker can address them by cell. Route
//! rows with a weight of zero or less mean "no price known" and are skipped.

use std::fs::File;
use std::io;
use std::path::Path;

use waygraph_core::{Coord, Point, VertexState, WeightedGraph};

use crate::error::MapError;
use crate::maze::is_blank;

/// Size of the menu grid that locations are laid out on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AtlasLayout {
    pub menu_width: i32,
    pub menu_height: i32,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            menu_width: 8,
            menu_height: 10,
        }
    }
}

impl AtlasLayout {
    pub fn new(menu_width: i32, menu_height: i32) -> Self {
        Self {
            menu_width,
            menu_height,
        }
    }

    /// Number of menu cells.
    pub fn capacity(self) -> usize {
        (self.menu_width.max(0) as usize) * (self.menu_height.max(0) as usize)
    }

    /// Menu cell of the `i`-th location, or `None` past the last cell.
    pub fn menu_position(self, i: usize) -> Option<Point> {
        if i >= self.capacity() {
            return None;
        }
        let w = self.menu_width as usize;
        Some(Point::new((i % w) as i32, (i / w) as i32))
    }
}

fn table_reader<R: io::Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr)
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn field<'r>(record: &'r csv::StringRecord, i: usize, expected: usize) -> Result<&'r str, MapError> {
    record.get(i).ok_or(MapError::ShortRow {
        line: line_of(record),
        expected,
        found: record.len(),
    })
}

fn number(record: &csv::StringRecord, i: usize, expected: usize) -> Result<f64, MapError> {
    let s = field(record, i, expected)?;
    s.parse().map_err(|_| MapError::BadNumber {
        line: line_of(record),
        value: s.to_string(),
    })
}

/// Build a graph with one unconnected vertex per row of a locations table.
///
/// Names must be unique, since routes refer to locations by name. Returns
/// [`MapError::DuplicateLocation`] on a repeated name and
/// [`MapError::MenuFull`] if there are more locations than menu cells.
pub fn read_locations<R: io::Read>(rdr: R, layout: AtlasLayout) -> Result<WeightedGraph, MapError> {
    let mut rdr = table_reader(rdr);
    let mut graph = WeightedGraph::new();
    let mut i = 0;
    for record in rdr.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        let name = field(&record, 0, 3)?;
        if graph.position_of(name).is_some() {
            return Err(MapError::DuplicateLocation {
                line: line_of(&record),
                name: name.to_string(),
            });
        }
        let pos = Coord::new(number(&record, 1, 3)?, number(&record, 2, 3)?);
        let cell = layout.menu_position(i).ok_or(MapError::MenuFull {
            width: layout.menu_width,
            height: layout.menu_height,
        })?;
        graph.add_vertex(pos, name, Some(cell), VertexState::Normal);
        i += 1;
    }
    if graph.is_empty() {
        return Err(MapError::Empty);
    }
    Ok(graph)
}

/// Add the edges of a routes table to `graph`. Returns the number of edges
/// added; rows with a non-positive weight are skipped.
pub fn read_edges<R: io::Read>(graph: &mut WeightedGraph, rdr: R) -> Result<usize, MapError> {
    let mut rdr = table_reader(rdr);
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        let a = field(&record, 0, 3)?.to_string();
        let b = field(&record, 1, 3)?.to_string();
        rows.push((a, b, number(&record, 2, 3)?));
    }
    connect_named(graph, rows)
}

/// Add edges given as `(name_a, name_b, weight)` triples, such as an
/// in-memory price table. Returns the number of edges added; non-positive
/// weights are skipped.
pub fn connect_named<I, A, B>(graph: &mut WeightedGraph, edges: I) -> Result<usize, MapError>
where
    I: IntoIterator<Item = (A, B, f64)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut added = 0;
    for (a, b, weight) in edges {
        let (a, b) = (a.as_ref(), b.as_ref());
        let pa = graph
            .position_of(a)
            .ok_or_else(|| MapError::UnknownLocation(a.to_string()))?;
        let pb = graph
            .position_of(b)
            .ok_or_else(|| MapError::UnknownLocation(b.to_string()))?;
        if weight.is_nan() || weight <= 0.0 {
            log::warn!("skipping route {a} - {b}: weight {weight}");
            continue;
        }
        graph.add_edge(pa, pb, weight)?;
        added += 1;
    }
    Ok(added)
}

/// Read a locations table and a routes table into one graph.
pub fn read<L: io::Read, E: io::Read>(
    locations: L,
    edges: E,
    layout: AtlasLayout,
) -> Result<WeightedGraph, MapError> {
    let mut graph = read_locations(locations, layout)?;
    let added = read_edges(&mut graph, edges)?;
    log::debug!(
        "loaded atlas: {} locations, {} routes ({} rows kept)",
        graph.len(),
        graph.edge_count(),
        added
    );
    Ok(graph)
}

/// [`read`] from two files.
pub fn load<L: AsRef<Path>, E: AsRef<Path>>(
    locations: L,
    edges: E,
    layout: AtlasLayout,
) -> Result<WeightedGraph, MapError> {
    let locations = io::BufReader::new(File::open(locations)?);
    let edges = io::BufReader::new(File::open(edges)?);
    read(locations, edges, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygraph_paths::GraphSearch;

    const CITIES: &str = "\
Toronto,43.7,-79.4
Paris,48.9,2.4
Tokyo,35.7,139.7
Lima,-12.0,-77.0
";

    const ROUTES: &str = "\
Toronto,Paris,700
Paris,Tokyo,900
Toronto,Tokyo,2000
Lima,Tokyo,0
";

    fn atlas() -> WeightedGraph {
        read(CITIES.as_bytes(), ROUTES.as_bytes(), AtlasLayout::new(2, 2)).unwrap()
    }

    #[test]
    fn layout_is_row_major() {
        let l = AtlasLayout::new(3, 2);
        assert_eq!(l.capacity(), 6);
        assert_eq!(l.menu_position(0), Some(Point::new(0, 0)));
        assert_eq!(l.menu_position(4), Some(Point::new(1, 1)));
        assert_eq!(l.menu_position(6), None);
    }

    #[test]
    fn locations_get_names_and_cells() {
        let g = atlas();
        assert_eq!(g.len(), 4);
        let tokyo = g.position_of("Tokyo").unwrap();
        assert_eq!(tokyo, Coord::new(35.7, 139.7));
        assert_eq!(g.vertex(tokyo).unwrap().menu_position(), Some(Point::new(0, 1)));
        assert_eq!(g.at_menu_position(Point::new(1, 1)).unwrap().name(), "Lima");
    }

    #[test]
    fn non_positive_weights_are_skipped() {
        let g = atlas();
        assert_eq!(g.edge_count(), 3);
        let lima = g.position_of("Lima").unwrap();
        assert_eq!(g.vertex(lima).unwrap().degree(), 0);
    }

    #[test]
    fn cheapest_route_by_name() {
        let g = atlas();
        let (from, to) = (g.position_of("Toronto").unwrap(), g.position_of("Tokyo").unwrap());
        let r = g.dijkstra_search(from, to).unwrap();
        assert_eq!(r.distance, 1600.0);
        assert_eq!(g.names_along(&r.path), vec!["Toronto", "Paris", "Tokyo"]);
        let lima = g.position_of("Lima").unwrap();
        assert!(g.dijkstra_search(from, lima).is_none());
    }

    #[test]
    fn in_memory_price_table() {
        let mut g = read_locations(CITIES.as_bytes(), AtlasLayout::default()).unwrap();
        let prices = [("Lima", "Toronto", 450.0), ("Lima", "Paris", -1.0)];
        assert_eq!(connect_named(&mut g, prices).unwrap(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let table = "Paris,48.9,2.4\nParis,33.7,-95.6\n";
        let err = read_locations(table.as_bytes(), AtlasLayout::default()).unwrap_err();
        assert!(matches!(
            err,
            MapError::DuplicateLocation { line: 2, ref name } if name == "Paris"
        ));
    }

    #[test]
    fn blank_lines_take_no_menu_cell() {
        let table = "Toronto,43.7,-79.4\n  \nParis,48.9,2.4\n";
        let g = read_locations(table.as_bytes(), AtlasLayout::new(2, 1)).unwrap();
        assert_eq!(g.at_menu_position(Point::new(1, 0)).unwrap().name(), "Paris");
    }

    #[test]
    fn unknown_location() {
        let mut g = read_locations(CITIES.as_bytes(), AtlasLayout::default()).unwrap();
        let err = read_edges(&mut g, "Toronto,Oslo,10".as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::UnknownLocation(name) if name == "Oslo"));
    }

    #[test]
    fn menu_overflow() {
        let err = read_locations(CITIES.as_bytes(), AtlasLayout::new(1, 2)).unwrap_err();
        assert!(matches!(
            err,
            MapError::MenuFull {
                width: 1,
                height: 2
            }
        ));
    }

    #[test]
    fn malformed_rows() {
        let err = read_locations("Oslo,59.9,east".as_bytes(), AtlasLayout::default()).unwrap_err();
        assert!(matches!(err, MapError::BadNumber { value, .. } if value == "east"));
        let err = read_locations("Oslo,59.9".as_bytes(), AtlasLayout::default()).unwrap_err();
        assert!(matches!(
            err,
            MapError::ShortRow {
                expected: 3,
                found: 2,
                ..
            }
        ));
        let err = read_locations("".as_bytes(), AtlasLayout::default()).unwrap_err();
        assert!(matches!(err, MapError::Empty));
    }
}
