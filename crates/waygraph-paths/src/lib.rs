//! Path searches over the graphs of `waygraph-core`.
//!
//! - **BFS** fewest-hops routes ([`PathFinder::bfs_path`])
//! - **Dijkstra** cheapest routes ([`PathFinder::dijkstra_path`])
//! - **Reachability** by depth-first search ([`PathFinder::connected`],
//!   [`PathFinder::reachable`])
//!
//! BFS and Dijkstra are the same routine: BFS runs it with every edge
//! costing one and a first-in first-out frontier. Blocked vertices are never
//! intermediate steps of a route; whether they may be its endpoints is set by
//! [`SearchOptions`].
//!
//! [`PathFinder`] owns its scratch buffers so repeated queries reuse them.
//! For one-off queries, [`GraphSearch`] adds `connected`,
//! `breadth_first_search` and `dijkstra_search` to both graph types.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, reachability |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra, [`GraphSearch`] |

mod bfs;
mod cc;
mod dijkstra;
mod frontier;
mod graphs;
mod options;
mod pathfinder;
mod search;
mod shortest;
mod traits;

pub use options::{BlockedEndpoints, SearchOptions};
pub use pathfinder::{PathFinder, Route, UNREACHABLE};
pub use search::GraphSearch;
pub use traits::{Pather, UnitCost, WeightedPather};
