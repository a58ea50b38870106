//! All-pairs shortest routes between cities whose travel times depend on the
//! weather.
//!
//! A [`WeightedGraph`] keeps one weight matrix per [`Condition`]. [`solve`]
//! runs Floyd-Warshall for one condition and returns a [`Snapshot`] that
//! answers route and graph-center queries until the graph changes again.

pub mod condition;
#[cfg(test)]
mod dijkstra;
pub mod error;
pub mod export;
pub mod graph;
pub mod loader;
pub mod matrix;
pub mod shell;
pub mod solver;

pub use condition::{Condition, ConditionWeights};
pub use error::{Result, RouteError};
pub use graph::WeightedGraph;
pub use loader::{load_edge_list, parse_edge_list, EdgeList, RawEdge};
pub use matrix::{CityId, Cost, DistanceMatrix, NextHopMatrix, WeightMatrix, UNREACHABLE};
pub use shell::Shell;
pub use solver::{graph_center, reconstruct_path, solve, Route, Snapshot};
