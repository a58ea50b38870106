// All-pairs shortest paths (Floyd-Warshall) with next-hop routing, plus the
// queries that read a solved result: route reconstruction and graph center.
use std::time::Instant;

use log::debug;
use ordered_float::OrderedFloat;

use crate::condition::Condition;
use crate::graph::WeightedGraph;
use crate::matrix::{CityId, Cost, DistanceMatrix, NextHopMatrix, UNREACHABLE};

/// Result of one solve. Carries the condition it was computed for and the graph
/// revision it was computed from; it is never updated in place.
#[derive(Clone, Debug)]
pub struct Snapshot {
    condition: Condition,
    revision: u64,
    distances: DistanceMatrix,
    next_hop: NextHopMatrix,
}

/// A concrete route between two cities.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub cities: Vec<CityId>,
    pub hours: Cost,
}

/// Floyd-Warshall over the weight matrix of `condition`. O(N^3), always from
/// scratch; the graph's own matrices are only read.
pub fn solve(graph: &WeightedGraph, condition: Condition) -> Snapshot {
    let now = Instant::now();
    let n = graph.len();
    let mut dist = graph.weights(condition).clone();
    let mut next = graph.next_hop_seed().clone();

    // k has to stay the outermost loop.
    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[(i, k)];
            if d_ik == UNREACHABLE {
                continue;
            }
            for j in 0..n {
                let through_k = d_ik + dist[(k, j)];
                if through_k < dist[(i, j)] {
                    dist[(i, j)] = through_k;
                    next[(i, j)] = next[(i, k)];
                }
            }
        }
    }

    debug!(
        "Solved {} cities under {} in {:.3} ms",
        n,
        condition,
        now.elapsed().as_secs_f64() * 1000.0
    );

    Snapshot {
        condition,
        revision: graph.revision(),
        distances: dist,
        next_hop: next,
    }
}

/// Walks the next-hop matrix from `from` to `to`. Empty when `to` is not
/// reachable; `[from]` when both are the same city.
pub fn reconstruct_path(from: CityId, to: CityId, next_hop: &NextHopMatrix) -> Vec<CityId> {
    if next_hop[(from, to)].is_none() {
        return Vec::new();
    }
    let mut path = vec![from];
    let mut cur = from;
    while cur != to {
        match next_hop[(cur, to)] {
            Some(hop) => {
                cur = hop;
                path.push(cur);
            }
            // A solved matrix never breaks a chain it started.
            None => return Vec::new(),
        }
    }
    path
}

/// Eccentricity of each city: the largest finite distance from any city to it.
/// Unreachable pairs are skipped, so a city nobody can reach only counts its
/// own zero distance.
pub fn eccentricities(distances: &DistanceMatrix) -> Vec<Cost> {
    let n = distances.len();
    (0..n)
        .map(|j| {
            (0..n)
                .map(|i| distances[(i, j)])
                .filter(|d| d.is_finite())
                .map(OrderedFloat)
                .max()
                .map_or(UNREACHABLE, |d| d.0)
        })
        .collect()
}

/// City with the smallest eccentricity, lowest index on ties. `None` for an
/// empty graph.
pub fn graph_center(distances: &DistanceMatrix) -> Option<CityId> {
    eccentricities(distances)
        .into_iter()
        .enumerate()
        .min_by_key(|&(_, e)| OrderedFloat(e))
        .map(|(idx, _)| idx)
}

impl Snapshot {
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// True while no edge of `graph` has changed since this snapshot was solved.
    pub fn is_current(&self, graph: &WeightedGraph) -> bool {
        self.revision == graph.revision() && self.distances.len() == graph.len()
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn next_hop(&self) -> &NextHopMatrix {
        &self.next_hop
    }

    pub fn distance(&self, from: CityId, to: CityId) -> Cost {
        self.distances[(from, to)]
    }

    pub fn reconstruct_path(&self, from: CityId, to: CityId) -> Vec<CityId> {
        reconstruct_path(from, to, &self.next_hop)
    }

    pub fn route(&self, from: CityId, to: CityId) -> Option<Route> {
        let hours = self.distance(from, to);
        if hours == UNREACHABLE {
            return None;
        }
        Some(Route {
            cities: self.reconstruct_path(from, to),
            hours,
        })
    }

    pub fn eccentricities(&self) -> Vec<Cost> {
        eccentricities(&self.distances)
    }

    pub fn graph_center(&self) -> Option<CityId> {
        graph_center(&self.distances)
    }
}
