use fnv::FnvHashMap;
use log::{debug, info, warn};

use crate::condition::{Condition, ConditionWeights};
use crate::error::{Result, RouteError};
use crate::loader::EdgeList;
use crate::matrix::{CityId, Cost, NextHopMatrix, WeightMatrix, UNREACHABLE};

/// Directed city graph with one weight matrix per weather condition.
///
/// The city set is fixed at construction; only edges change afterwards. Each
/// mutation bumps `revision` so a solved [`crate::solver::Snapshot`] can tell
/// whether it still describes this graph.
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    cities: Vec<String>,
    city_to_idx: FnvHashMap<String, CityId>,
    weights: [WeightMatrix; 4],
    next_hop: NextHopMatrix,
    revision: u64,
}

impl WeightedGraph {
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut idx_to_city: Vec<String> = Vec::new();
        let mut city_to_idx: FnvHashMap<String, CityId> = FnvHashMap::default();
        for city in cities {
            let city = city.into();
            if city_to_idx.contains_key(&city) {
                warn!("duplicate city {} ignored, keeping its first index", city);
                continue;
            }
            city_to_idx.insert(city.clone(), idx_to_city.len());
            idx_to_city.push(city);
        }

        let n = idx_to_city.len();
        Self {
            cities: idx_to_city,
            city_to_idx,
            weights: std::array::from_fn(|_| WeightMatrix::unconnected(n)),
            next_hop: NextHopMatrix::seed(n),
            revision: 0,
        }
    }

    /// Builds the graph from a loaded edge list. Later lines overwrite earlier
    /// ones for the same ordered pair.
    pub fn from_edge_list(edge_list: &EdgeList) -> Result<Self> {
        let mut graph = Self::new(edge_list.cities.iter().cloned());
        for edge in &edge_list.edges {
            match graph.add_edge(&edge.from, &edge.to, edge.weights) {
                Err(RouteError::SelfLoop(city)) => warn!("self loop on {} skipped", city),
                other => other?,
            }
        }
        info!(
            "Graph: {} cities, {} directed edges",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn index_of(&self, city: &str) -> Result<CityId> {
        self.city_to_idx
            .get(city)
            .copied()
            .ok_or_else(|| RouteError::UnknownCity(city.to_string()))
    }

    pub fn city_name(&self, idx: CityId) -> Option<&str> {
        self.cities.get(idx).map(String::as_str)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Direct edge weight, `UNREACHABLE` when there is no edge.
    pub fn weight(&self, condition: Condition, from: CityId, to: CityId) -> Cost {
        self.weights[condition.index()][(from, to)]
    }

    pub fn weights(&self, condition: Condition) -> &WeightMatrix {
        &self.weights[condition.index()]
    }

    /// Direct-edge routing seed the solver starts from.
    pub fn next_hop_seed(&self) -> &NextHopMatrix {
        &self.next_hop
    }

    /// Number of off-diagonal pairs with a direct edge.
    pub fn edge_count(&self) -> usize {
        let n = self.len();
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| i != j && self.next_hop[(i, j)].is_some())
            .count()
    }

    /// Sets the directed edge `from -> to` under all four conditions. The
    /// reverse direction is untouched.
    pub fn add_edge(&mut self, from: &str, to: &str, weights: ConditionWeights) -> Result<()> {
        let (i, j) = (self.index_of(from)?, self.index_of(to)?);
        if i == j {
            return Err(RouteError::SelfLoop(from.to_string()));
        }
        for condition in Condition::ALL {
            self.weights[condition.index()][(i, j)] = weights.get(condition) as Cost;
        }
        self.next_hop[(i, j)] = Some(j);
        self.revision += 1;
        debug!("Edge {} -> {} set to {:?}", from, to, weights);
        Ok(())
    }

    /// Drops the direct edge `from -> to` under all four conditions. Routes that
    /// passed through it stay in old snapshots until the next solve.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let (i, j) = (self.index_of(from)?, self.index_of(to)?);
        if i == j {
            return Ok(());
        }
        for weights in self.weights.iter_mut() {
            weights[(i, j)] = UNREACHABLE;
        }
        self.next_hop[(i, j)] = None;
        self.revision += 1;
        info!("Edge {} -> {} removed", from, to);
        Ok(())
    }
}
