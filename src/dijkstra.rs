use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::matrix::{CityId, Cost, WeightMatrix, UNREACHABLE};

/// Single-source Dijkstra over a dense weight matrix. Returns hours to every
/// city, `UNREACHABLE` where there is no path. Used to cross-check the
/// all-pairs solve one row at a time.
pub fn dijkstra_all(weights: &WeightMatrix, start: CityId) -> Vec<Cost> {
    let n = weights.len();
    let mut dist = vec![UNREACHABLE; n];
    // Min-heap by cost
    let mut heap = BinaryHeap::new();

    dist[start] = 0.0;
    heap.push(Reverse((OrderedFloat(0.0), start)));

    while let Some(Reverse((OrderedFloat(cost), city))) = heap.pop() {
        if cost > dist[city] {
            continue;
        }
        for (next, &w) in weights.row(city).iter().enumerate() {
            if next == city || w == UNREACHABLE {
                continue;
            }
            let next_cost = cost + w;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                heap.push(Reverse((OrderedFloat(next_cost), next)));
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_graph() {
        let mut weights = WeightMatrix::unconnected(5);
        weights[(0, 1)] = 0.0;
        weights[(0, 2)] = 1.0;
        weights[(1, 3)] = 3.0;
        weights[(2, 3)] = 1.0;
        weights[(3, 0)] = 7.0;

        let dist = dijkstra_all(&weights, 0);

        assert_eq!(dist, vec![0.0, 0.0, 1.0, 2.0, UNREACHABLE]);
        assert_eq!(dijkstra_all(&weights, 3)[2], 8.0);
    }
}
