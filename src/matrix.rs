/*
Dense N x N matrices addressed by city index, stored row-major in a single Vec.

Costs are hours as f64 with f64::INFINITY standing for "unreachable", so the
relaxation arithmetic needs no special cases: inf + x = inf and inf < x is false.
*/

use std::ops::{Index, IndexMut};

pub type CityId = usize;
pub type Cost = f64;

pub const UNREACHABLE: Cost = f64::INFINITY;

#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            n,
            cells: vec![value; n * n],
        }
    }
}

impl<T> SquareMatrix<T> {
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn row(&self, i: CityId) -> &[T] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }
}

impl<T> Index<(CityId, CityId)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (CityId, CityId)) -> &T {
        &self.cells[i * self.n + j]
    }
}

impl<T> IndexMut<(CityId, CityId)> for SquareMatrix<T> {
    fn index_mut(&mut self, (i, j): (CityId, CityId)) -> &mut T {
        &mut self.cells[i * self.n + j]
    }
}

pub type WeightMatrix = SquareMatrix<Cost>;
pub type DistanceMatrix = SquareMatrix<Cost>;
pub type NextHopMatrix = SquareMatrix<Option<CityId>>;

impl WeightMatrix {
    /// All pairs unreachable except the zero diagonal.
    pub fn unconnected(n: usize) -> Self {
        let mut m = Self::filled(n, UNREACHABLE);
        for i in 0..n {
            m[(i, i)] = 0.0;
        }
        m
    }
}

impl NextHopMatrix {
    /// Every city routes to itself and nowhere else.
    pub fn seed(n: usize) -> Self {
        let mut m = Self::filled(n, None);
        for i in 0..n {
            m[(i, i)] = Some(i);
        }
        m
    }
}
