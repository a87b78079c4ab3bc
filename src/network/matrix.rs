//! 城市两两之间的方阵封装：道路存在性与建造/拆除代价.
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::network::ids::CityId;
use crate::network::index_vec::{Idx, IndexVec};

pub type Cost = u64;

type SmallRow<T> = SmallVec<[T; 8]>;

/// Dense `N × N` matrix addressed by a pair of cities.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityMatrix<T> {
    rows: IndexVec<CityId, SmallRow<T>>,
}

pub type RoadMatrix = CityMatrix<bool>;
pub type CostMatrix = CityMatrix<Cost>;

impl<T> CityMatrix<T>
where
    T: Clone,
{
    pub fn new(cities: usize, default: T) -> Self {
        let mut rows = IndexVec::with_capacity(cities);
        for _ in 0..cities {
            rows.push(SmallRow::from_elem(default.clone(), cities));
        }
        Self { rows }
    }

    /// Returns `None` unless every row is exactly as long as the row count.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let cities = rows.len();
        if rows.iter().any(|row| row.len() != cities) {
            return None;
        }
        let rows = rows
            .into_iter()
            .map(SmallRow::from_vec)
            .collect::<Vec<_>>();
        Some(Self {
            rows: IndexVec::from(rows),
        })
    }

    pub fn cities(&self) -> usize {
        self.rows.len()
    }

    pub fn is_square(&self) -> bool {
        let cities = self.cities();
        self.rows.iter().all(|row| row.len() == cities)
    }

    pub fn set(&mut self, from: CityId, to: CityId, value: T) {
        self.rows[from][to.index()] = value;
    }

    /// Writes `value` at both `(a, b)` and `(b, a)`.
    pub fn set_symmetric(&mut self, a: CityId, b: CityId, value: T) {
        self.set(a, b, value.clone());
        self.set(b, a, value);
    }

    pub fn get(&self, from: CityId, to: CityId) -> &T {
        &self.rows[from][to.index()]
    }

    /// Copies every `(u, v)` with `u < v` over its `(v, u)` twin.
    pub fn mirror_upper(&mut self) {
        let cities = self.cities();
        for u in 0..cities {
            for v in (u + 1)..cities {
                let value = self.rows[CityId::from_usize(u)][v].clone();
                self.rows[CityId::from_usize(v)][u] = value;
            }
        }
    }

    pub fn map<U, F>(&self, mut f: F) -> CityMatrix<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        let mut rows = IndexVec::with_capacity(self.cities());
        for row in self.rows.iter() {
            rows.push(row.iter().map(|value| f(value)).collect::<SmallRow<_>>());
        }
        CityMatrix { rows }
    }
}

impl<T> fmt::Debug for CityMatrix<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityMatrix")
            .field("rows", &self.rows)
            .finish()
    }
}

impl CityMatrix<bool> {
    /// Neighbours of `city` under the road relation, in ascending order.
    pub fn neighbours(&self, city: CityId) -> impl Iterator<Item = CityId> + '_ {
        self.rows[city]
            .iter()
            .enumerate()
            .filter(move |(idx, connected)| **connected && *idx != city.index())
            .map(|(idx, _)| CityId::from_usize(idx))
    }

    /// Pairs `(u, v)` with `u < v` whose two entries disagree.
    pub fn asymmetric_pairs(&self) -> Vec<(CityId, CityId)> {
        let cities = self.cities();
        let mut pairs = Vec::new();
        for u in 0..cities {
            for v in (u + 1)..cities {
                let (a, b) = (CityId::from_usize(u), CityId::from_usize(v));
                if self.get(a, b) != self.get(b, a) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }

    pub fn road_count(&self) -> usize {
        let cities = self.cities();
        (0..cities)
            .map(|u| {
                ((u + 1)..cities)
                    .filter(|&v| *self.get(CityId::from_usize(u), CityId::from_usize(v)))
                    .count()
            })
            .sum()
    }
}
