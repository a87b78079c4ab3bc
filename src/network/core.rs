//! 路网输入：道路存在矩阵与两张代价矩阵.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::ids::CityId;
use crate::network::index_vec::Idx;
use crate::network::matrix::{Cost, CostMatrix, RoadMatrix};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("{matrix} matrix is not square")]
    NotSquare { matrix: &'static str },
    #[error("{matrix} matrix covers {found} cities, road matrix covers {expected}")]
    SizeMismatch {
        matrix: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{cities} cities with pair cost up to {max_cost} can overflow the total")]
    CostOverflow { cities: usize, max_cost: Cost },
}

/// The three immutable matrices the reconstruction works on.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadNetwork {
    roads: RoadMatrix,
    build: CostMatrix,
    destroy: CostMatrix,
}

impl fmt::Debug for RoadNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoadNetwork")
            .field("cities", &self.cities())
            .field("roads", &self.roads)
            .field("build", &self.build)
            .field("destroy", &self.destroy)
            .finish()
    }
}

impl RoadNetwork {
    pub fn empty() -> Self {
        Self {
            roads: RoadMatrix::new(0, false),
            build: CostMatrix::new(0, 0),
            destroy: CostMatrix::new(0, 0),
        }
    }

    pub fn new(
        roads: RoadMatrix,
        build: CostMatrix,
        destroy: CostMatrix,
    ) -> Result<Self, NetworkError> {
        let mut network = Self {
            roads,
            build,
            destroy,
        };
        network.validate()?;
        network.mirror_upper_roads();
        Ok(network)
    }

    /// 以上三角为准对齐道路矩阵，返回被覆盖的城市对数量.
    pub fn mirror_upper_roads(&mut self) -> usize {
        let asymmetric = self.roads.asymmetric_pairs();
        if let Some(first) = asymmetric.first() {
            log::warn!(
                "road matrix is not symmetric at {} pairs, first {:?}; using the upper triangle",
                asymmetric.len(),
                first
            );
            self.roads.mirror_upper();
        }
        asymmetric.len()
    }

    /// Checks matrix shapes, and that `cities - 1` of the largest pair cost
    /// still fits in [`Cost`]. Symmetry is left to [`Self::mirror_upper_roads`].
    pub fn validate(&self) -> Result<(), NetworkError> {
        let expected = self.roads.cities();
        let checks = [
            ("road", self.roads.is_square(), expected),
            ("build", self.build.is_square(), self.build.cities()),
            ("destroy", self.destroy.is_square(), self.destroy.cities()),
        ];
        for (matrix, square, found) in checks {
            if !square {
                return Err(NetworkError::NotSquare { matrix });
            }
            if found != expected {
                return Err(NetworkError::SizeMismatch {
                    matrix,
                    expected,
                    found,
                });
            }
        }

        let cities = expected;
        let max_cost = self.max_pair_cost();
        let edges = cities.saturating_sub(1) as Cost;
        if max_cost.checked_mul(edges).is_none() {
            return Err(NetworkError::CostOverflow { cities, max_cost });
        }
        Ok(())
    }

    fn max_pair_cost(&self) -> Cost {
        let cities = self.cities();
        let mut max_cost: Cost = 0;
        for u in 0..cities {
            for v in (u + 1)..cities {
                let (a, b) = (CityId::from_usize(u), CityId::from_usize(v));
                max_cost = max_cost
                    .max(self.build_cost(a, b))
                    .max(self.destroy_cost(a, b));
            }
        }
        max_cost
    }

    pub fn cities(&self) -> usize {
        self.roads.cities()
    }

    pub fn roads(&self) -> &RoadMatrix {
        &self.roads
    }

    pub fn build_costs(&self) -> &CostMatrix {
        &self.build
    }

    pub fn destroy_costs(&self) -> &CostMatrix {
        &self.destroy
    }

    pub fn has_road(&self, a: CityId, b: CityId) -> bool {
        *self.roads.get(a, b)
    }

    pub fn build_cost(&self, a: CityId, b: CityId) -> Cost {
        *self.build.get(a, b)
    }

    pub fn destroy_cost(&self, a: CityId, b: CityId) -> Cost {
        *self.destroy.get(a, b)
    }
}

impl Default for RoadNetwork {
    fn default() -> Self {
        Self::empty()
    }
}
