//! 路网重建驱动：分量发现 → 候选边 → Kruskal 选择.
use std::sync::Arc;

use crate::network::components::Components;
use crate::network::core::RoadNetwork;
use crate::network::dsu::DisjointSets;
use crate::network::edges::{EdgeKind, EdgePolicy, generate_candidates};
use crate::network::ids::CityId;
use crate::network::matrix::Cost;
use crate::network::selector::{Selection, SelectionHook, Selector};

#[derive(Clone)]
pub struct ReconstructOptions {
    pub policy: EdgePolicy,
    /// 集合数降到 1 后立即停止扫描
    pub early_stop: bool,
    /// 每条候选边的接受/拒绝回调
    pub observer: Option<Arc<SelectionHook>>,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            policy: EdgePolicy::default(),
            early_stop: true,
            observer: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Reconstruction {
    pub components: Components,
    pub candidates: usize,
    pub selection: Selection,
}

impl Reconstruction {
    pub fn total_cost(&self) -> Cost {
        self.selection.total_cost
    }

    pub fn count_of(&self, kind: EdgeKind) -> usize {
        self.selection
            .accepted
            .iter()
            .filter(|edge| edge.kind == kind)
            .count()
    }
}

pub struct Reconstructor {
    options: ReconstructOptions,
}

impl Reconstructor {
    pub fn new(options: ReconstructOptions) -> Self {
        Self { options }
    }

    pub fn reconstruct(&self, network: &RoadNetwork) -> Reconstruction {
        let components = Components::find(network.roads());
        let candidates = generate_candidates(network, &components, self.options.policy);
        let candidate_count = candidates.len();

        let sets = self.initial_sets(network.cities(), &components);
        let selection = Selector::new(sets)
            .early_stop(self.options.early_stop)
            .hook(self.options.observer.clone())
            .run(candidates);

        log::debug!(
            "accepted {} of {} candidates, {} sets remain, total cost {}",
            selection.accepted.len(),
            candidate_count,
            selection.remaining_sets,
            selection.total_cost
        );

        Reconstruction {
            components,
            candidates: candidate_count,
            selection,
        }
    }

    /// Bridging treats each component as already merged, at no cost.
    fn initial_sets(&self, cities: usize, components: &Components) -> DisjointSets<CityId> {
        let mut sets = DisjointSets::new(cities);
        if self.options.policy == EdgePolicy::ComponentBridging {
            for (_, members) in components.iter() {
                if let Some((&head, rest)) = members.split_first() {
                    for &city in rest {
                        sets.union(head, city);
                    }
                }
            }
        }
        sets
    }
}

pub fn reconstruct(network: &RoadNetwork, options: ReconstructOptions) -> Reconstruction {
    Reconstructor::new(options).reconstruct(network)
}

/// Total cost under the default options.
pub fn minimum_cost(network: &RoadNetwork) -> Cost {
    reconstruct(network, ReconstructOptions::default()).total_cost()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::matrix::{CostMatrix, RoadMatrix};

    fn triangle(destroy: Cost) -> RoadNetwork {
        let mut roads = RoadMatrix::new(3, false);
        roads.set_symmetric(CityId::new(0), CityId::new(1), true);
        roads.set_symmetric(CityId::new(1), CityId::new(2), true);
        roads.set_symmetric(CityId::new(0), CityId::new(2), true);
        RoadNetwork::new(roads, CostMatrix::new(3, 9), CostMatrix::new(3, destroy)).unwrap()
    }

    fn isolated(cities: usize, build: Cost) -> RoadNetwork {
        RoadNetwork::new(
            RoadMatrix::new(cities, false),
            CostMatrix::new(cities, build),
            CostMatrix::new(cities, 0),
        )
        .unwrap()
    }

    #[test]
    fn triangle_with_unit_destroy_costs_two() {
        assert_eq!(minimum_cost(&triangle(1)), 2);
    }

    #[test]
    fn triangle_under_bridging_costs_nothing() {
        let options = ReconstructOptions {
            policy: EdgePolicy::ComponentBridging,
            ..Default::default()
        };
        let result = reconstruct(&triangle(1), options);
        assert_eq!(result.total_cost(), 0);
        assert_eq!(result.selection.remaining_sets, 1);
    }

    #[test]
    fn two_cities_without_road_pay_build_cost() {
        let result = reconstruct(&isolated(2, 5), ReconstructOptions::default());
        assert_eq!(result.total_cost(), 5);
        assert_eq!(result.count_of(EdgeKind::Build), 1);
        assert_eq!(result.count_of(EdgeKind::Destroy), 0);
    }

    #[test]
    fn zero_and_one_city_cost_nothing() {
        assert_eq!(minimum_cost(&RoadNetwork::empty()), 0);
        let single = reconstruct(&isolated(1, 5), ReconstructOptions::default());
        assert_eq!(single.total_cost(), 0);
        assert_eq!(single.candidates, 0);
        assert_eq!(single.components.len(), 1);
    }

    #[test]
    fn bridging_joins_components_with_cheapest_build() {
        // {0,1} and {2,3} are separate road groups.
        let mut roads = RoadMatrix::new(4, false);
        roads.set_symmetric(CityId::new(0), CityId::new(1), true);
        roads.set_symmetric(CityId::new(2), CityId::new(3), true);
        let mut build = CostMatrix::new(4, 10);
        build.set_symmetric(CityId::new(1), CityId::new(2), 3);
        let network = RoadNetwork::new(roads, build, CostMatrix::new(4, 1)).unwrap();

        let options = ReconstructOptions {
            policy: EdgePolicy::ComponentBridging,
            ..Default::default()
        };
        let result = reconstruct(&network, options);
        assert_eq!(result.components.len(), 2);
        assert_eq!(result.total_cost(), 3);
        assert_eq!(result.selection.accepted.len(), 1);

        // All pairs: both roads (1 each) plus the cheap bridge.
        assert_eq!(minimum_cost(&network), 5);
    }

    #[test]
    fn one_sided_road_does_not_merge_components() {
        // Only (2, 1) is set below the diagonal; the upper triangle keeps 1 alone.
        let mut roads = RoadMatrix::new(3, false);
        roads.set_symmetric(CityId::new(0), CityId::new(2), true);
        roads.set(CityId::new(2), CityId::new(1), true);
        let network =
            RoadNetwork::new(roads, CostMatrix::new(3, 5), CostMatrix::new(3, 1)).unwrap();

        let options = ReconstructOptions {
            policy: EdgePolicy::ComponentBridging,
            ..Default::default()
        };
        let result = reconstruct(&network, options);
        assert_eq!(result.components.len(), 2);
        assert_eq!(result.total_cost(), 5);
        assert_eq!(minimum_cost(&network), 6);
    }
}
