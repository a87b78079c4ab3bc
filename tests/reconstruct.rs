//! 端到端：文本解析 → 重建，并与朴素 Prim 最小生成树交叉验证.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use roadnet::network::{
    CityId, Components, Cost, CostMatrix, EdgeKind, EdgePolicy, Idx, ReconstructOptions,
    RoadMatrix, RoadNetwork, minimum_cost, reconstruct,
};
use roadnet::parse::{CostAlphabet, parse_network};

fn random_network(rng: &mut StdRng, cities: usize, road_chance: f64) -> RoadNetwork {
    let mut roads = RoadMatrix::new(cities, false);
    let mut build = CostMatrix::new(cities, 0);
    let mut destroy = CostMatrix::new(cities, 0);
    for u in 0..cities {
        for v in (u + 1)..cities {
            let (a, b) = (CityId::from_usize(u), CityId::from_usize(v));
            roads.set_symmetric(a, b, rng.random_bool(road_chance));
            build.set_symmetric(a, b, rng.random_range(0..52));
            destroy.set_symmetric(a, b, rng.random_range(0..52));
        }
    }
    RoadNetwork::new(roads, build, destroy).unwrap()
}

/// O(N²) Prim over the same pair weights.
fn prim(network: &RoadNetwork) -> Cost {
    let cities = network.cities();
    if cities == 0 {
        return 0;
    }
    let weight = |u: usize, v: usize| {
        let (a, b) = (CityId::from_usize(u.min(v)), CityId::from_usize(u.max(v)));
        if network.has_road(a, b) {
            network.destroy_cost(a, b)
        } else {
            network.build_cost(a, b)
        }
    };

    let mut in_tree = vec![false; cities];
    let mut best = vec![Cost::MAX; cities];
    best[0] = 0;
    let mut total = 0;
    for _ in 0..cities {
        let next = (0..cities)
            .filter(|&v| !in_tree[v])
            .min_by_key(|&v| best[v])
            .unwrap();
        in_tree[next] = true;
        total += best[next];
        for v in 0..cities {
            if !in_tree[v] {
                best[v] = best[v].min(weight(next, v));
            }
        }
    }
    total
}

#[test]
fn golden_scenarios() {
    let triangle = parse_network("011,101,110 AAA,AAA,AAA BBB,BBB,BBB", CostAlphabet::ZERO_BASED)
        .unwrap();
    assert_eq!(minimum_cost(&triangle), 2);

    let pair = parse_network("00,00 AF,FA AA,AA", CostAlphabet::ZERO_BASED).unwrap();
    assert_eq!(minimum_cost(&pair), 5);

    let single = parse_network("0 A A", CostAlphabet::ZERO_BASED).unwrap();
    assert_eq!(minimum_cost(&single), 0);

    let empty = parse_network("", CostAlphabet::ZERO_BASED).unwrap();
    assert_eq!(minimum_cost(&empty), 0);
}

#[test]
fn alphabet_changes_the_price() {
    let line = "00,00 AF,FA AA,AA";
    let zero = parse_network(line, CostAlphabet::ZERO_BASED).unwrap();
    let one = parse_network(line, CostAlphabet::ONE_BASED).unwrap();
    assert_eq!(minimum_cost(&zero), 5);
    assert_eq!(minimum_cost(&one), 6);
}

#[test]
fn matches_prim_on_random_networks() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..200 {
        let cities = rng.random_range(0..12);
        let chance = [0.0, 0.2, 0.5, 1.0][round % 4];
        let network = random_network(&mut rng, cities, chance);
        let result = reconstruct(&network, ReconstructOptions::default());

        assert_eq!(result.total_cost(), prim(&network), "round {round}");
        assert_eq!(
            result.selection.accepted.len(),
            cities.saturating_sub(1),
            "round {round}"
        );
        assert!(result.selection.is_connected());
    }
}

#[test]
fn without_roads_only_build_edges_are_used() {
    let mut rng = StdRng::seed_from_u64(7);
    let network = random_network(&mut rng, 9, 0.0);
    let result = reconstruct(&network, ReconstructOptions::default());
    assert_eq!(result.count_of(EdgeKind::Destroy), 0);
    assert_eq!(result.count_of(EdgeKind::Build), 8);
    assert_eq!(result.total_cost(), prim(&network));
}

#[test]
fn fully_connected_never_exceeds_a_path_tree() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let cities = rng.random_range(2..10);
        let network = random_network(&mut rng, cities, 1.0);
        let path_tree: Cost = (1..cities)
            .map(|v| network.destroy_cost(CityId::from_usize(v - 1), CityId::from_usize(v)))
            .sum();
        let result = reconstruct(&network, ReconstructOptions::default());
        assert!(result.total_cost() <= path_tree);
        assert_eq!(result.count_of(EdgeKind::Build), 0);
    }
}

#[test]
fn pipeline_is_idempotent_and_leaves_input_untouched() {
    let mut rng = StdRng::seed_from_u64(23);
    let network = random_network(&mut rng, 10, 0.3);
    let snapshot = network.clone();
    let first = reconstruct(&network, ReconstructOptions::default());
    let second = reconstruct(&network, ReconstructOptions::default());
    assert_eq!(first.selection, second.selection);
    assert_eq!(network, snapshot);
}

#[test]
fn early_stop_matches_full_scan() {
    let mut rng = StdRng::seed_from_u64(42);
    for policy in [EdgePolicy::AllPairs, EdgePolicy::ComponentBridging] {
        for _ in 0..30 {
            let cities = rng.random_range(0..10);
            let network = random_network(&mut rng, cities, 0.3);
            let eager = reconstruct(
                &network,
                ReconstructOptions {
                    policy,
                    ..Default::default()
                },
            );
            let full = reconstruct(
                &network,
                ReconstructOptions {
                    policy,
                    early_stop: false,
                    observer: None,
                },
            );
            assert_eq!(eager.total_cost(), full.total_cost());
            assert_eq!(eager.selection.accepted, full.selection.accepted);
        }
    }
}

#[test]
fn bridging_accepts_one_edge_per_extra_component() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..30 {
        let cities = rng.random_range(1..10);
        let network = random_network(&mut rng, cities, 0.25);
        let components = Components::find(network.roads());
        let result = reconstruct(
            &network,
            ReconstructOptions {
                policy: EdgePolicy::ComponentBridging,
                ..Default::default()
            },
        );
        assert_eq!(result.selection.accepted.len(), components.len() - 1);
        assert_eq!(result.count_of(EdgeKind::Destroy), 0);
        assert!(result.selection.is_connected());
    }
}
