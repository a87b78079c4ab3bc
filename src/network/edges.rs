//! 候选边生成：每对城市给出一条带代价的候选边.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::network::components::Components;
use crate::network::core::RoadNetwork;
use crate::network::ids::CityId;
use crate::network::index_vec::Idx;
use crate::network::matrix::Cost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// No road yet; priced from the build matrix.
    Build,
    /// A road already exists; priced from the destroy matrix.
    Destroy,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Build => write!(f, "build"),
            EdgeKind::Destroy => write!(f, "destroy"),
        }
    }
}

/// An unordered city pair with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateEdge {
    pub a: CityId,
    pub b: CityId,
    pub cost: Cost,
    pub kind: EdgeKind,
}

impl CandidateEdge {
    /// Prices the pair from whichever matrix matches its road flag.
    pub fn for_pair(network: &RoadNetwork, a: CityId, b: CityId) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        if network.has_road(a, b) {
            Self {
                a,
                b,
                cost: network.destroy_cost(a, b),
                kind: EdgeKind::Destroy,
            }
        } else {
            Self {
                a,
                b,
                cost: network.build_cost(a, b),
                kind: EdgeKind::Build,
            }
        }
    }
}

/// How candidates are drawn from the city pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgePolicy {
    /// One edge per unordered pair, whatever its component.
    #[default]
    AllPairs,
    /// Destroy edges inside components, build edges across them.
    #[serde(rename = "bridging")]
    ComponentBridging,
}

impl EdgePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgePolicy::AllPairs => "all-pairs",
            EdgePolicy::ComponentBridging => "bridging",
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn generate_candidates(
    network: &RoadNetwork,
    components: &Components,
    policy: EdgePolicy,
) -> Vec<CandidateEdge> {
    let edges = match policy {
        EdgePolicy::AllPairs => all_pairs(network),
        EdgePolicy::ComponentBridging => bridging(network, components),
    };
    log::debug!(
        "generated {} candidate edges under {} policy",
        edges.len(),
        policy
    );
    edges
}

fn all_pairs(network: &RoadNetwork) -> Vec<CandidateEdge> {
    (0..network.cities())
        .map(CityId::from_usize)
        .array_combinations::<2>()
        .map(|[a, b]| CandidateEdge::for_pair(network, a, b))
        .collect()
}

fn bridging(network: &RoadNetwork, components: &Components) -> Vec<CandidateEdge> {
    let mut edges = Vec::new();

    for (_, members) in components.iter() {
        for [a, b] in members.iter().copied().array_combinations::<2>() {
            if network.has_road(a, b) {
                edges.push(CandidateEdge::for_pair(network, a, b));
            }
        }
    }

    let groups = components.iter().map(|(_, members)| members).collect::<Vec<_>>();
    for [left, right] in groups.iter().array_combinations::<2>() {
        for (&a, &b) in left.iter().cartesian_product(right.iter()) {
            edges.push(CandidateEdge::for_pair(network, a, b));
        }
    }

    edges
}
