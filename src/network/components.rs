//! 连通分量划分：按现有道路把城市分组.
use crate::network::ids::{CityId, ComponentId};
use crate::network::index_vec::IndexVec;
use crate::network::matrix::RoadMatrix;

/// A partition of the cities into maximal road-connected groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    members: IndexVec<ComponentId, Vec<CityId>>,
    component_of: IndexVec<CityId, ComponentId>,
}

impl Components {
    /// Depth-first traversal with an explicit stack. Roots and neighbours are
    /// visited in ascending index order, so the result is deterministic.
    pub fn find(roads: &RoadMatrix) -> Self {
        let cities = roads.cities();
        let mut visited: IndexVec<CityId, bool> = IndexVec::from_fn(cities, |_| false);
        let mut component_of: IndexVec<CityId, ComponentId> =
            IndexVec::from_fn(cities, |_| ComponentId::new(0));
        let mut members: IndexVec<ComponentId, Vec<CityId>> = IndexVec::new();
        let mut stack = Vec::new();

        for root in visited.indices() {
            if visited[root] {
                continue;
            }
            let id = ComponentId::new(members.len() as u32);
            let mut group = Vec::new();
            visited[root] = true;
            stack.push(root);

            while let Some(city) = stack.pop() {
                component_of[city] = id;
                group.push(city);
                for next in roads.neighbours(city) {
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }

            members.push(group);
        }

        log::debug!(
            "found {} components over {} cities",
            members.len(),
            cities
        );
        Self {
            members,
            component_of,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self, component: ComponentId) -> &[CityId] {
        &self.members[component]
    }

    pub fn component_of(&self, city: CityId) -> ComponentId {
        self.component_of[city]
    }

    pub fn same_component(&self, a: CityId, b: CityId) -> bool {
        self.component_of(a) == self.component_of(b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &[CityId])> {
        self.members
            .iter_enumerated()
            .map(|(id, cities)| (id, cities.as_slice()))
    }
}
