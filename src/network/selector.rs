//! Kruskal 选择器：按代价升序处理候选边，仅接受合并两个不同集合的边.
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::network::dsu::DisjointSets;
use crate::network::edges::CandidateEdge;
use crate::network::ids::CityId;
use crate::network::matrix::Cost;

/// Emitted for every candidate the selector looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Accepted { edge: CandidateEdge, total: Cost },
    Rejected { edge: CandidateEdge },
}

pub type SelectionHook = dyn Fn(&SelectionEvent) + Send + Sync;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub total_cost: Cost,
    /// Accepted edges in acceptance order.
    pub accepted: Vec<CandidateEdge>,
    pub rejected: usize,
    pub remaining_sets: usize,
}

impl Selection {
    pub fn is_connected(&self) -> bool {
        self.remaining_sets <= 1
    }
}

pub struct Selector {
    sets: DisjointSets<CityId>,
    early_stop: bool,
    hook: Option<Arc<SelectionHook>>,
}

impl Selector {
    pub fn new(sets: DisjointSets<CityId>) -> Self {
        Self {
            sets,
            early_stop: true,
            hook: None,
        }
    }

    /// With `false`, every candidate is examined even after one set remains.
    pub fn early_stop(mut self, early_stop: bool) -> Self {
        self.early_stop = early_stop;
        self
    }

    pub fn hook(mut self, hook: Option<Arc<SelectionHook>>) -> Self {
        self.hook = hook;
        self
    }

    /// The running total saturates at [`Cost::MAX`]. Networks that pass
    /// [`RoadNetwork::validate`](crate::network::RoadNetwork::validate) never reach it.
    pub fn run(mut self, mut edges: Vec<CandidateEdge>) -> Selection {
        // Stable: equal costs keep generation order.
        edges.sort_by_key(|edge| edge.cost);

        let mut selection = Selection::default();
        for edge in edges {
            if self.early_stop && self.sets.set_count() <= 1 {
                break;
            }

            let event = if self.sets.union(edge.a, edge.b) {
                selection.total_cost = selection.total_cost.saturating_add(edge.cost);
                selection.accepted.push(edge);
                log::trace!(
                    "accept {} {} -> {} cost {} total {}",
                    edge.kind,
                    edge.a,
                    edge.b,
                    edge.cost,
                    selection.total_cost
                );
                SelectionEvent::Accepted {
                    edge,
                    total: selection.total_cost,
                }
            } else {
                selection.rejected += 1;
                log::trace!("reject {} {} -> {}", edge.kind, edge.a, edge.b);
                SelectionEvent::Rejected { edge }
            };

            if let Some(hook) = &self.hook {
                hook(&event);
            }
        }

        selection.remaining_sets = self.sets.set_count();
        selection
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::network::edges::EdgeKind;

    fn edge(a: u32, b: u32, cost: Cost) -> CandidateEdge {
        CandidateEdge {
            a: CityId::new(a),
            b: CityId::new(b),
            cost,
            kind: EdgeKind::Build,
        }
    }

    #[test]
    fn picks_cheapest_spanning_edges() {
        let edges = vec![
            edge(0, 1, 4),
            edge(0, 2, 2),
            edge(0, 3, 3),
            edge(1, 2, 6),
            edge(1, 3, 8),
            edge(2, 3, 1),
        ];
        let selection = Selector::new(DisjointSets::new(4)).run(edges);
        assert_eq!(selection.total_cost, 7);
        assert_eq!(selection.accepted.len(), 3);
        assert_eq!(selection.accepted[0], edge(2, 3, 1));
        assert_eq!(selection.remaining_sets, 1);
        assert!(selection.is_connected());
    }

    #[test]
    fn equal_costs_keep_generation_order() {
        let edges = vec![edge(0, 1, 1), edge(1, 2, 1), edge(0, 2, 1)];
        let selection = Selector::new(DisjointSets::new(3)).run(edges);
        assert_eq!(selection.accepted, vec![edge(0, 1, 1), edge(1, 2, 1)]);
        assert_eq!(selection.total_cost, 2);
    }

    #[test]
    fn early_stop_does_not_change_total() {
        let edges = vec![edge(0, 1, 1), edge(1, 2, 2), edge(0, 2, 3), edge(0, 2, 9)];
        let eager = Selector::new(DisjointSets::new(3)).run(edges.clone());
        let full = Selector::new(DisjointSets::new(3))
            .early_stop(false)
            .run(edges);
        assert_eq!(eager.total_cost, full.total_cost);
        assert_eq!(eager.rejected, 0);
        assert_eq!(full.rejected, 2);
    }

    #[test]
    fn disconnected_candidates_leave_several_sets() {
        let selection = Selector::new(DisjointSets::new(4)).run(vec![edge(0, 1, 3)]);
        assert_eq!(selection.total_cost, 3);
        assert_eq!(selection.remaining_sets, 3);
        assert!(!selection.is_connected());
    }

    #[test]
    fn hook_sees_every_decision() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let hook: Arc<SelectionHook> = Arc::new(move |event: &SelectionEvent| {
            sink.lock().unwrap().push(*event);
        });
        Selector::new(DisjointSets::new(2))
            .early_stop(false)
            .hook(Some(hook))
            .run(vec![edge(0, 1, 5), edge(0, 1, 6)]);
        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                SelectionEvent::Accepted {
                    edge: edge(0, 1, 5),
                    total: 5,
                },
                SelectionEvent::Rejected { edge: edge(0, 1, 6) },
            ]
        );
    }

    #[test]
    fn total_saturates_instead_of_wrapping() {
        let edges = vec![edge(0, 1, Cost::MAX), edge(1, 2, Cost::MAX)];
        let selection = Selector::new(DisjointSets::new(3)).run(edges);
        assert_eq!(selection.accepted.len(), 2);
        assert_eq!(selection.total_cost, Cost::MAX);
    }
}
