//! Disjoint-set union with union by rank and path compression.
use crate::network::index_vec::{Idx, IndexVec};

#[derive(Debug, Clone)]
pub struct DisjointSets<I: Idx> {
    parent: IndexVec<I, I>,
    rank: IndexVec<I, u8>,
    sets: usize,
}

impl<I: Idx> DisjointSets<I> {
    /// `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: IndexVec::from_fn(len, |id| id),
            rank: IndexVec::from_fn(len, |_| 0),
            sets: len,
        }
    }

    /// Number of disjoint sets still alive.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn find(&mut self, x: I) -> I {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Returns `true` if `a` and `b` were in different sets.
    pub fn union(&mut self, a: I, b: I) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    pub fn same(&mut self, a: I, b: I) -> bool {
        self.find(a) == self.find(b)
    }
}
