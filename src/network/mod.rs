//! # 路网重建核心（Kruskal）
//!
//! 设城市集合 `V = {0, …, N-1}`，现有道路关系 `R ⊆ V × V`（对称，忽略对角线），
//! 以及两张代价矩阵 `Build, Destroy ∈ ℕ^{N×N}`。对任意无序城市对 `{u, v}`：
//!
//! * 若 `(u, v) ∈ R`，候选边代价为 `Destroy[u][v]`；
//! * 否则候选边代价为 `Build[u][v]`。
//!
//! 选择器从 `N` 个单点集合出发，按代价升序（稳定排序）扫描候选边，
//! 仅当两端点位于不同集合时接受并合并，累计代价即为结果。
//!
//! 流水线：
//! * [`Components::find`]：显式栈深度优先遍历求连通分量；
//! * [`generate_candidates`]：按 [`EdgePolicy`] 生成候选边；
//! * [`DisjointSets`]：按秩合并 + 路径压缩；
//! * [`Selector`]：Kruskal 选择，可挂接 [`SelectionEvent`] 回调。
//!
//! ## 示例
//!
//! ```rust
//! use roadnet::network::*;
//!
//! let mut roads = RoadMatrix::new(3, false);
//! roads.set_symmetric(CityId::new(0), CityId::new(1), true);
//! roads.set_symmetric(CityId::new(1), CityId::new(2), true);
//! roads.set_symmetric(CityId::new(0), CityId::new(2), true);
//!
//! let network = RoadNetwork::new(roads, CostMatrix::new(3, 9), CostMatrix::new(3, 1)).unwrap();
//! assert_eq!(minimum_cost(&network), 2);
//! ```

pub mod components;
pub mod core;
pub mod dsu;
pub mod edges;
pub mod ids;
pub mod index_vec;
pub mod io;
pub mod matrix;
pub mod reconstruct;
pub mod selector;

pub use components::Components;
pub use self::core::{NetworkError, RoadNetwork};
pub use dsu::DisjointSets;
pub use edges::{CandidateEdge, EdgeKind, EdgePolicy, generate_candidates};
pub use ids::{CityId, ComponentId};
pub use index_vec::{Idx, IndexVec};
pub use matrix::{CityMatrix, Cost, CostMatrix, RoadMatrix};
pub use reconstruct::{
    ReconstructOptions, Reconstruction, Reconstructor, minimum_cost, reconstruct,
};
pub use selector::{Selection, SelectionEvent, SelectionHook, Selector};
