use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::network::io::{self, IoError};
use crate::network::{CandidateEdge, Cost, EdgeKind, EdgePolicy, Reconstruction};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructionReport {
    pub tool_name: String,
    pub cities: usize,
    pub components: usize,
    pub policy: EdgePolicy,
    pub candidate_edges: usize,
    pub accepted_edges: Vec<CandidateEdge>,
    pub built: usize,
    pub destroyed: usize,
    pub total_cost: Cost,
    pub connected: bool,
    pub analysis_time: Duration,
}

impl fmt::Display for ReconstructionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "路网重建报告")?;
        writeln!(f, "分析工具: {}", self.tool_name)?;
        writeln!(f, "分析时间: {:?}", self.analysis_time)?;
        writeln!(f, "城市数: {}", self.cities)?;
        writeln!(f, "连通分量数: {}", self.components)?;
        writeln!(f, "候选边策略: {}", self.policy)?;
        writeln!(f, "候选边数: {}", self.candidate_edges)?;
        writeln!(f, "是否连通: {}", self.connected)?;

        if !self.accepted_edges.is_empty() {
            writeln!(
                f,
                "\n选中 {} 条边 (建造 {}, 拆除 {}):",
                self.accepted_edges.len(),
                self.built,
                self.destroyed
            )?;
            for edge in &self.accepted_edges {
                writeln!(f, "  {} -- {}: {} {}", edge.a, edge.b, edge.kind, edge.cost)?;
            }
        }

        writeln!(f, "\n总代价: {}", self.total_cost)
    }
}

impl ReconstructionReport {
    pub fn new(
        tool_name: String,
        cities: usize,
        policy: EdgePolicy,
        reconstruction: &Reconstruction,
        analysis_time: Duration,
    ) -> Self {
        Self {
            tool_name,
            cities,
            components: reconstruction.components.len(),
            policy,
            candidate_edges: reconstruction.candidates,
            accepted_edges: reconstruction.selection.accepted.clone(),
            built: reconstruction.count_of(EdgeKind::Build),
            destroyed: reconstruction.count_of(EdgeKind::Destroy),
            total_cost: reconstruction.total_cost(),
            connected: reconstruction.selection.is_connected(),
            analysis_time,
        }
    }

    /// Writes the text report to `path` and its JSON twin to `path.json`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_string())?;

        let mut json_path = path.as_os_str().to_owned();
        json_path.push(".json");
        io::write_json(json_path, self)
    }
}
