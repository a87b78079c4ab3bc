//! 重建后路网的图表示，用于导出 Graphviz.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use petgraph::dot::{Config, Dot};
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

use crate::network::{CandidateEdge, EdgeKind, Idx, Reconstruction};

pub struct NetworkGraph {
    pub graph: Graph<String, CandidateEdge, Undirected>,
}

impl NetworkGraph {
    pub fn from_reconstruction(cities: usize, reconstruction: &Reconstruction) -> Self {
        let mut graph = Graph::new_undirected();
        let nodes: Vec<NodeIndex> = (0..cities)
            .map(|city| graph.add_node(format!("city {}", city)))
            .collect();
        for edge in &reconstruction.selection.accepted {
            graph.add_edge(nodes[edge.a.index()], nodes[edge.b.index()], *edge);
        }
        Self { graph }
    }

    pub fn to_dot(&self) -> String {
        format!(
            "{:?}",
            Dot::with_attr_getters(
                &self.graph,
                &[Config::EdgeNoLabel, Config::NodeNoLabel],
                &|_, edge| {
                    let weight = edge.weight();
                    let style = match weight.kind {
                        EdgeKind::Build => "dashed",
                        EdgeKind::Destroy => "solid",
                    };
                    format!("label = \"{} {}\", style = {}", weight.kind, weight.cost, style)
                },
                &|_, (_, label)| format!("label = \"{}\"", label),
            )
        )
    }

    pub fn write_dot<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.to_dot().as_bytes())
    }
}
