//! Scan result and its textual rendering

use std::fmt;

use crate::aggregate::Totals;
use crate::degree::DegreeTable;
use crate::top_n::RankedNode;
use crate::worker::SpanStats;
use crate::NodeId;

/// Everything a finished scan knows
#[derive(Debug, Clone)]
pub struct DegreeReport {
    /// Highest-degree nodes, descending, ties by ascending id
    pub ranking: Vec<RankedNode>,
    pub totals: Totals,
    /// Merged degree table (`max_node_id + 1` slots)
    pub table: DegreeTable,
    /// Bound found by the probe; `None` when the input has no valid record
    pub max_node_id: Option<NodeId>,
    /// Ranking length that was requested
    pub top_n: usize,
    pub num_threads: usize,
    pub file_size: u64,
    pub stats: SpanStats,
}

impl DegreeReport {
    pub fn degree(&self, node: NodeId) -> u64 {
        self.table.degree(node)
    }

    pub fn total_edges(&self) -> u64 {
        self.totals.total_edges
    }

    pub fn total_nodes(&self) -> u64 {
        self.totals.total_nodes
    }
}

impl fmt::Display for DegreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {} nodes with highest degree:", self.top_n)?;
        for entry in &self.ranking {
            writeln!(f, "Node {}: {} neighbors", entry.node, entry.degree)?;
        }
        writeln!(f)?;
        writeln!(f, "Total Unique Nodes: {}", self.totals.total_nodes)?;
        write!(f, "Total Edges: {}", self.totals.total_edges)
    }
}
