//! Dense degree tables
//!
//! Node ids index directly into a `Vec<u64>` sized `max_node_id + 1`. Each
//! worker fills a private table; the reducer folds them into one.

use crate::error::{DegreeError, Result};
use crate::record::Edge;
use crate::NodeId;

/// Degree count per node id in `0..=max_node_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeTable {
    counts: Vec<u64>,
}

impl DegreeTable {
    /// Zeroed table covering ids `0..=max_node_id`.
    ///
    /// Fails with [`DegreeError::TableAllocation`] instead of aborting when
    /// the table cannot be allocated.
    pub fn with_max_node_id(max_node_id: NodeId) -> Result<Self> {
        let slots = max_node_id
            .checked_add(1)
            .ok_or(DegreeError::TableAllocation { slots: max_node_id })?;
        let len = usize::try_from(slots).map_err(|_| DegreeError::TableAllocation { slots })?;

        let mut counts = Vec::new();
        counts
            .try_reserve_exact(len)
            .map_err(|_| DegreeError::TableAllocation { slots })?;
        counts.resize(len, 0);
        Ok(Self { counts })
    }

    /// Table with no slots, for inputs without any valid record
    pub fn empty() -> Self {
        Self { counts: Vec::new() }
    }

    /// Number of slots (`max_node_id + 1`)
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Whether `node` has a slot in this table
    pub fn covers(&self, node: NodeId) -> bool {
        node < self.counts.len() as u64
    }

    /// Degree of `node`; zero for ids outside the table
    pub fn degree(&self, node: NodeId) -> u64 {
        usize::try_from(node)
            .ok()
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Count both endpoints of `edge`. A self-loop counts twice.
    ///
    /// Returns `false` and leaves the table untouched when either endpoint is
    /// out of range.
    pub fn record_edge(&mut self, edge: Edge) -> bool {
        if !self.covers(edge.from) || !self.covers(edge.to) {
            return false;
        }
        self.counts[edge.from as usize] += 1;
        self.counts[edge.to as usize] += 1;
        true
    }

    /// Add every count of `other` into `self`, returning how many slots went
    /// from zero to nonzero.
    pub fn absorb(&mut self, other: &DegreeTable) -> u64 {
        debug_assert_eq!(self.len(), other.len(), "tables must cover the same id range");
        let mut newly_seen = 0;
        for (merged, &local) in self.counts.iter_mut().zip(&other.counts) {
            if local == 0 {
                continue;
            }
            if *merged == 0 {
                newly_seen += 1;
            }
            *merged += local;
        }
        newly_seen
    }

    /// Sum of all degrees
    pub fn total_degree(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of nodes with nonzero degree
    pub fn nonzero_nodes(&self) -> u64 {
        self.counts.iter().filter(|&&d| d > 0).count() as u64
    }

    /// `(node, degree)` in ascending node order, zero slots included
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.counts.iter().enumerate().map(|(i, &d)| (i as NodeId, d))
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }
}
