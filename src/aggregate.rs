//! Reduction of worker results
//!
//! The [`Aggregator`] is the single sequential merge point. It takes worker
//! results by value, in whatever order they arrive, and the outcome does not
//! depend on that order: every step is an addition into the merged table.

use tracing::trace;

use crate::degree::DegreeTable;
use crate::error::Result;
use crate::worker::{PartialDegrees, SpanStats};
use crate::NodeId;

/// Summary counts of a finished scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Valid records with both endpoints in range
    pub total_edges: u64,
    /// Distinct node ids with nonzero degree
    pub total_nodes: u64,
}

/// Fully merged scan result
#[derive(Debug, Clone)]
pub struct MergedDegrees {
    pub table: DegreeTable,
    pub totals: Totals,
    /// Line accounting summed over all spans
    pub stats: SpanStats,
    /// Number of worker results folded in
    pub workers: usize,
}

/// Folds [`PartialDegrees`] into one table and running totals
#[derive(Debug)]
pub struct Aggregator {
    table: DegreeTable,
    totals: Totals,
    stats: SpanStats,
    workers: usize,
}

impl Aggregator {
    /// Empty aggregator for ids `0..=max_node_id`; `None` means no valid
    /// record exists and the merged table has no slots.
    pub fn new(max_node_id: Option<NodeId>) -> Result<Self> {
        let table = match max_node_id {
            Some(max) => DegreeTable::with_max_node_id(max)?,
            None => DegreeTable::empty(),
        };
        Ok(Self {
            table,
            totals: Totals::default(),
            stats: SpanStats::default(),
            workers: 0,
        })
    }

    /// Merge one worker result
    pub fn absorb(&mut self, partial: PartialDegrees) {
        let newly_seen = self.table.absorb(&partial.table);
        self.totals.total_nodes += newly_seen;
        self.totals.total_edges += partial.edges;

        self.stats.lines += partial.stats.lines;
        self.stats.skipped += partial.stats.skipped;
        self.stats.malformed += partial.stats.malformed;
        self.stats.out_of_range += partial.stats.out_of_range;
        self.workers += 1;

        trace!(
            worker = partial.worker,
            newly_seen,
            edges = partial.edges,
            "Merged worker result"
        );
    }

    /// Merge every result from `parts`
    pub fn fold<I>(max_node_id: Option<NodeId>, parts: I) -> Result<MergedDegrees>
    where
        I: IntoIterator<Item = PartialDegrees>,
    {
        let mut aggregator = Self::new(max_node_id)?;
        for partial in parts {
            aggregator.absorb(partial);
        }
        Ok(aggregator.finish())
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn finish(self) -> MergedDegrees {
        MergedDegrees {
            table: self.table,
            totals: self.totals,
            stats: self.stats,
            workers: self.workers,
        }
    }
}
