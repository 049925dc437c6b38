//! Per-span parsing workers
//!
//! A [`ChunkWorker`] owns one span and its own file handle. It never touches
//! shared state: everything it counts is returned as a [`PartialDegrees`]
//! value for the reducer.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::debug;

use crate::degree::DegreeTable;
use crate::error::Result;
use crate::partition::Span;
use crate::reader::RecordReader;
use crate::record::{parse_line, LineKind};
use crate::NodeId;

/// Line accounting for one span. Diagnostic only; never part of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStats {
    /// Lines read, including skipped and dropped ones
    pub lines: u64,
    /// Blank and comment lines
    pub skipped: u64,
    /// Lines that failed to parse
    pub malformed: u64,
    /// Valid records with an endpoint above the bound
    pub out_of_range: u64,
}

impl SpanStats {
    pub fn dropped(&self) -> u64 {
        self.malformed + self.out_of_range
    }
}

/// Result of one worker, handed to the reducer by value
#[derive(Debug, Clone)]
pub struct PartialDegrees {
    pub worker: usize,
    pub table: DegreeTable,
    pub edges: u64,
    pub stats: SpanStats,
}

/// Parses the records of one span into a private degree table.
///
/// The table is allocated when the worker is built, so a worker that exists
/// can no longer fail on allocation.
#[derive(Debug, Clone)]
pub struct ChunkWorker {
    id: usize,
    span: Span,
    table: DegreeTable,
}

impl ChunkWorker {
    /// Worker over `span` filling the given (zeroed) table
    pub fn new(id: usize, span: Span, table: DegreeTable) -> Self {
        Self { id, span, table }
    }

    /// Worker over `span` with a fresh table for ids `0..=max_node_id`
    pub fn allocate(id: usize, span: Span, max_node_id: NodeId) -> Result<Self> {
        Ok(Self::new(id, span, DegreeTable::with_max_node_id(max_node_id)?))
    }

    /// Open a fresh handle on `path` and parse this worker's span
    pub fn run(self, path: &Path) -> Result<PartialDegrees> {
        let file = File::open(path)?;
        self.run_on(file)
    }

    /// Parse this worker's span from an already opened source
    pub fn run_on<R: Read + Seek>(self, source: R) -> Result<PartialDegrees> {
        let Self { id, span, mut table } = self;
        let mut reader = RecordReader::open_span(source, span)?;
        let aligned_start = reader.position();

        let mut stats = SpanStats::default();
        let mut edges = 0u64;
        let mut line = Vec::with_capacity(64);

        while reader.read_record(&mut line)? {
            stats.lines += 1;
            match parse_line(&line) {
                LineKind::Record(edge) => {
                    if table.record_edge(edge) {
                        edges += 1;
                    } else {
                        stats.out_of_range += 1;
                    }
                }
                LineKind::Skip => stats.skipped += 1,
                LineKind::Malformed => stats.malformed += 1,
            }
        }

        debug!(
            worker = id,
            start = span.start,
            aligned_start,
            end = span.end,
            lines = stats.lines,
            edges,
            dropped = stats.dropped(),
            "Span parsed"
        );

        Ok(PartialDegrees {
            worker: id,
            table,
            edges,
            stats,
        })
    }
}
