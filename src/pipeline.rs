//! Parallel degree scan
//!
//! Stages:
//! 1. probe the node id bound (sequential)
//! 2. split the file into spans, one per worker
//! 3. run the workers on a dedicated rayon pool, each with its own handle
//! 4. fold their results as they arrive over a channel
//! 5. rank the merged table
//!
//! Every fatal condition (bad config, unreadable file, table allocation)
//! is raised before the first worker is spawned.

use std::path::Path;

use crossbeam::channel;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::affinity;
use crate::aggregate::{Aggregator, MergedDegrees};
use crate::bounds::probe_max_node_id;
use crate::config::ScanConfig;
use crate::error::{DegreeError, Result};
use crate::partition::partition;
use crate::report::DegreeReport;
use crate::top_n::TopNSelector;
use crate::worker::{ChunkWorker, PartialDegrees};
use crate::NodeId;

/// Runs the full scan described by `config`
pub fn scan(config: &ScanConfig) -> Result<DegreeReport> {
    config.validate()?;
    let path = config.path.as_path();

    let file_size = std::fs::metadata(path)?.len();
    let max_node_id = probe_max_node_id(path)?;
    info!(
        path = %path.display(),
        file_size,
        max_node_id = ?max_node_id,
        threads = config.num_threads,
        "Starting degree scan"
    );

    let merged = match max_node_id {
        Some(max) => scan_spans(config, path, file_size, max)?,
        None => Aggregator::fold(None, Vec::new())?,
    };

    let ranking = TopNSelector::select(&merged.table, config.top_n);
    info!(
        edges = merged.totals.total_edges,
        nodes = merged.totals.total_nodes,
        dropped = merged.stats.dropped(),
        "Degree scan finished"
    );

    Ok(DegreeReport {
        ranking,
        totals: merged.totals,
        table: merged.table,
        max_node_id,
        top_n: config.top_n,
        num_threads: config.num_threads,
        file_size,
        stats: merged.stats,
    })
}

fn scan_spans(
    config: &ScanConfig,
    path: &Path,
    file_size: u64,
    max_node_id: NodeId,
) -> Result<MergedDegrees> {
    let mut aggregator = Aggregator::new(Some(max_node_id))?;
    let workers = plan_workers(file_size, config.num_threads, max_node_id)?;
    let expected = workers.len();
    let pool = build_pool(config)?;

    // Workers run on the pool; the calling thread is the only reducer.
    pool.in_place_scope(|scope| -> Result<()> {
        let (tx, rx) = channel::unbounded::<Result<PartialDegrees>>();
        for worker in workers {
            let tx = tx.clone();
            scope.spawn(move |_| {
                // send fails only if the reducer already gave up
                let _ = tx.send(worker.run(path));
            });
        }
        drop(tx);

        for outcome in rx {
            aggregator.absorb(outcome?);
        }
        Ok(())
    })?;

    debug!(workers = expected, totals = ?aggregator.totals(), "All spans merged");
    Ok(aggregator.finish())
}

/// One worker per span, each with its private table already allocated
pub fn plan_workers(
    file_size: u64,
    num_threads: usize,
    max_node_id: NodeId,
) -> Result<Vec<ChunkWorker>> {
    partition(file_size, num_threads)
        .into_iter()
        .enumerate()
        .map(|(id, span)| ChunkWorker::allocate(id, span, max_node_id))
        .collect()
}

fn build_pool(config: &ScanConfig) -> Result<ThreadPool> {
    let mut builder = ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .thread_name(|i| format!("degree-worker-{}", i));

    if config.pin_threads {
        let cores = affinity::available_cores();
        debug!(cores = cores.len(), "Core pinning enabled");
        builder = builder.start_handler(move |thread_index| {
            affinity::pin_current_thread(&cores, thread_index);
        });
    }

    builder
        .build()
        .map_err(|e| DegreeError::WorkerPool(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn edge_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_scan_small_file() {
        let file = edge_file("# comment\n3 4\nnot a number\n3:5\n");
        let report = scan(&ScanConfig::new(file.path(), 2)).unwrap();

        assert_eq!(report.total_edges(), 2);
        assert_eq!(report.total_nodes(), 3);
        assert_eq!(report.degree(3), 2);
        assert_eq!(report.degree(4), 1);
        assert_eq!(report.degree(5), 1);
        assert_eq!(report.max_node_id, Some(5));
        assert_eq!(report.ranking[0].node, 3);
    }

    #[test]
    fn test_scan_without_records() {
        let file = edge_file("# nothing here\n\n");
        let report = scan(&ScanConfig::new(file.path(), 4)).unwrap();
        assert_eq!(report.total_edges(), 0);
        assert_eq!(report.total_nodes(), 0);
        assert!(report.ranking.is_empty());
        assert_eq!(report.max_node_id, None);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = scan(&ScanConfig::new("/definitely/not/here.txt", 2)).unwrap_err();
        assert!(matches!(err, DegreeError::Io(_)));
    }

    #[test]
    fn test_plan_allocates_every_table_up_front() {
        let workers = plan_workers(100, 4, 9).unwrap();
        assert_eq!(workers.len(), 4);

        let err = plan_workers(100, 4, u64::MAX / 2).unwrap_err();
        assert!(matches!(err, DegreeError::TableAllocation { .. }));
    }

    #[test]
    fn test_unallocatable_bound_fails_before_workers() {
        let file = edge_file("1 2\n0 9223372036854775807\n");
        let err = scan(&ScanConfig::new(file.path(), 2)).unwrap_err();
        assert!(matches!(err, DegreeError::TableAllocation { .. }));
    }

    #[test]
    fn test_invalid_thread_count_is_fatal() {
        let file = edge_file("1 2\n");
        let err = scan(&ScanConfig::new(file.path(), 0)).unwrap_err();
        assert!(matches!(err, DegreeError::InvalidThreadCount { .. }));
    }

    #[test]
    fn test_pinning_does_not_change_result() {
        let file = edge_file("0 1\n1 2\n2 0\n2 2\n");
        let plain = scan(&ScanConfig::new(file.path(), 2)).unwrap();
        let pinned = scan(&ScanConfig::new(file.path(), 2).with_pinning(true)).unwrap();
        assert_eq!(plain.table, pinned.table);
        assert_eq!(plain.totals, pinned.totals);
    }
}
