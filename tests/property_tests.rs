//! Property-based tests for degree_rank
//!
//! Random edge lists (with comments, blank and malformed lines mixed in) are
//! written to temporary files and scanned with different thread counts.

use degree_rank::{scan, DegreeReport, ScanConfig};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Strategies
// ============================================================================

/// One input line: mostly records in either form, some noise
fn line_strategy(max_id: u64) -> impl Strategy<Value = String> {
    prop_oneof![
        6 => (0..=max_id, 0..=max_id).prop_map(|(a, b)| format!("{} {}", a, b)),
        3 => (0..=max_id, 0..=max_id).prop_map(|(a, b)| format!("{}:{}", a, b)),
        1 => (0..=max_id).prop_map(|a| format!("{}\t{}", a, a)),
        1 => Just("# comment line".to_string()),
        1 => Just(String::new()),
        1 => "[a-z]{1,12}",
    ]
}

fn edge_list_strategy() -> impl Strategy<Value = String> {
    (1u64..200).prop_flat_map(|max_id| {
        (
            proptest::collection::vec(line_strategy(max_id), 0..120),
            any::<bool>(),
        )
            .prop_map(|(lines, trailing_newline)| {
                let mut text = lines.join("\n");
                if trailing_newline {
                    text.push('\n');
                }
                text
            })
    })
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(file: &NamedTempFile, threads: usize) -> DegreeReport {
    scan(&ScanConfig::new(file.path(), threads)).unwrap()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Same input, same answer, whatever the thread count
    #[test]
    fn partition_invariance(contents in edge_list_strategy()) {
        let file = write_temp(&contents);
        let baseline = run(&file, 1);

        for threads in [2, 4, 8] {
            let report = run(&file, threads);
            prop_assert_eq!(&report.table, &baseline.table, "threads = {}", threads);
            prop_assert_eq!(report.totals, baseline.totals, "threads = {}", threads);
            prop_assert_eq!(&report.ranking, &baseline.ranking, "threads = {}", threads);
        }
    }

    /// Every counted edge adds exactly two to the degree sum
    #[test]
    fn degree_sum_law(contents in edge_list_strategy(), threads in 1usize..=8) {
        let file = write_temp(&contents);
        let report = run(&file, threads);

        prop_assert_eq!(report.table.total_degree(), 2 * report.total_edges());
        prop_assert_eq!(report.total_nodes(), report.table.nonzero_nodes());
    }

    /// Ranking is sorted by degree, then by ascending node id
    #[test]
    fn ranking_order(contents in edge_list_strategy()) {
        let file = write_temp(&contents);
        let report = run(&file, 3);

        prop_assert!(report.ranking.len() <= 10);
        for pair in report.ranking.windows(2) {
            prop_assert!(
                pair[0].degree > pair[1].degree
                    || (pair[0].degree == pair[1].degree && pair[0].node < pair[1].node)
            );
        }
        for entry in &report.ranking {
            prop_assert_eq!(report.degree(entry.node), entry.degree);
        }
    }

    /// Counting by hand over all lines gives the same totals
    #[test]
    fn matches_sequential_count(contents in edge_list_strategy()) {
        let file = write_temp(&contents);
        let report = run(&file, 4);

        let mut expected_edges = 0u64;
        for line in contents.lines() {
            if let degree_rank::record::LineKind::Record(_) =
                degree_rank::record::parse_line(line.as_bytes())
            {
                expected_edges += 1;
            }
        }
        prop_assert_eq!(report.total_edges(), expected_edges);
    }
}
