//! degree_rank: parallel degree distribution of plain-text edge lists
//!
//! The input file is cut into byte spans, each span is aligned to a record
//! boundary and parsed by its own worker into a private degree table, and
//! the tables are folded into one by a single reducer. The merged table is
//! then ranked to find the highest-degree nodes.
//!
//! ```no_run
//! use degree_rank::config::ScanConfig;
//! use degree_rank::pipeline::scan;
//!
//! let report = scan(&ScanConfig::new("graph.txt", 4)).unwrap();
//! println!("{}", report);
//! ```

pub mod affinity;
pub mod aggregate;
pub mod bounds;
pub mod config;
pub mod degree;
pub mod error;
pub mod logging;
pub mod partition;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod report;
pub mod top_n;
pub mod worker;

/// Node identifier as written in the edge list
pub type NodeId = u64;

pub use aggregate::Totals;
pub use config::ScanConfig;
pub use degree::DegreeTable;
pub use error::{DegreeError, Result};
pub use pipeline::scan;
pub use report::DegreeReport;
pub use top_n::RankedNode;
