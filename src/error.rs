//! Error types for degree scanning
//!
//! Only setup and I/O failures surface as errors. Malformed edge records are
//! dropped inside the workers and never reach this type.

use thiserror::Error;

/// Fatal errors that abort a scan before (or instead of) producing a report
#[derive(Error, Debug)]
pub enum DegreeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Invalid thread count {requested}: expected 1..={max}")]
    InvalidThreadCount { requested: usize, max: usize },

    #[error("Cannot allocate degree table for {slots} nodes")]
    TableAllocation { slots: u64 },

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, DegreeError>;
