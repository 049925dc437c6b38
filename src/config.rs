//! Scan configuration
//!
//! Usage: `degree_rank <filename> <num_threads> [affinity]`

use std::path::PathBuf;

use crate::error::{DegreeError, Result};
use crate::top_n::DEFAULT_TOP_N;

/// Upper bound on the worker count unless overridden
pub const DEFAULT_MAX_THREADS: usize = 64;

/// Configuration for one degree scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Edge list to read
    pub path: PathBuf,
    /// Number of workers (and pool threads)
    pub num_threads: usize,
    /// Pin pool threads to cores; a hint only
    pub pin_threads: bool,
    /// Ranking length
    pub top_n: usize,
    /// Largest accepted `num_threads`
    pub max_threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            num_threads: 1,
            pin_threads: false,
            top_n: DEFAULT_TOP_N,
            max_threads: DEFAULT_MAX_THREADS,
        }
    }
}

impl ScanConfig {
    pub fn new(path: impl Into<PathBuf>, num_threads: usize) -> Self {
        Self {
            path: path.into(),
            num_threads,
            ..Self::default()
        }
    }

    pub fn with_pinning(mut self, pin_threads: bool) -> Self {
        self.pin_threads = pin_threads;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = max_threads;
        self
    }

    /// Parse the positional command line. `args[0]` is the program name.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let program = args.first().map(String::as_str).unwrap_or("degree_rank");
        let usage = || {
            DegreeError::Usage(format!("{} <filename> <num_threads> [affinity]", program))
        };

        if args.len() < 3 {
            return Err(usage());
        }

        let num_threads = args[2].parse().map_err(|_| {
            DegreeError::Usage(format!("num_threads must be a positive integer, got '{}'", args[2]))
        })?;

        let pin_threads = match args.get(3).map(String::as_str) {
            None => false,
            Some("affinity") => true,
            Some(_) => return Err(usage()),
        };

        let config = Self::new(&args[1], num_threads).with_pinning(pin_threads);
        config.validate()?;
        Ok(config)
    }

    /// Reject thread counts outside `1..=max_threads`
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == 0 || self.num_threads > self.max_threads {
            return Err(DegreeError::InvalidThreadCount {
                requested: self.num_threads,
                max: self.max_threads,
            });
        }
        Ok(())
    }
}
