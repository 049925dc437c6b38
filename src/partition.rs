//! Byte-range partitioning of the input file
//!
//! Spans produced here are provisional: they cut the file at arbitrary byte
//! offsets. [`crate::reader::RecordReader`] moves each start forward to a
//! record boundary before parsing.

/// Half-open byte range `[start, end)` owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Span {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `[0, file_size)` into `num_threads` contiguous spans.
///
/// Every span has `file_size / num_threads` bytes except the last, which
/// absorbs the remainder. `num_threads` of zero is treated as one.
pub fn partition(file_size: u64, num_threads: usize) -> Vec<Span> {
    let parts = num_threads.max(1) as u64;
    let chunk = file_size / parts;

    (0..parts)
        .map(|i| {
            let start = i * chunk;
            let end = if i == parts - 1 { file_size } else { (i + 1) * chunk };
            Span::new(start, end)
        })
        .collect()
}
