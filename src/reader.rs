//! Span-bounded record reader
//!
//! Wraps any seekable byte source in a `BufReader` and exposes two
//! operations: aligning an arbitrary offset to the next record boundary, and
//! reading whole lines until the span's end offset is reached.
//!
//! A line belongs to the span that contains its first byte. Worker `i` starts
//! at the first line beginning at or after its nominal start and keeps reading
//! while its cursor is below its nominal end, so the line straddling a cut is
//! parsed once, by the earlier worker.

use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};

use crate::partition::Span;

/// Read buffer per worker
pub const READ_BUFFER_BYTES: usize = 256 * 1024;

/// Seek `reader` to the first record boundary at or after `offset` and
/// return that position.
///
/// Offset 0 is always a boundary. Otherwise the scan starts one byte early so
/// that an offset sitting right after a `\n` is recognised as a boundary
/// itself. If no terminator follows, the end of input is returned.
pub fn align_to_record<R: BufRead + Seek>(reader: &mut R, offset: u64) -> io::Result<u64> {
    if offset == 0 {
        reader.seek(SeekFrom::Start(0))?;
        return Ok(0);
    }

    let mut pos = reader.seek(SeekFrom::Start(offset - 1))?;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(pos.max(offset));
        }
        match buf.iter().position(|&b| b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                return Ok(pos + i as u64 + 1);
            }
            None => {
                let n = buf.len();
                reader.consume(n);
                pos += n as u64;
            }
        }
    }
}

/// Reads the records of one span, line by line
pub struct RecordReader<R> {
    inner: BufReader<R>,
    pos: u64,
    end: u64,
}

impl<R: Read + Seek> RecordReader<R> {
    /// Position a new reader at the aligned start of `span`
    pub fn open_span(source: R, span: Span) -> io::Result<Self> {
        Self::with_capacity(READ_BUFFER_BYTES, source, span)
    }

    pub fn with_capacity(capacity: usize, source: R, span: Span) -> io::Result<Self> {
        let mut inner = BufReader::with_capacity(capacity, source);
        let pos = align_to_record(&mut inner, span.start)?;
        Ok(Self {
            inner,
            pos,
            end: span.end,
        })
    }

    /// Current byte offset in the source
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Aligned start is at or past the span end: nothing to read
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.end
    }

    /// Read the next line (terminator included) into `buf`.
    ///
    /// Returns `Ok(false)` once the cursor has reached the span end or the
    /// source is exhausted.
    pub fn read_record(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        if self.is_exhausted() {
            return Ok(false);
        }
        buf.clear();
        let n = self.inner.read_until(b'\n', buf)?;
        if n == 0 {
            return Ok(false);
        }
        self.pos += n as u64;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use std::io::Cursor;

    fn aligned(data: &[u8], offset: u64) -> u64 {
        let mut reader = BufReader::with_capacity(4, Cursor::new(data));
        align_to_record(&mut reader, offset).unwrap()
    }

    fn collect_span(data: &[u8], span: Span) -> Vec<String> {
        let mut reader = RecordReader::with_capacity(3, Cursor::new(data), span).unwrap();
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while reader.read_record(&mut buf).unwrap() {
            lines.push(String::from_utf8(buf.clone()).unwrap());
        }
        lines
    }

    #[test]
    fn test_align_zero_is_untouched() {
        assert_eq!(aligned(b"1 2\n3 4\n", 0), 0);
    }

    #[test]
    fn test_align_mid_line_moves_to_next_line() {
        // "1 2\n" is bytes 0..4, "30 40\n" is 4..10
        let data = b"1 2\n30 40\n5 6\n";
        assert_eq!(aligned(data, 1), 4);
        assert_eq!(aligned(data, 5), 10);
        assert_eq!(aligned(data, 9), 10);
    }

    #[test]
    fn test_align_on_boundary_stays() {
        let data = b"1 2\n30 40\n5 6\n";
        assert_eq!(aligned(data, 4), 4);
        assert_eq!(aligned(data, 10), 10);
    }

    #[test]
    fn test_align_without_terminator_goes_to_end() {
        let data = b"1 2\n3456789";
        assert_eq!(aligned(data, 6), data.len() as u64);
        assert_eq!(aligned(data, data.len() as u64), data.len() as u64);
    }

    #[test]
    fn test_straddling_line_read_once() {
        let data = b"1 2\n30 40\n5 6\n";
        // cut at 6 falls inside "30 40\n"
        let first = collect_span(data, Span::new(0, 6));
        let second = collect_span(data, Span::new(6, data.len() as u64));
        assert_eq!(first, vec!["1 2\n", "30 40\n"]);
        assert_eq!(second, vec!["5 6\n"]);
    }

    #[test]
    fn test_line_starting_on_cut_goes_to_later_span() {
        let data = b"1 2\n30 40\n5 6\n";
        let first = collect_span(data, Span::new(0, 4));
        let second = collect_span(data, Span::new(4, data.len() as u64));
        assert_eq!(first, vec!["1 2\n"]);
        assert_eq!(second, vec!["30 40\n", "5 6\n"]);
    }

    #[test]
    fn test_span_inside_long_line_is_empty() {
        let data = b"1 2\n123456789 987654321\n5 6\n";
        let span = Span::new(6, 12);
        let reader = RecordReader::open_span(Cursor::new(&data[..]), span).unwrap();
        assert!(reader.is_exhausted());
        assert!(collect_span(data, span).is_empty());
    }

    #[test]
    fn test_last_line_without_newline() {
        let data = b"1 2\n3 4";
        let lines = collect_span(data, Span::new(0, data.len() as u64));
        assert_eq!(lines, vec!["1 2\n", "3 4"]);
    }

    #[test]
    fn test_every_partition_covers_all_lines_once() {
        let data = b"# header\n1 2\n3:4\n55 66\n\n7 7\n100 200\n8 9";
        let expected = collect_span(data, Span::new(0, data.len() as u64));

        for threads in 1..=data.len() + 2 {
            let mut lines = Vec::new();
            for span in partition(data.len() as u64, threads) {
                lines.extend(collect_span(data, span));
            }
            assert_eq!(lines, expected, "threads = {}", threads);
        }
    }
}
