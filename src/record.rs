//! Edge Record Parsing
//!
//! One line of the edge list is one record. Two forms are accepted:
//! - whitespace separated: `"3 4"` (tabs allowed, as in SNAP dumps)
//! - colon separated: `"3:4"`, blanks allowed only before each number
//!
//! Lines starting with `#` are comments. Anything else is malformed and is
//! dropped by the caller without being reported.

use crate::NodeId;

/// An undirected edge as written in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// Largest endpoint id
    pub fn max_endpoint(&self) -> NodeId {
        self.from.max(self.to)
    }
}

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A syntactically valid record
    Record(Edge),
    /// Empty line or `#` comment
    Skip,
    /// Anything that is neither
    Malformed,
}

/// Classify one raw line. Trailing `\n` / `\r\n` are ignored.
pub fn parse_line(raw: &[u8]) -> LineKind {
    let line = strip_line_ending(raw);
    if line.is_empty() || line[0] == b'#' {
        return LineKind::Skip;
    }

    let Ok(text) = std::str::from_utf8(line) else {
        return LineKind::Malformed;
    };

    match parse_edge(text) {
        Some(edge) => LineKind::Record(edge),
        None => LineKind::Malformed,
    }
}

/// Parse a record body in either accepted form
pub fn parse_edge(text: &str) -> Option<Edge> {
    if let Some((a, b)) = text.split_once(':') {
        // leading blanks are tolerated before each number, nothing else
        let from = a.trim_start().parse().ok()?;
        let to = b.trim_start().parse().ok()?;
        return Some(Edge::new(from, to));
    }

    let mut fields = text.split_ascii_whitespace();
    let from = fields.next()?.parse().ok()?;
    let to = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Edge::new(from, to))
}

fn strip_line_ending(raw: &[u8]) -> &[u8] {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    line.strip_suffix(b"\r").unwrap_or(line)
}
