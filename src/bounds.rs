//! Node id bound discovery
//!
//! A single sequential pass over the input that finds the largest node id
//! appearing in a valid record. Its result sizes every degree table.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::reader::READ_BUFFER_BYTES;
use crate::record::{parse_line, LineKind};
use crate::NodeId;

/// Largest node id in `path`, or `None` when no line is a valid record
pub fn probe_max_node_id(path: impl AsRef<Path>) -> Result<Option<NodeId>> {
    let file = File::open(path.as_ref())?;
    probe_reader(BufReader::with_capacity(READ_BUFFER_BYTES, file))
}

/// Same as [`probe_max_node_id`] over any buffered source
pub fn probe_reader<R: BufRead>(mut reader: R) -> Result<Option<NodeId>> {
    let mut buf = Vec::new();
    let mut max_node_id: Option<NodeId> = None;
    let mut records = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if let LineKind::Record(edge) = parse_line(&buf) {
            records += 1;
            let candidate = edge.max_endpoint();
            max_node_id = Some(max_node_id.map_or(candidate, |m| m.max(candidate)));
        }
    }

    debug!(records, max_node_id = ?max_node_id, "Bounds probe finished");
    Ok(max_node_id)
}
