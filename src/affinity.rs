//! Optional CPU pinning for pool threads
//!
//! Pinning is a performance hint. Failure to pin is logged and otherwise
//! ignored; it never changes what a scan computes.

use core_affinity::CoreId;
use tracing::{debug, warn};

/// Cores available for pinning, empty if the platform does not report any
pub fn available_cores() -> Vec<CoreId> {
    core_affinity::get_core_ids().unwrap_or_default()
}

/// Core assigned to the `thread_index`-th pool thread (round robin)
pub fn core_for_thread(cores: &[CoreId], thread_index: usize) -> Option<CoreId> {
    if cores.is_empty() {
        None
    } else {
        Some(cores[thread_index % cores.len()])
    }
}

/// Pin the calling thread. Returns whether pinning took effect.
pub fn pin_current_thread(cores: &[CoreId], thread_index: usize) -> bool {
    let Some(core) = core_for_thread(cores, thread_index) else {
        warn!(thread_index, "No cores reported, thread left unpinned");
        return false;
    };

    if core_affinity::set_for_current(core) {
        debug!(thread_index, core = core.id, "Pinned worker thread");
        true
    } else {
        warn!(thread_index, core = core.id, "Failed to pin worker thread");
        false
    }
}
