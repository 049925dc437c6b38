//! Top-N selection over a merged degree table
//!
//! One ascending pass over node ids, keeping a fixed-length ranking sorted by
//! degree. A candidate enters only if its degree is strictly greater than the
//! current last slot, and it moves up only past strictly smaller degrees.
//! Because ids are visited in ascending order this makes the tie rule exact:
//! among equal degrees the lower node id always ranks first, both inside the
//! ranking and at the cut-off.

use crate::degree::DegreeTable;
use crate::NodeId;

/// Number of nodes reported by default
pub const DEFAULT_TOP_N: usize = 10;

/// One entry of the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedNode {
    pub node: NodeId,
    pub degree: u64,
}

/// Incremental top-N ranking
#[derive(Debug, Clone)]
pub struct TopNSelector {
    slots: Vec<RankedNode>,
}

impl TopNSelector {
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![RankedNode { node: 0, degree: 0 }; n],
        }
    }

    /// Offer one node. Callers must offer nodes in ascending id order for
    /// the tie rule to hold.
    pub fn offer(&mut self, node: NodeId, degree: u64) {
        let Some(last) = self.slots.last_mut() else {
            return;
        };
        if degree <= last.degree {
            return;
        }
        *last = RankedNode { node, degree };

        let mut j = self.slots.len() - 1;
        while j > 0 && self.slots[j].degree > self.slots[j - 1].degree {
            self.slots.swap(j, j - 1);
            j -= 1;
        }
    }

    /// Ranked entries in descending degree order, zero-degree slots omitted
    pub fn into_ranking(self) -> Vec<RankedNode> {
        self.slots.into_iter().filter(|r| r.degree > 0).collect()
    }

    /// Rank every node of `table`
    pub fn select(table: &DegreeTable, n: usize) -> Vec<RankedNode> {
        let mut selector = Self::new(n);
        for (node, degree) in table.iter() {
            selector.offer(node, degree);
        }
        selector.into_ranking()
    }
}
