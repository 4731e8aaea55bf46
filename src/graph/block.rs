use super::BlockIndex;

use crate::colored::Colorize;

use std::collections::BTreeSet;

/// A candidate block in the conflict [DAG][super::DAG].
///
/// Blocks are created standalone and handed to [DAG::add_block][super::DAG::add_block],
/// which establishes the edges. Vote state is only ever mutated by the DAG.
#[derive(Debug, Clone)]
pub struct Block<V> {
    id: V,
    /// Whether the block won the last round it took part in.
    pub(super) chit: bool,
    /// Total number of won rounds, including rounds won by descendants.
    pub(super) confidence: u64,
    /// Length of the current streak of won rounds.
    pub(super) consecutive_successes: u64,
    /// Terminal once set.
    pub(super) accepted: bool,
    pub(super) ancestors: BTreeSet<BlockIndex>,
    pub(super) descendants: BTreeSet<BlockIndex>,
}

impl<V> Block<V> {
    pub fn new(id: V) -> Self {
        Block {
            id,
            chit: false,
            confidence: 0,
            consecutive_successes: 0,
            accepted: false,
            ancestors: BTreeSet::new(),
            descendants: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &V {
        &self.id
    }

    pub fn chit(&self) -> bool {
        self.chit
    }

    pub fn confidence(&self) -> u64 {
        self.confidence
    }

    pub fn consecutive_successes(&self) -> u64 {
        self.consecutive_successes
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Arena indices of the direct causal predecessors.
    pub fn ancestors(&self) -> &BTreeSet<BlockIndex> {
        &self.ancestors
    }

    /// Arena indices of the direct causal successors.
    pub fn descendants(&self) -> &BTreeSet<BlockIndex> {
        &self.descendants
    }

    // A losing block forfeits its chit, confidence and streak.
    pub(super) fn reset(&mut self) {
        self.chit = false;
        self.confidence = 0;
        self.consecutive_successes = 0;
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Block<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let status = if self.accepted { "accepted".green() } else { "pending".yellow() };
        write!(
            f,
            "{} [{}] chit = {}, confidence = {}, consecutive_successes = {}",
            self.id, status, self.chit, self.confidence, self.consecutive_successes
        )
    }
}
