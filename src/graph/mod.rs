//! The conflict DAG of candidate blocks and the propagation of round results through it.
mod block;
mod dag;
mod queue;

pub use block::Block;
pub use dag::*;
pub use queue::WorkQueue;

/// Index of a [Block] within the arena of a [DAG].
pub type BlockIndex = usize;

/// A block is accepted once its streak of successes exceeds this threshold.
pub const DECISION_THRESHOLD: u64 = 1;

/// Direction of a [DAG::traverse].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow descendant edges
    Forward,
    /// Follow ancestor edges
    Reverse,
}

#[derive(Debug)]
pub enum Error {
    /// Only a block without ancestors can be added to an empty DAG
    InvalidAncestors,
    /// Some of the ancestors of a block are not reachable from the head
    UnknownAncestor,
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
