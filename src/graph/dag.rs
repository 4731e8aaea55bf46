use super::block::Block;
use super::queue::WorkQueue;
use super::{BlockIndex, Direction, Error, Result, DECISION_THRESHOLD};

use crate::colored::Colorize;

use tracing::{debug, info};

use std::collections::HashSet;

/// The conflict DAG.
///
/// Blocks are stored in an arena and addressed by their [BlockIndex]. Edges are sets of
/// indices kept on both ends, `head` is the current root of the graph. Everything reachable
/// from `head` over descendant edges is live, everything else is garbage which can be
/// dropped with [DAG::sweep].
#[derive(Debug, Clone)]
pub struct DAG<V> {
    /// The arena, indices are never reused.
    blocks: Vec<Option<Block<V>>>,
    /// The last accepted block (or the genesis block).
    head: Option<BlockIndex>,
}

impl<V> Default for DAG<V> {
    fn default() -> Self {
        DAG { blocks: vec![], head: None }
    }
}

impl<V: Clone + Eq + std::hash::Hash + std::fmt::Debug> DAG<V> {
    pub fn new() -> Self {
        DAG::default()
    }

    pub fn head(&self) -> Option<&Block<V>> {
        self.head.and_then(|ix| self.block(ix))
    }

    pub fn head_index(&self) -> Option<BlockIndex> {
        self.head
    }

    /// Fetches a block from the arena.
    pub fn block(&self, ix: BlockIndex) -> Option<&Block<V>> {
        self.blocks.get(ix).and_then(Option::as_ref)
    }

    fn block_mut(&mut self, ix: BlockIndex) -> Option<&mut Block<V>> {
        self.blocks.get_mut(ix).and_then(Option::as_mut)
    }

    /// Finds the first block with the id `id` reachable from the head.
    pub fn find(&self, id: &V) -> Option<&Block<V>> {
        let ids = [id.clone()];
        self.search(&ids).first().and_then(|ix| self.block(*ix))
    }

    /// The number of blocks held by the arena, live or not.
    pub fn len(&self) -> usize {
        self.blocks.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a new block below the blocks designated by `ancestors`.
    ///
    /// The first block of an empty DAG must have no ancestors and becomes the head. Any
    /// other block must name ancestors which are all reachable from the head. Nothing is
    /// mutated when an error is returned.
    pub fn add_block(&mut self, mut block: Block<V>, ancestors: &[V]) -> Result<BlockIndex> {
        if self.head.is_none() && !ancestors.is_empty() {
            return Err(Error::InvalidAncestors);
        }
        block.ancestors.clear();
        block.descendants.clear();

        if self.head.is_none() {
            let ix = self.blocks.len();
            debug!("[{}] inserted head {:?} at {}", "dag".blue(), block.id(), ix);
            self.blocks.push(Some(block));
            self.head = Some(ix);
            return Ok(ix);
        }

        let resolved = self.search(ancestors);
        if resolved.len() < ancestors.len() {
            return Err(Error::UnknownAncestor);
        }
        let ix = self.blocks.len();
        for ancestor_ix in resolved.iter() {
            let _ = block.ancestors.insert(*ancestor_ix);
        }
        debug!("[{}] inserted {:?} at {} below {:?}", "dag".blue(), block.id(), ix, resolved);
        self.blocks.push(Some(block));
        for ancestor_ix in resolved {
            if let Some(ancestor) = self.block_mut(ancestor_ix) {
                let _ = ancestor.descendants.insert(ix);
            }
        }
        Ok(ix)
    }

    /// Applies the outcome of one round to the contested blocks `candidates`.
    ///
    /// The block with the id `winner` and its whole ancestry gain a success. Every other
    /// candidate is reset and breaks the streak of its ancestry, leaving the ancestors'
    /// confidence untouched. Accepted ancestors are left as they are. Ids
    /// which cannot be found from the head are ignored.
    pub fn success_pool(&mut self, winner: &V, candidates: &[V]) {
        for ix in self.search(candidates) {
            let ancestry = self.traverse(ix, Direction::Reverse);
            let won = match self.block(ix) {
                Some(block) => block.id() == winner,
                None => continue,
            };

            if !won {
                if let Some(block) = self.block_mut(ix) {
                    debug!("[{}] {:?} lost the round", "dag".blue(), block.id());
                    block.reset();
                }
                for ancestor_ix in ancestry {
                    if let Some(ancestor) = self.block_mut(ancestor_ix) {
                        if !ancestor.accepted {
                            ancestor.consecutive_successes = 0;
                        }
                    }
                }
                continue;
            }

            for ancestor_ix in ancestry {
                let ancestor = match self.block_mut(ancestor_ix) {
                    Some(ancestor) if !ancestor.accepted => ancestor,
                    _ => continue,
                };
                ancestor.consecutive_successes += 1;
                ancestor.confidence += 1;
                ancestor.chit = true;
                if ancestor.consecutive_successes > DECISION_THRESHOLD {
                    ancestor.accepted = true;
                    self.accept(ancestor_ix);
                }
            }
        }
    }

    // Promotes an accepted block to the head and severs it from its ancestry.
    fn accept(&mut self, ix: BlockIndex) {
        if let Some(block) = self.block_mut(ix) {
            block.ancestors.clear();
            info!(
                "[{}] accepted {:?} (confidence = {})",
                "dag".blue(),
                block.id(),
                block.confidence
            );
            self.head = Some(ix);
        }
    }

    /// Performs a breadth-first-search from the head, collecting the blocks matching `ids`
    /// in discovery order. A block is collected once per matching id.
    pub fn search(&self, ids: &[V]) -> Vec<BlockIndex> {
        let head = match self.head {
            Some(head) => head,
            None => return vec![],
        };
        let mut result = vec![];
        for ix in self.traverse(head, Direction::Forward) {
            if let Some(block) = self.block(ix) {
                for id in ids.iter() {
                    if block.id() == id {
                        result.push(ix);
                    }
                }
            }
        }
        result
    }

    /// Performs a breadth-first-search from `start` over descendant edges (`Forward`) or
    /// ancestor edges (`Reverse`). The start block is always first.
    pub fn traverse(&self, start: BlockIndex, direction: Direction) -> Vec<BlockIndex> {
        let mut result = vec![];
        if self.block(start).is_none() {
            return result;
        }
        // Only the start block is visited so far
        let mut visited: HashSet<BlockIndex> = HashSet::new();
        let mut queue = WorkQueue::new();
        let _ = visited.insert(start);
        queue.push(start);

        while let Some(ix) = queue.pop_front() {
            let block = match self.block(ix) {
                Some(block) => block,
                None => continue,
            };
            let adj = match direction {
                Direction::Forward => &block.descendants,
                Direction::Reverse => &block.ancestors,
            };
            for edge in adj.iter() {
                if visited.insert(*edge) {
                    queue.push(*edge);
                }
            }
            result.push(ix);
        }
        result
    }

    /// Drops every block which is not reachable from the head, together with the edges
    /// pointing at them. Returns the number of dropped blocks.
    pub fn sweep(&mut self) -> usize {
        let head = match self.head {
            Some(head) => head,
            None => return 0,
        };
        let live: HashSet<BlockIndex> =
            self.traverse(head, Direction::Forward).into_iter().collect();

        let mut dropped = 0;
        for (ix, slot) in self.blocks.iter_mut().enumerate() {
            if slot.is_some() && !live.contains(&ix) {
                *slot = None;
                dropped += 1;
            }
        }
        for block in self.blocks.iter_mut().flatten() {
            block.ancestors.retain(|ix| live.contains(ix));
            block.descendants.retain(|ix| live.contains(ix));
        }
        debug!("[{}] swept {} blocks", "dag".blue(), dropped);
        dropped
    }
}
