//! Rolling symbol history and the per-tick merge rule that feeds it.

use crate::{
    pose_classifier::Observation,
    symbols::{Symbol, SymbolPair},
};
use log::debug;
use std::collections::VecDeque;

/// Chronological history of symbol pairs, oldest first.
///
/// With a capacity set, pushing onto a full buffer evicts the oldest pair.
#[derive(Debug, Clone, Default)]
pub struct SequenceBuffer {
    pairs: VecDeque<SymbolPair>,
    capacity: Option<usize>,
}

impl SequenceBuffer {
    /// Unbounded buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer keeping at most `capacity` pairs; storage grows on demand
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be greater than 0");
        Self {
            pairs: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    /// Build a buffer holding `pairs`, oldest first
    pub fn from_pairs<I: IntoIterator<Item = SymbolPair>>(pairs: I) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
            capacity: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Most recent pair
    #[must_use]
    pub fn last(&self) -> Option<&SymbolPair> {
        self.pairs.back()
    }

    /// Pair `offset` steps back from the newest (0 = newest)
    #[must_use]
    pub fn nth_from_end(&self, offset: usize) -> Option<&SymbolPair> {
        self.pairs.len().checked_sub(offset + 1).and_then(|i| self.pairs.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolPair> {
        self.pairs.iter()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    fn push(&mut self, pair: SymbolPair) {
        if let Some(capacity) = self.capacity {
            if self.pairs.len() >= capacity {
                self.pairs.pop_front();
            }
        }
        self.pairs.push_back(pair);
    }

    fn replace_last(&mut self, pair: SymbolPair) {
        if let Some(last) = self.pairs.back_mut() {
            *last = pair;
        }
    }
}

/// What a merge did to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A new pair was appended
    Appended,
    /// The pair appended earlier this tick was rewritten
    Overwritten,
    /// Nothing changed
    Unchanged,
}

/// Folds a tick's observations into a [`SequenceBuffer`].
///
/// At most one pair is appended per tick; later observations in the same tick
/// refine that pair in place.
#[derive(Debug, Clone, Default)]
pub struct SequenceAssembler {
    appended_this_tick: bool,
}

impl SequenceAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new tick
    pub fn begin_tick(&mut self) {
        self.appended_this_tick = false;
    }

    /// Whether the current tick has already appended a pair
    #[must_use]
    pub fn appended_this_tick(&self) -> bool {
        self.appended_this_tick
    }

    /// Record one observation.
    ///
    /// The observation is dropped when the newest pair already carries the
    /// same symbol for that hand. Otherwise the opposite hand is carried over
    /// from the newest pair (or left as `None` on an empty buffer) and the
    /// result is merged.
    pub fn observe(&mut self, buffer: &mut SequenceBuffer, observation: Observation) -> MergeOutcome {
        let Observation { hand, symbol } = observation;

        let other = match buffer.last() {
            Some(last) if last.get(hand) == symbol => return MergeOutcome::Unchanged,
            Some(last) => last.get(hand.opposite()),
            None => Symbol::None,
        };

        self.merge(buffer, SymbolPair::for_hand(hand, symbol, other))
    }

    /// Record every observation of a tick, in order
    pub fn observe_all(&mut self, buffer: &mut SequenceBuffer, observations: &[Observation]) {
        for observation in observations {
            self.observe(buffer, *observation);
        }
    }

    /// Apply the merge rule to a candidate pair
    pub fn merge(&mut self, buffer: &mut SequenceBuffer, candidate: SymbolPair) -> MergeOutcome {
        let outcome = match buffer.last().copied() {
            None => {
                buffer.push(candidate);
                self.appended_this_tick = true;
                MergeOutcome::Appended
            }
            Some(_) if self.appended_this_tick => {
                buffer.replace_last(candidate);
                MergeOutcome::Overwritten
            }
            Some(last) if last != candidate => {
                buffer.push(candidate);
                self.appended_this_tick = true;
                MergeOutcome::Appended
            }
            Some(_) => MergeOutcome::Unchanged,
        };

        debug!("Merged {} -> {:?} (history {})", candidate, outcome, buffer.len());
        outcome
    }
}
