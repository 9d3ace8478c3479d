//! Policy table mapping board states to action weights

use std::collections::HashMap;

use crate::tictactoe::StateKey;

/// Unnormalized action weights for one state, indexed by cell position.
///
/// Weights are counts, not probabilities. An index whose cell is already
/// occupied still carries the prior weight until masking discovers it.
pub type WeightVector = [u32; 9];

/// Initial weight given to every action of a newly seen state
pub const PRIOR_WEIGHT: u32 = 10;

/// Per-state weight total above which the vector is halved
pub const OVERFLOW_THRESHOLD: u32 = 10_000;

/// Table of per-state action weights, grown lazily during self-play.
///
/// States are keyed by the raw cell sequence with no symmetry reduction, so
/// rotated and reflected positions are learned independently. Entries are
/// created on first access with every weight set to [`PRIOR_WEIGHT`] and are
/// never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyTable {
    entries: HashMap<StateKey, WeightVector>,
}

impl PolicyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the state has an entry, creating one with prior weights if not.
    /// Idempotent.
    pub fn ensure_initialized(&mut self, state: &StateKey) {
        self.entries
            .entry(*state)
            .or_insert([PRIOR_WEIGHT; 9]);
    }

    /// Get the weight vector for a state, initializing it if unseen
    pub fn weights(&mut self, state: &StateKey) -> &WeightVector {
        self.ensure_initialized(state);
        &self.entries[state]
    }

    /// Get the weight vector for a state without initializing it
    pub fn weights_if_known(&self, state: &StateKey) -> Option<&WeightVector> {
        self.entries.get(state)
    }

    /// Overwrite a single action weight, initializing the state if unseen.
    ///
    /// Used to zero an action: by legality masking when a placement is
    /// rejected, and by credit assignment on the loser's final move.
    pub fn set_weight(&mut self, state: &StateKey, action: usize, value: u32) {
        self.ensure_initialized(state);
        if let Some(weights) = self.entries.get_mut(state) {
            weights[action] = value;
        }
    }

    /// Add 1 to a single action weight, initializing the state if unseen.
    /// Used by credit assignment to reinforce winning moves.
    pub fn increment_weight(&mut self, state: &StateKey, action: usize) {
        self.ensure_initialized(state);
        if let Some(weights) = self.entries.get_mut(state) {
            weights[action] = weights[action].saturating_add(1);
        }
    }

    /// Sum of all action weights for a state
    pub fn total_weight(&mut self, state: &StateKey) -> u32 {
        self.weights(state).iter().sum()
    }

    /// Halve a state's weights, rounding up.
    ///
    /// Replaces each weight `w` with `(w + 1) / 2`, so a strictly positive
    /// weight never drops to zero and masked actions stay at zero. Keeps
    /// magnitudes bounded over arbitrarily long training runs while
    /// approximately preserving relative proportions.
    pub fn normalize(&mut self, state: &StateKey) {
        if let Some(weights) = self.entries.get_mut(state) {
            for w in weights.iter_mut() {
                *w = (*w + 1) / 2;
            }
        }
    }

    /// Number of states the table has seen
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &WeightVector)> {
        self.entries.iter()
    }

    /// Replace the whole table with the given entries
    pub(crate) fn replace(&mut self, entries: HashMap<StateKey, WeightVector>) {
        self.entries = entries;
    }
}
