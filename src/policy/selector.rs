//! Epsilon-greedy categorical action sampling over the policy table

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::table::{OVERFLOW_THRESHOLD, PolicyTable};
use crate::tictactoe::StateKey;

/// Probability of picking a uniformly random cell instead of sampling by weight
pub const EXPLORATION_RATE: f64 = 0.05;

/// Samples actions from the policy table.
///
/// Most picks are categorical draws proportional to the stored weights. A
/// small fixed fraction are uniform over all nine cells regardless of weight,
/// which keeps every raw index under occasional test even after its weight
/// has been masked to zero.
#[derive(Debug)]
pub struct ActionSelector {
    rng: StdRng,
    epsilon: f64,
}

impl ActionSelector {
    /// Create a selector with the default exploration rate
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_epsilon(seed, EXPLORATION_RATE)
    }

    /// Create a selector with a custom exploration rate
    pub fn with_epsilon(seed: Option<u64>, epsilon: f64) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        ActionSelector { rng, epsilon }
    }

    /// Sample an action for the given state.
    ///
    /// Returns `None` when the state's total weight is zero, meaning every
    /// index has been masked and nothing remains to sample.
    ///
    /// The exploratory branch may return an index whose weight is zero; the
    /// caller is expected to attempt the placement anyway and let masking
    /// handle the rejection. The weighted branch can only stop on a strictly
    /// positive weight, so it never returns a masked index.
    pub fn choose(&mut self, table: &mut PolicyTable, state: &StateKey) -> Option<usize> {
        table.ensure_initialized(state);
        let weights = *table.weights(state);
        let total: u32 = weights.iter().sum();

        if total == 0 {
            return None;
        }

        if self.rng.random::<f64>() < self.epsilon {
            return Some(self.rng.random_range(0..9));
        }

        let mut remainder = self.rng.random_range(0..total);
        for (index, &weight) in weights.iter().enumerate() {
            if remainder < weight {
                // Halve runaway weights before this state is sampled again
                if total > OVERFLOW_THRESHOLD {
                    table.normalize(state);
                }
                return Some(index);
            }
            remainder -= weight;
        }

        // Unreachable: remainder < total and the weights sum to total
        None
    }
}
