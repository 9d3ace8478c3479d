//! Training session: repeated self-play episodes with credit assignment

use serde::{Deserialize, Serialize};

use super::{episode::run_episode, observers::Observer};
use crate::policy::{
    ActionSelector, EXPLORATION_RATE, PolicyTable, penalize_final_move, reinforce_trajectory,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes to run
    pub episodes: usize,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Uniform exploration probability
    pub epsilon: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 500,
            seed: None,
            epsilon: EXPLORATION_RATE,
        }
    }
}

/// Result of a training run, counted from X's perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Episodes won by X (including exhausted episodes credited to X)
    pub wins: usize,

    /// Episodes won by O (including exhausted episodes credited to O)
    pub losses: usize,

    /// Drawn episodes
    pub draws: usize,

    /// Win rate
    pub win_rate: f64,

    /// Loss rate
    pub loss_rate: f64,

    /// Draw rate
    pub draw_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_episodes: usize, wins: usize, losses: usize, draws: usize) -> Self {
        let rate = |n: usize| {
            if total_episodes > 0 {
                n as f64 / total_episodes as f64
            } else {
                0.0
            }
        };

        Self {
            total_episodes,
            wins,
            losses,
            draws,
            win_rate: rate(wins),
            loss_rate: rate(losses),
            draw_rate: rate(draws),
        }
    }

    /// Save result to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Runs self-play episodes against a policy table and applies credit
/// assignment after each one.
pub struct TrainingSession {
    config: TrainingConfig,
    selector: ActionSelector,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingSession {
    /// Create a new session
    pub fn new(config: TrainingConfig) -> Self {
        let selector = ActionSelector::with_epsilon(config.seed, config.epsilon);
        Self {
            config,
            selector,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the session
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the configured number of episodes, mutating `table` in place.
    ///
    /// The table is updated by masking during play and by credit assignment
    /// after each episode; nothing is persisted here.
    pub fn run(&mut self, table: &mut PolicyTable) -> crate::Result<TrainingResult> {
        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for episode_num in 0..self.config.episodes {
            let record = run_episode(table, &mut self.selector);

            match record.effective_winner() {
                Some(winner) => {
                    reinforce_trajectory(table, record.trajectory(winner));
                    penalize_final_move(table, record.trajectory(winner.opponent()));
                    match winner {
                        crate::tictactoe::Player::X => wins += 1,
                        crate::tictactoe::Player::O => losses += 1,
                    }
                }
                None => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_episode_end(episode_num, &record.end)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(
            self.config.episodes,
            wins,
            losses,
            draws,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::StateKey;

    #[test]
    fn test_counts_sum_to_total() {
        let config = TrainingConfig {
            episodes: 50,
            seed: Some(42),
            ..Default::default()
        };

        let mut table = PolicyTable::new();
        let mut session = TrainingSession::new(config);
        let result = session.run(&mut table).unwrap();

        assert_eq!(result.total_episodes, 50);
        assert_eq!(result.wins + result.losses + result.draws, 50);
    }

    #[test]
    fn test_training_populates_the_table() {
        let config = TrainingConfig {
            episodes: 20,
            seed: Some(7),
            ..Default::default()
        };

        let mut table = PolicyTable::new();
        TrainingSession::new(config).run(&mut table).unwrap();

        assert!(!table.is_empty());
        // The opening position is visited every episode
        let opening = StateKey::parse(".........").unwrap();
        assert!(table.weights_if_known(&opening).is_some());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = TrainingConfig {
            episodes: 30,
            seed: Some(123),
            ..Default::default()
        };

        let mut table_a = PolicyTable::new();
        let mut table_b = PolicyTable::new();
        let result_a = TrainingSession::new(config.clone())
            .run(&mut table_a)
            .unwrap();
        let result_b = TrainingSession::new(config).run(&mut table_b).unwrap();

        assert_eq!(table_a, table_b);
        assert_eq!(result_a.wins, result_b.wins);
        assert_eq!(result_a.draws, result_b.draws);
    }

    #[test]
    fn test_zero_episodes_is_a_no_op() {
        let config = TrainingConfig {
            episodes: 0,
            seed: Some(1),
            ..Default::default()
        };

        let mut table = PolicyTable::new();
        let result = TrainingSession::new(config).run(&mut table).unwrap();

        assert_eq!(result.total_episodes, 0);
        assert_eq!(result.win_rate, 0.0);
        assert!(table.is_empty());
    }
}
