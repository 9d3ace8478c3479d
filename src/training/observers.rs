//! Observer pattern for training sessions
//!
//! Observers allow composable progress reporting without coupling the
//! training loop to a specific output format.

use indicatif::{ProgressBar, ProgressStyle};

use super::episode::EpisodeEnd;
use crate::{Result, tictactoe::Player};

/// Receives notifications while a training session runs
pub trait Observer {
    /// Called once before the first episode
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()>;

    /// Called after each episode completes
    fn on_episode_end(&mut self, episode_num: usize, end: &EpisodeEnd) -> Result<()>;

    /// Called once after the last episode
    fn on_training_end(&mut self) -> Result<()>;
}

/// Progress bar observer showing live win/loss/draw counts
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    losses: usize,
    draws: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    fn message(&self) -> String {
        format!("{} L:{} D:{}", self.wins, self.losses, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode_num: usize, end: &EpisodeEnd) -> Result<()> {
        match end {
            EpisodeEnd::Win(Player::X) => self.wins += 1,
            EpisodeEnd::Win(Player::O) => self.losses += 1,
            EpisodeEnd::Draw => self.draws += 1,
            // Counted where credit assignment lands it; shown as neither here
            EpisodeEnd::Exhausted => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position((episode_num + 1) as u64);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}
