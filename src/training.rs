//! Self-play training loop

pub mod episode;
pub mod observers;
pub mod session;

pub use episode::{EpisodeEnd, EpisodeRecord, run_episode};
pub use observers::{Observer, ProgressObserver};
pub use session::{TrainingConfig, TrainingResult, TrainingSession};
