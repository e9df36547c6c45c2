use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

pub const DEFAULT_LOG_EVERY: usize = 1000;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`      — total number of full passes over the training data
/// - `log_every`   — emit a debug log line every this many epochs (0 disables)
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. A dropped receiver does not stop
///                   training.
pub struct TrainConfig {
    pub epochs: usize,
    pub log_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            log_every: DEFAULT_LOG_EVERY,
            progress_tx: None,
        }
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn with_progress(mut self, progress_tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(progress_tx);
        self
    }
}
