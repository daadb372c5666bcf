//! Randomized poll schedule

use std::time::Duration;

use rand::Rng;
use tracing::debug;

/// Sleeps a uniformly random whole number of seconds in
/// `[base, base + jitter]` between polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    base_seconds: u64,
    jitter_seconds: u64,
}

impl PollSchedule {
    pub fn new(base_seconds: u64, jitter_seconds: u64) -> Self {
        Self {
            base_seconds,
            jitter_seconds,
        }
    }

    pub fn base_seconds(&self) -> u64 {
        self.base_seconds
    }

    pub fn jitter_seconds(&self) -> u64 {
        self.jitter_seconds
    }

    pub fn next_delay(&self) -> Duration {
        self.next_delay_with(&mut rand::thread_rng())
    }

    pub fn next_delay_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let extra = rng.gen_range(0..=self.jitter_seconds);
        Duration::from_secs(self.base_seconds.saturating_add(extra))
    }

    /// Sleep until the next poll and return how long that was
    pub async fn wait(&self) -> Duration {
        let delay = self.next_delay();
        debug!(
            delay_secs = delay.as_secs(),
            "Next poll in {}s",
            delay.as_secs()
        );
        tokio::time::sleep(delay).await;
        delay
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::new(30, 10)
    }
}
