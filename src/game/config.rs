use std::time::Duration;

use crate::tower::{validate_disk_count, ConfigurationError, MAX_DISKS};

use super::pacing::Pacing;

pub const DEFAULT_DISKS: i64 = 4;

/// Pause used by `Pacing::Delay` unless overridden.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// How long the starting position stays on screen before the first move.
pub const INITIAL_HOLD: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub disk_count: usize,
    pub pacing: Pacing,
    pub delay: Duration,
    pub initial_hold: Duration,
}

impl SolverConfig {
    /// Validates `requested` against the smaller of the store's limit and
    /// what the renderer can draw.
    pub fn new(
        requested: i64,
        pacing: Pacing,
        renderer_capacity: usize,
    ) -> Result<Self, ConfigurationError> {
        let max = MAX_DISKS.min(renderer_capacity);
        let disk_count = validate_disk_count(requested, max)?;
        Ok(Self {
            disk_count,
            pacing,
            delay: DEFAULT_DELAY,
            initial_hold: INITIAL_HOLD,
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_initial_hold(mut self, initial_hold: Duration) -> Self {
        self.initial_hold = initial_hold;
        self
    }
}
