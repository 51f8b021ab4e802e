//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for one engine instance.
///
/// The defaults reproduce the reference behavior; tests lower
/// `max_stack_passes` to exercise the overflow path cheaply.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum rule-application passes per stack before the engine reports
    /// a convergence overflow and moves on to the next stack.
    pub max_stack_passes: usize,

    /// Duration in seconds of the visual transition started for each moved
    /// instance.
    pub move_duration: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_stack_passes: 20,
            move_duration: 0.18,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-stack pass cap.
    #[must_use]
    pub fn with_max_stack_passes(mut self, passes: usize) -> Self {
        self.max_stack_passes = passes;
        self
    }

    /// Set the visual transition duration.
    #[must_use]
    pub fn with_move_duration(mut self, seconds: f32) -> Self {
        self.move_duration = seconds;
        self
    }
}
