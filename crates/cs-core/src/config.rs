//! Station and input-generation configuration.

use crate::{CoreError, CoreResult};

/// Everything needed to generate a synthetic run and simulate it.
///
/// The defaults reproduce the reference scenario: 30 vehicles arriving over
/// `[0, 180)`, charging for `[20, 80)` units each, served by 5 stalls.
/// Typically loaded from JSON by the demo (with the `serde` feature) and then
/// overridden field by field from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StationConfig {
    /// Number of identical charging stalls.  Must be at least 1.
    pub num_stalls: usize,

    /// Number of vehicles to generate.
    pub vehicle_count: usize,

    /// Master RNG seed.  The same seed always produces identical inputs.
    pub seed: u64,

    /// Arrivals are drawn uniformly from `[window_start, window_end)`.
    pub window_start: i64,
    pub window_end:   i64,

    /// Durations are drawn uniformly from `[min_duration, max_duration)`.
    pub min_duration: i64,
    pub max_duration: i64,

    /// Sort generated arrival times ascending before assigning ids.
    pub sort_arrivals: bool,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            num_stalls:    5,
            vehicle_count: 30,
            seed:          13,
            window_start:  0,
            window_end:    180,
            min_duration:  20,
            max_duration:  80,
            sort_arrivals: true,
        }
    }
}

impl StationConfig {
    /// Check that the config describes a runnable scenario.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_stalls == 0 {
            return Err(CoreError::Config("num_stalls must be at least 1".into()));
        }
        if self.window_start < 0 {
            return Err(CoreError::Config(format!(
                "window_start {} is negative", self.window_start
            )));
        }
        if self.window_end <= self.window_start {
            return Err(CoreError::Config(format!(
                "arrival window [{}, {}) is empty", self.window_start, self.window_end
            )));
        }
        if self.min_duration <= 0 {
            return Err(CoreError::Config(format!(
                "min_duration {} must be positive", self.min_duration
            )));
        }
        if self.max_duration <= self.min_duration {
            return Err(CoreError::Config(format!(
                "duration range [{}, {}) is empty", self.min_duration, self.max_duration
            )));
        }
        Ok(())
    }
}
