//! The columnar input set handed to the scheduler.

use cs_core::VehicleId;

/// Arrival times and charging durations, one entry per vehicle.
///
/// Stored as two parallel columns because that is exactly the shape the
/// scheduler's entry point takes.  Values are unvalidated here; the scheduler
/// rejects negative or non-finite arrivals and non-positive durations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrivals {
    pub arrival_times: Vec<f64>,
    pub durations:     Vec<f64>,
}

impl Arrivals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            arrival_times: Vec::with_capacity(n),
            durations:     Vec::with_capacity(n),
        }
    }

    /// Append a vehicle; its id is its position.
    pub fn push(&mut self, arrival_time: f64, duration: f64) {
        self.arrival_times.push(arrival_time);
        self.durations.push(duration);
    }

    pub fn len(&self) -> usize {
        self.arrival_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival_times.is_empty()
    }

    /// `(id, arrival_time, duration)` in input order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, f64, f64)> + '_ {
        self.arrival_times
            .iter()
            .zip(&self.durations)
            .enumerate()
            .map(|(i, (&a, &d))| (VehicleId(i as u32), a, d))
    }
}
