use cs_core::{SimTime, VehicleId};
use thiserror::Error;

/// Malformed scheduler inputs.  Reported before any simulation state exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("arrival count {arrivals} does not match duration count {durations}")]
    LengthMismatch {
        arrivals:  usize,
        durations: usize,
    },

    #[error("station needs at least one stall")]
    NoStalls,

    #[error("{count} stalls exceeds the supported maximum")]
    TooManyStalls { count: usize },

    #[error("{count} vehicles exceeds the supported maximum")]
    TooManyVehicles { count: usize },

    #[error("{vehicle} has non-finite arrival time {arrival}")]
    NonFiniteArrival {
        vehicle: VehicleId,
        arrival: f64,
    },

    #[error("{vehicle} has negative arrival time {arrival}")]
    NegativeArrival {
        vehicle: VehicleId,
        arrival: f64,
    },

    #[error("{vehicle} has non-finite charging duration {duration}")]
    NonFiniteDuration {
        vehicle:  VehicleId,
        duration: f64,
    },

    #[error("{vehicle} has non-positive charging duration {duration}")]
    NonPositiveDuration {
        vehicle:  VehicleId,
        duration: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Vehicles are waiting but neither an arrival nor a stall release lies
    /// ahead.  Indicates broken bookkeeping, never a legitimate state.
    #[error("consistency failure at {time}: {waiting} vehicle(s) waiting with no future event")]
    Consistency {
        time:    SimTime,
        waiting: usize,
    },

    #[error("end time of {vehicle} is not a finite instant")]
    TimeOverflow { vehicle: VehicleId },
}

pub type SimResult<T> = Result<T, SimError>;
