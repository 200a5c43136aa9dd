//! Fluent builder for constructing a [`Station`].

use std::collections::VecDeque;

use cs_core::{SimTime, VehicleId};

use crate::{Backlog, InvalidInput, ResultTable, SimResult, StallPool, Station};

/// Fluent builder for [`Station`].
///
/// All input validation happens in [`build`][Self::build], before any
/// simulation state is created.  Checks run in this order and the first
/// failure is returned:
///
/// 1. at least one stall;
/// 2. arrival and duration columns have equal length;
/// 3. per vehicle, in id order: arrival finite and `>= 0`, duration finite
///    and `> 0`.
///
/// # Example
///
/// ```rust,ignore
/// let table = StationBuilder::new(5)
///     .vehicles(&arrivals, &durations)
///     .build()?
///     .run(&mut NoopObserver)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct StationBuilder {
    num_stalls: usize,
    arrivals:   Vec<f64>,
    durations:  Vec<f64>,
}

impl StationBuilder {
    pub fn new(num_stalls: usize) -> Self {
        Self {
            num_stalls,
            arrivals:  Vec::new(),
            durations: Vec::new(),
        }
    }

    /// Supply the arrival and duration columns.  Vehicle `i` is
    /// `(arrivals[i], durations[i])`.
    pub fn vehicles(mut self, arrivals: &[f64], durations: &[f64]) -> Self {
        self.arrivals = arrivals.to_vec();
        self.durations = durations.to_vec();
        self
    }

    /// Append a single vehicle; its id is the number of vehicles added before it.
    pub fn vehicle(mut self, arrival: f64, duration: f64) -> Self {
        self.arrivals.push(arrival);
        self.durations.push(duration);
        self
    }

    /// Validate inputs and return a ready-to-run [`Station`].
    pub fn build(self) -> SimResult<Station> {
        let (arrivals, durations) = self.validate()?;

        Ok(Station {
            clock:   SimTime::ZERO,
            backlog: Backlog::new(&arrivals),
            waiting: VecDeque::with_capacity(arrivals.len()),
            stalls:  StallPool::new(self.num_stalls),
            table:   ResultTable::new(&arrivals, &durations, self.num_stalls),
        })
    }

    fn validate(&self) -> Result<(Vec<SimTime>, Vec<f64>), InvalidInput> {
        if self.num_stalls == 0 {
            return Err(InvalidInput::NoStalls);
        }
        if u32::try_from(self.num_stalls).is_err() {
            return Err(InvalidInput::TooManyStalls { count: self.num_stalls });
        }
        if self.arrivals.len() != self.durations.len() {
            return Err(InvalidInput::LengthMismatch {
                arrivals:  self.arrivals.len(),
                durations: self.durations.len(),
            });
        }
        // `u32::MAX` is reserved for `VehicleId::INVALID`.
        if self.arrivals.len() >= u32::MAX as usize {
            return Err(InvalidInput::TooManyVehicles { count: self.arrivals.len() });
        }

        let mut arrivals = Vec::with_capacity(self.arrivals.len());
        let mut durations = Vec::with_capacity(self.durations.len());
        for (i, (&arrival, &duration)) in self.arrivals.iter().zip(&self.durations).enumerate() {
            let vehicle = VehicleId(i as u32);
            if !arrival.is_finite() {
                return Err(InvalidInput::NonFiniteArrival { vehicle, arrival });
            }
            let Some(arrival) = SimTime::new(arrival) else {
                return Err(InvalidInput::NegativeArrival { vehicle, arrival });
            };
            if !duration.is_finite() {
                return Err(InvalidInput::NonFiniteDuration { vehicle, duration });
            }
            if duration <= 0.0 {
                return Err(InvalidInput::NonPositiveDuration { vehicle, duration });
            }
            arrivals.push(arrival);
            durations.push(duration);
        }
        Ok((arrivals, durations))
    }
}
