//! `Backlog` — vehicles that have not yet arrived, in admission order.
//!
//! Admission order is arrival time ascending with ties kept in input order,
//! built once with a stable sort.  A cursor walks it forward; nothing is
//! ever re-inserted, so admission is O(1) amortised per vehicle.

use cs_core::{SimTime, VehicleId};

#[derive(Debug, Clone, Default)]
pub struct Backlog {
    order:  Vec<(SimTime, VehicleId)>,
    cursor: usize,
}

impl Backlog {
    /// Build the admission order from arrival times indexed by `VehicleId`.
    pub fn new(arrivals: &[SimTime]) -> Self {
        let mut order: Vec<(SimTime, VehicleId)> = arrivals
            .iter()
            .enumerate()
            .map(|(i, &t)| (t, VehicleId(i as u32)))
            .collect();
        // Stable: equal arrivals keep ascending id order.
        order.sort_by_key(|&(t, _)| t);
        Self { order, cursor: 0 }
    }

    /// Pop the next vehicle if it has arrived by `now`.
    pub fn pop_arrived(&mut self, now: SimTime) -> Option<VehicleId> {
        let &(arrival, vehicle) = self.order.get(self.cursor)?;
        if arrival > now {
            return None;
        }
        self.cursor += 1;
        Some(vehicle)
    }

    /// Arrival time of the next vehicle still in the backlog.
    pub fn next_arrival(&self) -> Option<SimTime> {
        self.order.get(self.cursor).map(|&(t, _)| t)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Vehicles not yet admitted.
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// The full admission order, including already-admitted vehicles.
    pub fn order(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.order.iter().map(|&(_, v)| v)
    }
}
