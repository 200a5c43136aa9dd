//! Station observer trait for event logging and data collection.

use cs_core::{SimTime, VehicleId};

use crate::{ResultTable, VehicleRecord};

/// Callbacks invoked by [`Station::run`][crate::Station::run] as the event
/// loop makes progress.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see state read-only; they
/// cannot influence the schedule.
///
/// # Example: counting queue entries
///
/// ```rust,ignore
/// struct Admissions(usize);
///
/// impl StationObserver for Admissions {
///     fn on_admit(&mut self, _time: SimTime, _vehicle: VehicleId) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait StationObserver {
    /// A vehicle moved from the backlog to the back of the waiting queue.
    fn on_admit(&mut self, _time: SimTime, _vehicle: VehicleId) {}

    /// A vehicle left the queue and started charging.  `record` already
    /// carries its start, end and stall.
    fn on_assign(&mut self, _time: SimTime, _record: &VehicleRecord) {}

    /// The clock jumped from `from` to the next event time `to`.
    fn on_advance(&mut self, _from: SimTime, _to: SimTime) {}

    /// Called once after the last vehicle has been assigned.
    fn on_sim_end(&mut self, _final_time: SimTime, _table: &ResultTable) {}
}

/// A [`StationObserver`] that does nothing.
pub struct NoopObserver;

impl StationObserver for NoopObserver {}
