//! The `Station` struct and its event loop.

use std::collections::VecDeque;

use cs_core::{SimTime, StallId, VehicleId};
use tracing::{debug, trace};

use crate::{Backlog, ResultTable, SimError, SimResult, StallPool, StationObserver};

/// The charging-station simulator.
///
/// `Station` owns all state for exactly one run and drives the three-phase
/// event loop until every vehicle has a stall:
///
/// 1. **Admit**: move every backlog vehicle with `arrival <= now` to the back
///    of the waiting queue, in admission order.
/// 2. **Assign**: walk stalls in ascending index; each stall free at `now`
///    takes the front of the queue.  Several vehicles may start at the same
///    instant.
/// 3. **Advance**: jump `now` to the earliest arrival or stall release
///    strictly after it.
///
/// Vehicles still charging when the queue empties do not keep the loop
/// alive; the engine tracks assignment, not completion.
///
/// Create via [`StationBuilder`][crate::StationBuilder].
pub struct Station {
    pub(crate) clock:   SimTime,
    pub(crate) backlog: Backlog,
    pub(crate) waiting: VecDeque<VehicleId>,
    pub(crate) stalls:  StallPool,
    pub(crate) table:   ResultTable,
}

impl Station {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run to completion and return the result table.
    ///
    /// Consumes the station: state lives for one run only.
    pub fn run<O: StationObserver>(mut self, observer: &mut O) -> SimResult<ResultTable> {
        while self.step(observer)? {}

        observer.on_sim_end(self.clock, &self.table);
        debug!(
            vehicles   = self.table.len(),
            stalls     = self.stalls.len(),
            final_time = self.clock.0,
            "simulation complete"
        );
        Ok(self.table)
    }

    /// Perform one admit / assign / advance iteration.
    ///
    /// Returns `Ok(false)` once the backlog is exhausted and the queue is
    /// empty; the clock is then left at the instant of the last assignment.
    pub fn step<O: StationObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        if self.is_done() {
            return Ok(false);
        }
        self.admit(observer);
        self.assign(observer)?;
        if self.is_done() {
            return Ok(false);
        }
        self.advance(observer)?;
        Ok(true)
    }

    /// Current simulated time.
    pub fn now(&self) -> SimTime {
        self.clock
    }

    /// Vehicles admitted but not yet assigned.
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Vehicles that have not arrived yet.
    pub fn pending_arrivals(&self) -> usize {
        self.backlog.remaining()
    }

    pub fn num_stalls(&self) -> usize {
        self.stalls.len()
    }

    /// Instant at which `stall` becomes free.
    pub fn stall_free_at(&self, stall: StallId) -> SimTime {
        self.stalls.free_at(stall)
    }

    pub fn is_done(&self) -> bool {
        self.backlog.is_exhausted() && self.waiting.is_empty()
    }

    /// The table as filled in so far.
    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn admit<O: StationObserver>(&mut self, observer: &mut O) {
        let now = self.clock;
        while let Some(vehicle) = self.backlog.pop_arrived(now) {
            trace!(time = now.0, vehicle = vehicle.0, "admit");
            self.waiting.push_back(vehicle);
            observer.on_admit(now, vehicle);
        }
    }

    fn assign<O: StationObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock;
        for s in 0..self.stalls.len() {
            if self.waiting.is_empty() {
                break;
            }
            let stall = StallId(s as u32);
            if !self.stalls.is_free(stall, now) {
                continue;
            }
            let Some(&vehicle) = self.waiting.front() else {
                break;
            };
            // Leaves the vehicle queued if its end time overflows.
            let record = self.table.assign(vehicle, stall, now)?;
            self.waiting.pop_front();
            self.stalls.occupy(stall, record.end_time);
            trace!(
                time    = now.0,
                vehicle = vehicle.0,
                stall   = stall.0,
                end     = record.end_time.0,
                "assign"
            );
            observer.on_assign(now, record);
        }
        Ok(())
    }

    /// Jump to the next event time.
    ///
    /// Candidates are the next backlog arrival and every stall release, each
    /// only if strictly after `now`.  No candidate with vehicles still
    /// waiting is a bookkeeping bug and surfaces as
    /// [`SimError::Consistency`].
    pub(crate) fn advance<O: StationObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock;
        let next = self
            .backlog
            .next_arrival()
            .filter(|&t| t > now)
            .into_iter()
            .chain(self.stalls.next_release_after(now))
            .min();

        let Some(next) = next else {
            if self.waiting.is_empty() {
                return Ok(());
            }
            return Err(SimError::Consistency { time: now, waiting: self.waiting.len() });
        };

        trace!(from = now.0, to = next.0, waiting = self.waiting.len(), "advance");
        observer.on_advance(now, next);
        self.clock = next;
        Ok(())
    }
}
