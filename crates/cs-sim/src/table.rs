//! The per-vehicle result table.
//!
//! One [`VehicleRecord`] per vehicle, stored in original input order so that
//! `rows()[i].id == VehicleId(i)`.  The table is the only thing that outlives
//! a run; renderers and writers read it and never write back.

use cs_core::{SimTime, StallId, VehicleId};

use crate::{SimError, SimResult};

// ── VehicleRecord ─────────────────────────────────────────────────────────────

/// Timing record for one vehicle.
///
/// `start_time`, `end_time` and `stall_id` are written exactly once, together,
/// when the vehicle is assigned.  Before that they hold `0`, `0` and
/// `StallId::INVALID`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleRecord {
    pub id:                VehicleId,
    pub arrival_time:      SimTime,
    pub charging_duration: f64,
    pub start_time:        SimTime,
    pub end_time:          SimTime,
    pub stall_id:          StallId,
}

impl VehicleRecord {
    pub fn unassigned(id: VehicleId, arrival_time: SimTime, charging_duration: f64) -> Self {
        Self {
            id,
            arrival_time,
            charging_duration,
            start_time: SimTime::ZERO,
            end_time:   SimTime::ZERO,
            stall_id:   StallId::INVALID,
        }
    }

    #[inline]
    pub fn is_served(&self) -> bool {
        self.stall_id.is_valid()
    }

    /// Time spent queuing before charging started; `0` if not yet served.
    #[inline]
    pub fn wait_time(&self) -> f64 {
        if self.is_served() {
            self.start_time.since(self.arrival_time)
        } else {
            0.0
        }
    }
}

// ── TableSummary ──────────────────────────────────────────────────────────────

/// Aggregate queueing statistics over a finished table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub vehicles:   usize,
    pub served:     usize,
    /// Vehicles whose wait time was non-zero.
    pub waited:     usize,
    /// Latest `end_time` over served vehicles.
    pub makespan:   SimTime,
    pub total_wait: f64,
    pub max_wait:   f64,
    pub mean_wait:  f64,
    /// Total charging time delivered by each stall, indexed by `StallId`.
    pub stall_busy: Vec<f64>,
}

impl TableSummary {
    /// Fraction of `[0, makespan)` that `stall` spent charging.
    pub fn utilization(&self, stall: StallId) -> f64 {
        if self.makespan == SimTime::ZERO {
            return 0.0;
        }
        self.stall_busy.get(stall.index()).copied().unwrap_or(0.0) / self.makespan.0
    }
}

// ── ResultTable ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultTable {
    rows:       Vec<VehicleRecord>,
    num_stalls: usize,
}

impl ResultTable {
    /// A table with every vehicle unassigned.
    pub(crate) fn new(arrivals: &[SimTime], durations: &[f64], num_stalls: usize) -> Self {
        let rows = arrivals
            .iter()
            .zip(durations)
            .enumerate()
            .map(|(i, (&a, &d))| VehicleRecord::unassigned(VehicleId(i as u32), a, d))
            .collect();
        Self { rows, num_stalls }
    }

    /// Record the assignment of `vehicle` to `stall` starting at `start`.
    ///
    /// On `TimeOverflow` the row is left untouched.
    pub(crate) fn assign(
        &mut self,
        vehicle: VehicleId,
        stall:   StallId,
        start:   SimTime,
    ) -> SimResult<&VehicleRecord> {
        let row = &mut self.rows[vehicle.index()];
        debug_assert!(!row.is_served(), "{vehicle} assigned twice");
        let end = start
            .checked_add(row.charging_duration)
            .ok_or(SimError::TimeOverflow { vehicle })?;
        row.start_time = start;
        row.end_time = end;
        row.stall_id = stall;
        Ok(&*row)
    }

    pub fn rows(&self) -> &[VehicleRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VehicleRecord> {
        self.rows.iter()
    }

    pub fn get(&self, id: VehicleId) -> Option<&VehicleRecord> {
        self.rows.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn num_stalls(&self) -> usize {
        self.num_stalls
    }

    /// `true` once every vehicle has a stall.
    pub fn all_served(&self) -> bool {
        self.rows.iter().all(VehicleRecord::is_served)
    }

    /// Records served by each stall, ordered by start time within a stall.
    ///
    /// The outer `Vec` is indexed by `StallId` and always has `num_stalls`
    /// entries; unserved vehicles appear nowhere.
    pub fn by_stall(&self) -> Vec<Vec<&VehicleRecord>> {
        let mut groups: Vec<Vec<&VehicleRecord>> = vec![Vec::new(); self.num_stalls];
        for row in self.rows.iter().filter(|r| r.is_served()) {
            if let Some(group) = groups.get_mut(row.stall_id.index()) {
                group.push(row);
            }
        }
        for group in &mut groups {
            group.sort_by_key(|r| (r.start_time, r.id));
        }
        groups
    }

    /// `[start, end)` intervals served by `stall`, ordered by start time.
    pub fn stall_intervals(&self, stall: StallId) -> Vec<(SimTime, SimTime)> {
        let mut intervals: Vec<(SimTime, SimTime)> = self
            .rows
            .iter()
            .filter(|r| r.stall_id == stall)
            .map(|r| (r.start_time, r.end_time))
            .collect();
        intervals.sort_unstable();
        intervals
    }

    pub fn summary(&self) -> TableSummary {
        let mut stall_busy = vec![0.0; self.num_stalls];
        let mut served = 0;
        let mut waited = 0;
        let mut makespan = SimTime::ZERO;
        let mut total_wait = 0.0;
        let mut max_wait: f64 = 0.0;

        for row in self.rows.iter().filter(|r| r.is_served()) {
            served += 1;
            let wait = row.wait_time();
            if wait > 0.0 {
                waited += 1;
            }
            total_wait += wait;
            max_wait = max_wait.max(wait);
            makespan = makespan.max(row.end_time);
            if let Some(busy) = stall_busy.get_mut(row.stall_id.index()) {
                *busy += row.charging_duration;
            }
        }

        TableSummary {
            vehicles: self.rows.len(),
            served,
            waited,
            makespan,
            total_wait,
            max_wait,
            mean_wait: if served == 0 { 0.0 } else { total_wait / served as f64 },
            stall_busy,
        }
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a VehicleRecord;
    type IntoIter = std::slice::Iter<'a, VehicleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
