//! Per-stall availability.

use cs_core::{SimTime, StallId};

/// The `free_at` instant of every stall.
///
/// A stall is occupied at `now` iff `free_at > now`.  All stalls start free
/// at time zero.
#[derive(Debug, Clone)]
pub struct StallPool {
    free_at: Vec<SimTime>,
}

impl StallPool {
    pub fn new(num_stalls: usize) -> Self {
        Self { free_at: vec![SimTime::ZERO; num_stalls] }
    }

    pub fn len(&self) -> usize {
        self.free_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free_at.is_empty()
    }

    #[inline]
    pub fn is_free(&self, stall: StallId, now: SimTime) -> bool {
        self.free_at[stall.index()] <= now
    }

    #[inline]
    pub fn free_at(&self, stall: StallId) -> SimTime {
        self.free_at[stall.index()]
    }

    /// Mark `stall` busy until `until`.
    #[inline]
    pub fn occupy(&mut self, stall: StallId, until: SimTime) {
        self.free_at[stall.index()] = until;
    }

    /// Earliest release strictly after `now`, or `None` if every stall is
    /// already free at `now`.
    pub fn next_release_after(&self, now: SimTime) -> Option<SimTime> {
        self.free_at.iter().copied().filter(|&t| t > now).min()
    }

    /// Number of stalls free at `now`.
    pub fn free_count(&self, now: SimTime) -> usize {
        self.free_at.iter().filter(|&&t| t <= now).count()
    }
}
