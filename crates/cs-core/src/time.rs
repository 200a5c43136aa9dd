//! Simulated time.
//!
//! # Design
//!
//! Time is a dimensionless, non-negative, finite `f64`.  Nothing in the
//! simulator maps it to wall-clock time; the demo labels the axis in minutes
//! purely for presentation.
//!
//! `SimTime` is totally ordered through [`f64::total_cmp`], so it can be
//! sorted and used as a `min()` key.  Values built with [`SimTime::new`] are
//! finite with `-0.0` folded into `0.0`, which keeps `==` and `Ord` in
//! agreement.  The scheduler compares arrival instants against
//! stall-release instants for equality when it admits and assigns in the
//! same step.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An absolute simulated instant.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// `Some` for finite, non-negative `t`.
    #[inline]
    pub fn new(t: f64) -> Option<SimTime> {
        // `+ 0.0` turns `-0.0` into `0.0`.
        (t.is_finite() && t >= 0.0).then_some(SimTime(t + 0.0))
    }

    /// `self + units`, or `None` if the sum is not a finite instant.
    #[inline]
    pub fn checked_add(self, units: f64) -> Option<SimTime> {
        SimTime::new(self.0 + units)
    }

    /// Units elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for SimTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
