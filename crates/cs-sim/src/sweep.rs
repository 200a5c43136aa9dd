//! Independent runs over a range of stall counts.
//!
//! Every run builds its own [`Station`][crate::Station]; nothing is shared
//! between runs, so the `parallel` feature only changes which thread each
//! run executes on.  Results are returned in the order of `stall_counts`
//! either way.

use crate::{ResultTable, SimResult, simulate};

/// Simulate the same vehicles once per entry in `stall_counts`.
pub fn sweep_stalls(
    arrivals:     &[f64],
    durations:    &[f64],
    stall_counts: &[usize],
) -> Vec<(usize, SimResult<ResultTable>)> {
    #[cfg(not(feature = "parallel"))]
    {
        stall_counts
            .iter()
            .map(|&n| (n, simulate(arrivals, durations, n)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        stall_counts
            .par_iter()
            .map(|&n| (n, simulate(arrivals, durations, n)))
            .collect()
    }
}
