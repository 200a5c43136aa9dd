//! `cs-sim` — event-driven scheduler for a multi-stall charging station.
//!
//! # Event loop
//!
//! ```text
//! now = 0
//! while backlog not exhausted or queue not empty:
//!   ① Admit:   backlog vehicles with arrival <= now join the queue
//!               (arrival order, ties by id).
//!   ② Assign:  for stall in 0..num_stalls: if free_at <= now and the
//!               queue is non-empty, pop the front and start charging.
//!   ③ Advance: now = min(next arrival, stall free_at > now).
//! ```
//!
//! The clock only visits arrival and release instants, so a run costs
//! O(n log n) for the admission sort plus O(num_stalls) per event.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`sweep_stalls`] runs on Rayon's thread pool.          |
//! | `serde`    | `Serialize`/`Deserialize` on the result types.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cs_sim::simulate;
//!
//! let table = simulate(&[0.0, 1.0], &[10.0, 0.5], 1)?;
//! assert_eq!(table.rows()[1].start_time.0, 10.0);
//! ```

pub mod backlog;
pub mod builder;
pub mod error;
pub mod observer;
pub mod stalls;
pub mod station;
pub mod sweep;
pub mod table;


pub use backlog::Backlog;
pub use builder::StationBuilder;
pub use error::{InvalidInput, SimError, SimResult};
pub use observer::{NoopObserver, StationObserver};
pub use stalls::StallPool;
pub use station::Station;
pub use sweep::sweep_stalls;
pub use table::{ResultTable, TableSummary, VehicleRecord};

/// Simulate `arrivals.len()` vehicles on `num_stalls` stalls.
///
/// Pure and deterministic: identical inputs always give identical tables.
/// Rows come back in input order.
pub fn simulate(arrivals: &[f64], durations: &[f64], num_stalls: usize) -> SimResult<ResultTable> {
    StationBuilder::new(num_stalls)
        .vehicles(arrivals, durations)
        .build()?
        .run(&mut NoopObserver)
}
