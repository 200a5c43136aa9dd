//! `cs-arrivals` — where the vehicles come from.
//!
//! The scheduler consumes two equal-length columns, arrival times and
//! charging durations.  This crate produces them, either synthetically or
//! from a file.
//!
//! # Crate layout
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`arrivals`]  | `Arrivals` columnar input set                   |
//! | [`generator`] | `generate_uniform`, `generate_with`             |
//! | [`loader`]    | `load_arrivals_csv`, `load_arrivals_reader`     |
//! | [`error`]     | `ArrivalError`, `ArrivalResult<T>`              |

pub mod arrivals;
pub mod error;
pub mod generator;
pub mod loader;

#[cfg(test)]
mod tests;

pub use arrivals::Arrivals;
pub use error::{ArrivalError, ArrivalResult};
pub use generator::{generate_uniform, generate_with};
pub use loader::{load_arrivals_csv, load_arrivals_reader};
