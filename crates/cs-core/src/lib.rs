//! `cs-core` — foundational types for the charging-station simulator.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no `cs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`ids`]    | `VehicleId`, `StallId`                          |
//! | [`time`]   | `SimTime`                                       |
//! | [`rng`]    | `SimRng` (seeded, for input generation)         |
//! | [`config`] | `StationConfig`                                 |
//! | [`error`]  | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::StationConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{StallId, VehicleId};
pub use rng::SimRng;
pub use time::SimTime;
