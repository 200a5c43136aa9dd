//! `cs-output` — everything that reads a finished schedule.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`csv`]      | `CsvWriter` → `schedule.csv`, `stall_summary.csv`         |
//! | [`observer`] | `EventLogObserver` → per-event CSV log during a run       |
//! | [`render`]   | `SvgRenderer` → stall occupancy + queue/charge timelines  |
//! | [`writer`]   | `OutputWriter` trait                                      |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                          |
//!
//! Nothing here mutates a `ResultTable` or feeds back into the scheduler.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cs_output::{CsvWriter, OutputWriter, write_svg};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_schedule(&table)?;
//! writer.finish()?;
//! write_svg(&table, Path::new("./output/schedule.svg"))?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use render::{SvgRenderer, render_svg, write_svg};
pub use writer::OutputWriter;
