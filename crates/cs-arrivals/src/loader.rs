//! CSV arrival loader.
//!
//! # CSV format
//!
//! One row per vehicle; the row position (0-based, header excluded) becomes
//! the vehicle id.
//!
//! ```csv
//! arrival_time,charging_duration
//! 0,45
//! 3.5,20
//! 3.5,61.25
//! ```
//!
//! Values are read as `f64` and not range-checked here, so a negative, zero,
//! or non-finite entry is reported by the scheduler's validation with the
//! offending vehicle id rather than as an opaque parse failure.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ArrivalError, ArrivalResult, Arrivals};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrivalRecord {
    arrival_time:      f64,
    charging_duration: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load arrivals from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> ArrivalResult<Arrivals> {
    let file = std::fs::File::open(path).map_err(ArrivalError::Io)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
pub fn load_arrivals_reader<R: Read>(reader: R) -> ArrivalResult<Arrivals> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut arrivals = Arrivals::new();

    for (row, result) in csv_reader.deserialize::<ArrivalRecord>().enumerate() {
        let record = result.map_err(|e| ArrivalError::Parse(format!("row {row}: {e}")))?;
        arrivals.push(record.arrival_time, record.charging_duration);
    }

    Ok(arrivals)
}
