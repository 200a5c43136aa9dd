//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `schedule.csv` — one row per vehicle, input order
//! - `stall_summary.csv` — one row per stall

use std::fs::File;
use std::path::Path;

use csv::Writer;
use cs_core::StallId;
use cs_sim::ResultTable;

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const SCHEDULE_HEADER: [&str; 6] = [
    "id",
    "arrival_time",
    "charging_duration",
    "start_time",
    "end_time",
    "stall_id",
];

pub const STALL_SUMMARY_HEADER: [&str; 3] = ["stall_id", "vehicles_served", "busy_time"];

/// Writes a schedule to two CSV files.
pub struct CsvWriter {
    schedule: Writer<File>,
    stalls:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut schedule = Writer::from_path(dir.join("schedule.csv"))?;
        schedule.write_record(SCHEDULE_HEADER)?;

        let mut stalls = Writer::from_path(dir.join("stall_summary.csv"))?;
        stalls.write_record(STALL_SUMMARY_HEADER)?;

        Ok(Self {
            schedule,
            stalls,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_schedule(&mut self, table: &ResultTable) -> OutputResult<()> {
        for row in table {
            self.schedule.write_record(&[
                row.id.0.to_string(),
                row.arrival_time.0.to_string(),
                row.charging_duration.to_string(),
                row.start_time.0.to_string(),
                row.end_time.0.to_string(),
                row.stall_id.as_signed().to_string(),
            ])?;
        }

        let summary = table.summary();
        for (s, group) in table.by_stall().iter().enumerate() {
            self.stalls.write_record(&[
                s.to_string(),
                group.len().to_string(),
                summary.stall_busy[StallId(s as u32).index()].to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.schedule.flush()?;
        self.stalls.flush()?;
        Ok(())
    }
}
