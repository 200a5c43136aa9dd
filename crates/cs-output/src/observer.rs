//! `EventLogObserver<W>` — streams scheduler events to a CSV log.

use std::io::Write;

use csv::Writer;
use cs_core::{SimTime, VehicleId};
use cs_sim::{ResultTable, StationObserver, VehicleRecord};

use crate::{OutputError, OutputResult};

/// A [`StationObserver`] that writes one CSV row per admission, assignment,
/// and clock advance:
///
/// ```csv
/// time,event,vehicle_id,stall_id
/// 0,admit,0,
/// 0,assign,0,0
/// 1,advance,,
/// ```
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `station.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct EventLogObserver<W: Write> {
    writer:     Writer<W>,
    events:     u64,
    last_error: Option<OutputError>,
}

impl<W: Write> EventLogObserver<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> Self {
        let mut obs = Self {
            writer:     Writer::from_writer(sink),
            events:     0,
            last_error: None,
        };
        let result = obs.writer.write_record(["time", "event", "vehicle_id", "stall_id"]);
        obs.store_err(result.map_err(OutputError::from));
        obs
    }

    /// Number of events written (header excluded).
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }

    fn record(&mut self, time: SimTime, event: &str, vehicle: Option<u32>, stall: Option<u32>) {
        let vehicle = vehicle.map(|v| v.to_string()).unwrap_or_default();
        let stall = stall.map(|s| s.to_string()).unwrap_or_default();
        let result = self
            .writer
            .write_record([time.0.to_string().as_str(), event, vehicle.as_str(), stall.as_str()]);
        if result.is_ok() {
            self.events += 1;
        }
        self.store_err(result.map_err(OutputError::from));
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> StationObserver for EventLogObserver<W> {
    fn on_admit(&mut self, time: SimTime, vehicle: VehicleId) {
        self.record(time, "admit", Some(vehicle.0), None);
    }

    fn on_assign(&mut self, time: SimTime, record: &VehicleRecord) {
        self.record(time, "assign", Some(record.id.0), Some(record.stall_id.0));
    }

    fn on_advance(&mut self, _from: SimTime, to: SimTime) {
        self.record(to, "advance", None, None);
    }

    fn on_sim_end(&mut self, _final_time: SimTime, _table: &ResultTable) {
        let result = self.writer.flush();
        self.store_err(result.map_err(OutputError::from));
    }
}
