//! The `OutputWriter` trait implemented by schedule writers.

use cs_sim::ResultTable;

use crate::OutputResult;

pub trait OutputWriter {
    /// Write every row of `table`, plus any per-stall aggregates the
    /// backend keeps.
    fn write_schedule(&mut self, table: &ResultTable) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: calling it again after success is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
