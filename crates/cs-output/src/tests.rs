//! Integration tests for cs-output.

#[cfg(test)]
mod fixtures {
    use cs_sim::{ResultTable, simulate};

    /// Two stalls, two vehicles at t=0 and three at t=1.
    ///
    /// starts `[0, 0, 10, 10, 14]`, stalls `[0, 1, 0, 1, 0]`.
    pub fn busy_table() -> ResultTable {
        simulate(&[0.0, 0.0, 1.0, 1.0, 1.0], &[10.0, 10.0, 4.0, 4.0, 4.0], 2).unwrap()
    }

    /// One stall, quarter-unit times: starts `[0.5, 3, 3.25]`.
    pub fn fractional_table() -> ResultTable {
        simulate(&[0.5, 0.75, 1.0], &[2.5, 0.25, 1.5], 1).unwrap()
    }

    pub fn empty_table() -> ResultTable {
        simulate(&[], &[], 3).unwrap()
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::fixtures::{busy_table, empty_table, fractional_table};
    use crate::csv::{CsvWriter, SCHEDULE_HEADER, STALL_SUMMARY_HEADER};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("schedule.csv").exists());
        assert!(dir.path().join("stall_summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("schedule.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SCHEDULE_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("stall_summary.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, STALL_SUMMARY_HEADER);
    }

    #[test]
    fn schedule_rows_in_input_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_schedule(&busy_table()).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "schedule.csv");
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[0], vec!["0", "0", "10", "0", "10", "0"]);
        assert_eq!(&rows[1], vec!["1", "0", "10", "0", "10", "1"]);
        assert_eq!(&rows[2], vec!["2", "1", "4", "10", "14", "0"]);
        assert_eq!(&rows[3], vec!["3", "1", "4", "10", "14", "1"]);
        assert_eq!(&rows[4], vec!["4", "1", "4", "14", "18", "0"]);
    }

    #[test]
    fn stall_summary_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_schedule(&busy_table()).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "stall_summary.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0], vec!["0", "3", "18"]);
        assert_eq!(&rows[1], vec!["1", "2", "14"]);
    }

    #[test]
    fn fractional_times_written_as_decimals() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_schedule(&fractional_table()).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "schedule.csv");
        assert_eq!(&rows[0], vec!["0", "0.5", "2.5", "0.5", "3", "0"]);
        assert_eq!(&rows[1], vec!["1", "0.75", "0.25", "3", "3.25", "0"]);
        assert_eq!(&rows[2], vec!["2", "1", "1.5", "3.25", "4.75", "0"]);
        assert_eq!(&records(&dir, "stall_summary.csv")[0], vec!["0", "3", "4.25"]);
    }

    #[test]
    fn idle_stalls_still_listed() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_schedule(&empty_table()).unwrap();
        w.finish().unwrap();

        assert!(records(&dir, "schedule.csv").is_empty());
        let stalls = records(&dir, "stall_summary.csv");
        assert_eq!(stalls.len(), 3);
        assert!(stalls.iter().all(|r| &r[1] == "0" && &r[2] == "0"));
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let (a, b) = (tmp(), tmp());
        for dir in [&a, &b] {
            let mut w = CsvWriter::new(dir.path()).unwrap();
            w.write_schedule(&busy_table()).unwrap();
            w.finish().unwrap();
        }
        for file in ["schedule.csv", "stall_summary.csv"] {
            let x = std::fs::read(a.path().join(file)).unwrap();
            let y = std::fs::read(b.path().join(file)).unwrap();
            assert_eq!(x, y, "{file} differs");
        }
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tmp();
        let missing = dir.path().join("nope");
        assert!(CsvWriter::new(&missing).is_err());
    }
}

#[cfg(test)]
mod event_log_tests {
    use cs_sim::StationBuilder;

    use crate::observer::EventLogObserver;

    fn run_logged() -> (Vec<csv::StringRecord>, u64) {
        let station = StationBuilder::new(2)
            .vehicles(&[0.0, 0.0, 1.0, 1.0, 1.0], &[10.0, 10.0, 4.0, 4.0, 4.0])
            .build()
            .unwrap();
        let mut obs = EventLogObserver::new(Vec::new());
        station.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        let events = obs.events();
        let bytes = obs.into_inner().unwrap();

        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "event", "vehicle_id", "stall_id"]);
        (rdr.records().map(|r| r.unwrap()).collect(), events)
    }

    #[test]
    fn event_counts() {
        let (rows, events) = run_logged();
        assert_eq!(events, rows.len() as u64);

        let count = |kind: &str| rows.iter().filter(|r| &r[1] == kind).count();
        assert_eq!(count("admit"), 5);
        assert_eq!(count("assign"), 5);
        // 0 → 1 → 10 → 14; no advance after the final assignment.
        assert_eq!(count("advance"), 3);
    }

    #[test]
    fn event_sequence_starts_with_admissions() {
        let (rows, _) = run_logged();
        assert_eq!(&rows[0], vec!["0", "admit", "0", ""]);
        assert_eq!(&rows[1], vec!["0", "admit", "1", ""]);
        assert_eq!(&rows[2], vec!["0", "assign", "0", "0"]);
        assert_eq!(&rows[3], vec!["0", "assign", "1", "1"]);
        assert_eq!(&rows[4], vec!["1", "advance", "", ""]);
    }

    #[test]
    fn advance_times_increase() {
        let (rows, _) = run_logged();
        let times: Vec<f64> = rows
            .iter()
            .filter(|r| &r[1] == "advance")
            .map(|r| r[0].parse().unwrap())
            .collect();
        assert_eq!(times, [1.0, 10.0, 14.0]);
    }

    #[test]
    fn last_event_is_final_assignment() {
        let (rows, _) = run_logged();
        let last = rows.last().unwrap();
        assert_eq!(last, vec!["14", "assign", "4", "0"]);
    }
}

#[cfg(test)]
mod render_tests {
    use tempfile::TempDir;

    use cs_sim::simulate;

    use super::fixtures::{busy_table, empty_table, fractional_table};
    use crate::OutputError;
    use crate::render::{SvgRenderer, render_svg, write_svg};

    fn count(svg: &str, needle: &str) -> usize {
        svg.matches(needle).count()
    }

    #[test]
    fn svg_document_shape() {
        let svg = render_svg(&busy_table()).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"width="1000""#));
        assert!(svg.contains(r#"height="800""#));
    }

    #[test]
    fn svg_one_bar_per_served_vehicle() {
        let svg = render_svg(&busy_table()).unwrap();
        assert_eq!(count(&svg, r#"class="charge""#), 5);
        assert_eq!(count(&svg, r#"class="service""#), 5);
    }

    #[test]
    fn svg_queue_segments_only_for_waiting_vehicles() {
        // Vehicles 2, 3, 4 wait; 0 and 1 start on arrival.
        let svg = render_svg(&busy_table()).unwrap();
        assert_eq!(count(&svg, r#"class="queue""#), 3);
    }

    #[test]
    fn svg_labels_and_titles() {
        let svg = render_svg(&busy_table()).unwrap();
        assert!(svg.contains(">Stall1<"));
        assert!(svg.contains(">Stall2<"));
        assert!(!svg.contains(">Stall3<"));
        assert!(svg.contains("Charging Stalls Occupancy Over Time"));
        assert!(svg.contains("Serving or Queuing Distribution for Vehicles"));
        assert!(svg.contains(">Queuing<"));
        assert!(svg.contains(">Charging<"));
        assert_eq!(count(&svg, "Time(Minutes)"), 2);
    }

    #[test]
    fn svg_is_deterministic() {
        assert_eq!(render_svg(&busy_table()).unwrap(), render_svg(&busy_table()).unwrap());
    }

    #[test]
    fn svg_custom_canvas() {
        let svg = SvgRenderer::new(640, 480).render(&busy_table()).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 640 480""#));
    }

    #[test]
    fn svg_fractional_schedule() {
        let svg = render_svg(&fractional_table()).unwrap();
        assert_eq!(count(&svg, r#"class="charge""#), 3);
        assert_eq!(count(&svg, r#"class="queue""#), 2);
        assert!(svg.contains("vehicle 1 [3, 3.25)"));
        // Makespan 4.75 gives a 0.5 tick step.
        assert!(svg.contains(">4.5</text>"));
    }

    #[test]
    fn svg_handles_times_near_f64_max() {
        let table = simulate(&[f64::MAX / 2.0], &[f64::MAX / 4.0], 1).unwrap();
        let svg = render_svg(&table).unwrap();
        assert_eq!(count(&svg, r#"class="charge""#), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(render_svg(&empty_table()), Err(OutputError::EmptyTable)));
    }

    #[test]
    fn write_svg_creates_file() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.svg");
        write_svg(&busy_table(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, render_svg(&busy_table()).unwrap());
    }

    #[test]
    fn write_svg_empty_table_writes_nothing() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.svg");
        assert!(write_svg(&empty_table(), &path).is_err());
        assert!(!path.exists());
    }
}
