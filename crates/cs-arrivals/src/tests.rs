//! Unit tests for cs-arrivals.

use cs_core::{StationConfig, VehicleId};

use crate::Arrivals;

#[cfg(test)]
mod arrivals {
    use super::*;

    #[test]
    fn push_assigns_ids_in_order() {
        let mut a = Arrivals::new();
        a.push(5.0, 10.0);
        a.push(0.5, 3.25);
        assert_eq!(a.len(), 2);
        let rows: Vec<_> = a.iter().collect();
        assert_eq!(rows, vec![(VehicleId(0), 5.0, 10.0), (VehicleId(1), 0.5, 3.25)]);
    }

    #[test]
    fn empty_set() {
        let a = Arrivals::with_capacity(4);
        assert!(a.is_empty());
        assert_eq!(a.iter().count(), 0);
    }
}

#[cfg(test)]
mod generator {
    use super::*;
    use crate::{ArrivalError, generate_uniform};

    #[test]
    fn default_config_shape() {
        let cfg = StationConfig::default();
        let a = generate_uniform(&cfg).unwrap();
        assert_eq!(a.len(), 30);
        assert!(a.arrival_times.iter().all(|t| (0.0..180.0).contains(t) && t.fract() == 0.0));
        assert!(a.durations.iter().all(|d| (20.0..80.0).contains(d) && d.fract() == 0.0));
    }

    #[test]
    fn sorted_when_requested() {
        let cfg = StationConfig { vehicle_count: 200, ..Default::default() };
        let a = generate_uniform(&cfg).unwrap();
        assert!(a.arrival_times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn same_seed_is_reproducible() {
        let cfg = StationConfig::default();
        assert_eq!(generate_uniform(&cfg).unwrap(), generate_uniform(&cfg).unwrap());
    }

    #[test]
    fn different_seed_differs() {
        let a = generate_uniform(&StationConfig::default()).unwrap();
        let b = generate_uniform(&StationConfig { seed: 14, ..Default::default() }).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = StationConfig { max_duration: 10, ..Default::default() };
        assert!(matches!(generate_uniform(&cfg), Err(ArrivalError::Config(_))));
    }

    #[test]
    fn zero_vehicles() {
        let cfg = StationConfig { vehicle_count: 0, ..Default::default() };
        assert!(generate_uniform(&cfg).unwrap().is_empty());
    }
}

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{ArrivalError, load_arrivals_csv, load_arrivals_reader};

    const CSV: &str = "\
arrival_time,charging_duration
0,45
3, 20
3,61
";

    #[test]
    fn reads_rows_in_order() {
        let a = load_arrivals_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(a.arrival_times, vec![0.0, 3.0, 3.0]);
        assert_eq!(a.durations, vec![45.0, 20.0, 61.0]);
    }

    #[test]
    fn reads_fractional_times() {
        let csv = "arrival_time,charging_duration\n0.5,2.5\n1.25, 0.75\n";
        let a = load_arrivals_reader(Cursor::new(csv)).unwrap();
        assert_eq!(a.arrival_times, vec![0.5, 1.25]);
        assert_eq!(a.durations, vec![2.5, 0.75]);
    }

    #[test]
    fn header_only_is_empty() {
        let a = load_arrivals_reader(Cursor::new("arrival_time,charging_duration\n")).unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn negative_values_pass_through() {
        // Validation is the scheduler's job.
        let a = load_arrivals_reader(Cursor::new("arrival_time,charging_duration\n-1,0\n")).unwrap();
        assert_eq!(a.arrival_times, vec![-1.0]);
        assert_eq!(a.durations, vec![0.0]);
    }

    #[test]
    fn bad_number_is_parse_error() {
        let err = load_arrivals_reader(Cursor::new("arrival_time,charging_duration\nx,5\n"))
            .unwrap_err();
        assert!(matches!(err, ArrivalError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn missing_column_is_parse_error() {
        let err = load_arrivals_reader(Cursor::new("arrival_time\n4\n")).unwrap_err();
        assert!(matches!(err, ArrivalError::Parse(_)));
    }

    #[test]
    fn from_file() {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(CSV.as_bytes()).unwrap();
        let a = load_arrivals_csv(f.path()).unwrap();
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_arrivals_csv(std::path::Path::new("/nonexistent/arrivals.csv")).unwrap_err();
        assert!(matches!(err, ArrivalError::Io(_)));
    }
}
