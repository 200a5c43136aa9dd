//! station — charging-station queueing demo.
//!
//! Generates (or loads) a day of vehicle arrivals, assigns them to charging
//! stalls first-come-first-served, and writes the schedule as CSV and SVG.
//!
//! ```text
//! station                                   # defaults: 30 vehicles, 5 stalls, seed 13
//! station --stalls 3 --vehicles 50 --seed 7
//! station --input arrivals.csv --out output/mine
//! station --config station.json --sweep 8   # also compare 1..=8 stalls
//! RUST_LOG=cs_sim=trace station             # log every admit/assign/advance
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cs_arrivals::{Arrivals, generate_uniform, load_arrivals_csv};
use cs_core::{SimTime, StallId, StationConfig, VehicleId};
use cs_output::{CsvWriter, EventLogObserver, OutputWriter, write_svg};
use cs_sim::{ResultTable, StationBuilder, StationObserver, VehicleRecord, sweep_stalls};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUT_DIR: &str = "output/station";
const EVENT_LOG_FILE:  &str = "events.csv";
const SVG_FILE:        &str = "schedule.svg";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "station", about = "Simulate a multi-stall EV charging station")]
struct Args {
    /// JSON file with a `StationConfig`; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of charging stalls.
    #[arg(long)]
    stalls: Option<usize>,

    /// Number of vehicles to generate.
    #[arg(long)]
    vehicles: Option<usize>,

    /// RNG seed for generated arrivals.
    #[arg(long)]
    seed: Option<u64>,

    /// Load arrivals from CSV (`arrival_time,charging_duration`) instead of
    /// generating them.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Also simulate 1..=N stalls and print a wait-time comparison.
    #[arg(long)]
    sweep: Option<usize>,
}

impl Args {
    /// Config file (or defaults) with CLI flags applied on top.
    fn station_config(&self) -> Result<StationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => StationConfig::default(),
        };
        if let Some(n) = self.stalls {
            config.num_stalls = n;
        }
        if let Some(n) = self.vehicles {
            config.vehicle_count = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}

// ── Observer wrapper to track the queue ──────────────────────────────────────

/// Forwards to the event log and tracks the longest queue seen.
struct QueueDepthObserver<O: StationObserver> {
    inner:     O,
    depth:     usize,
    max_depth: usize,
}

impl<O: StationObserver> QueueDepthObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, depth: 0, max_depth: 0 }
    }
}

impl<O: StationObserver> StationObserver for QueueDepthObserver<O> {
    fn on_admit(&mut self, time: SimTime, vehicle: VehicleId) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.inner.on_admit(time, vehicle);
    }

    fn on_assign(&mut self, time: SimTime, record: &VehicleRecord) {
        self.depth = self.depth.saturating_sub(1);
        self.inner.on_assign(time, record);
    }

    fn on_advance(&mut self, from: SimTime, to: SimTime) {
        self.inner.on_advance(from, to);
    }

    fn on_sim_end(&mut self, final_time: SimTime, table: &ResultTable) {
        self.inner.on_sim_end(final_time, table);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.station_config()?;

    println!("=== station — EV charging queue simulator ===");
    println!(
        "Stalls: {}  |  Seed: {}  |  Output: {}",
        config.num_stalls,
        config.seed,
        args.out.display()
    );
    println!();

    // 1. Arrivals.
    let arrivals: Arrivals = match &args.input {
        Some(path) => load_arrivals_csv(path)
            .with_context(|| format!("loading arrivals from {}", path.display()))?,
        None => generate_uniform(&config)?,
    };
    if arrivals.is_empty() {
        bail!("no vehicles to simulate");
    }
    info!(vehicles = arrivals.len(), stalls = config.num_stalls, "arrivals ready");
    println!(
        "Vehicles: {} ({})",
        arrivals.len(),
        if args.input.is_some() { "loaded" } else { "generated" }
    );

    // 2. Build the station.
    let station = StationBuilder::new(config.num_stalls)
        .vehicles(&arrivals.arrival_times, &arrivals.durations)
        .build()?;

    // 3. Set up output.
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let events = BufWriter::new(File::create(args.out.join(EVENT_LOG_FILE))?);
    let mut obs = QueueDepthObserver::new(EventLogObserver::new(events));

    // 4. Run.
    let t0 = Instant::now();
    let table = station.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "event log incomplete");
    }
    let event_count = obs.inner.events();
    obs.inner.into_inner()?;

    // 5. Write schedule outputs.
    let mut writer = CsvWriter::new(&args.out)?;
    writer.write_schedule(&table)?;
    writer.finish()?;
    write_svg(&table, &args.out.join(SVG_FILE))?;

    // 6. Summary.
    let summary = table.summary();
    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  schedule.csv      : {} rows", table.len());
    println!("  stall_summary.csv : {} rows", table.num_stalls());
    println!("  events.csv        : {event_count} rows");
    println!("  schedule.svg");
    println!();
    println!(
        "Makespan: {}  |  Waited: {}/{}  |  Mean wait: {:.1}  |  Max wait: {}  |  Max queue: {}",
        summary.makespan.0,
        summary.waited,
        summary.served,
        summary.mean_wait,
        summary.max_wait,
        obs.max_depth
    );
    println!();

    // 7. Per-stall table.
    println!("{:<8} {:<10} {:<10} {:<8}", "Stall", "Vehicles", "Busy", "Util");
    println!("{}", "-".repeat(38));
    for (s, group) in table.by_stall().iter().enumerate() {
        let stall = StallId(s as u32);
        println!(
            "{:<8} {:<10} {:<10} {:<8.2}",
            s,
            group.len(),
            summary.stall_busy[s],
            summary.utilization(stall),
        );
    }

    // 8. Optional stall-count sweep.
    if let Some(max) = args.sweep {
        println!();
        println!("{:<8} {:<12} {:<10} {:<10}", "Stalls", "Total wait", "Max wait", "Makespan");
        println!("{}", "-".repeat(42));
        let counts: Vec<usize> = (1..=max).collect();
        for (n, result) in sweep_stalls(&arrivals.arrival_times, &arrivals.durations, &counts) {
            let s = result?.summary();
            println!(
                "{:<8} {:<12} {:<10} {:<10}",
                n, s.total_wait, s.max_wait, s.makespan.0
            );
        }
    }

    Ok(())
}
