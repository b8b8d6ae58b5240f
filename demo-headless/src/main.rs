use clap::Parser;
use forest_fire_core::visual::{color_for_code, compose_frame};
use forest_fire_core::{CellState, FrameView, Simulation, SimulationHooks};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::DemoError;

/// Forest fire cellular automaton without a window
#[derive(Parser, Debug)]
#[command(name = "forest-fire-demo")]
#[command(about = "Forest fire simulation with firefighters and a truck", long_about = None)]
pub struct Args {
    /// TOML run configuration; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World width in world units
    #[arg(long)]
    width: Option<u32>,

    /// World height in world units
    #[arg(long)]
    height: Option<u32>,

    /// World units per grid cell
    #[arg(long)]
    cell_pitch: Option<u32>,

    /// Initial tree density (0-1)
    #[arg(short, long)]
    density: Option<f64>,

    /// Number of random initial fires
    #[arg(short, long)]
    fires: Option<usize>,

    /// Number of firefighters (a truck is always added)
    #[arg(long)]
    firefighters: Option<usize>,

    /// Ticks to run, 0 runs until interrupted
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Ticks per second when pacing in real time
    #[arg(long)]
    tick_rate: Option<f32>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Sleep between ticks to run at the configured tick rate
    #[arg(long)]
    realtime: bool,

    /// Report interval in ticks (0 disables periodic reports)
    #[arg(short, long, default_value_t = 50)]
    report_interval: u64,

    /// Write the final frame as a binary PPM image
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

/// Logs periodic progress and optionally paces the loop
struct Reporter {
    report_interval: u64,
    realtime: bool,
    peak_burning: usize,
}

impl SimulationHooks for Reporter {
    fn render(&mut self, frame: &FrameView<'_>) {
        let burning = frame.states().iter().filter(|s| s.is_burning()).count();
        self.peak_burning = self.peak_burning.max(burning);

        let stats = frame.stats();
        if self.report_interval > 0 && stats.tick % self.report_interval == 0 {
            info!(
                tick = stats.tick,
                trees_alive = stats.trees_alive,
                trees_burnt = stats.trees_burnt,
                burning,
                "Progress"
            );
        }
    }

    fn pace(&mut self, interval: Duration) {
        if self.realtime {
            thread::sleep(interval);
        }
    }
}

/// Write the agent-overlaid frame as a P6 PPM, one pixel per cell
fn write_snapshot(sim: &Simulation, path: &Path) -> Result<(), DemoError> {
    let to_error = |source| DemoError::Snapshot {
        path: path.to_path_buf(),
        source,
    };

    let view = sim.view();
    let (width, height) = view.dimensions();
    let mut out = BufWriter::new(File::create(path).map_err(to_error)?);
    write!(out, "P6\n{width} {height}\n255\n").map_err(to_error)?;
    for code in compose_frame(&view) {
        out.write_all(&color_for_code(code).unwrap_or_default())
            .map_err(to_error)?;
    }
    out.flush().map_err(to_error)
}

/// End-of-run summary, one entry per printed line
fn report_lines(sim: &Simulation, peak_burning: usize, elapsed: Duration) -> Vec<String> {
    let stats = sim.stats();
    let grid = sim.grid();
    let (width, height) = grid.dimensions();

    let mut lines = vec![
        "=== Simulation Complete ===".to_string(),
        format!("Seed: {}", sim.seed()),
        format!("Grid: {width}x{height} cells"),
        format!("Ticks: {} ({:.2}s wall clock)", stats.tick, elapsed.as_secs_f64()),
        format!("Initial trees: {}", sim.initial_trees()),
        format!("Trees alive: {}", stats.trees_alive),
        format!("Trees burnt: {}", stats.trees_burnt),
    ];
    if let Some(min_alive) = sim.series().trees_alive().iter().min() {
        lines.push(format!("Fewest trees alive: {min_alive}"));
    }
    lines.push(format!("Peak burning cells: {peak_burning}"));

    lines.push(String::new());
    lines.push("Cells by state:".to_string());
    for state in CellState::ALL {
        let name = format!("{state:?}");
        lines.push(format!("  {name:<9} {}", grid.count(state)));
    }
    lines
}

fn print_report(sim: &Simulation, peak_burning: usize, elapsed: Duration) {
    println!();
    for line in report_lines(sim, peak_burning, elapsed) {
        println!("{line}");
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let config = config::resolve(args)?;
    let mut sim = Simulation::new(config)?;

    let mut reporter = Reporter {
        report_interval: args.report_interval,
        realtime: args.realtime,
        peak_burning: 0,
    };

    let started = Instant::now();
    sim.run(&mut reporter);
    print_report(&sim, reporter.peak_burning, started.elapsed());

    if let Some(path) = &args.snapshot {
        write_snapshot(&sim, path)?;
        info!(path = %path.display(), "Wrote final frame");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
