//! Simulation loop
//!
//! `Simulation` owns the grid, the crew, the counters and the RNG for the whole
//! run. Each tick runs in a fixed order:
//! 1. transition tick (grid rules and suppression)
//! 2. every agent retargets from the post-transition grid
//! 3. all moves are applied together
//! 4. counters are sampled
//!
//! `run` wraps this with the external hooks: render before the tick, pace and
//! poll for a stop request after it.

pub mod config;
pub mod hooks;
pub mod stats;

pub use config::{ConfigError, SimulationConfig};
pub use hooks::{FrameView, Headless, SimulationHooks};
pub use stats::{CounterSeries, SimulationStats};

use crate::grid::ForestGrid;
use crate::solver::{step_transition, TickReport};
use crate::suppression::Crew;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// A forest fire run
pub struct Simulation {
    config: SimulationConfig,
    grid: ForestGrid,
    crew: Crew,
    stats: SimulationStats,
    series: CounterSeries,
    rng: StdRng,
    seed: u64,
    initial_trees: i64,
}

impl Simulation {
    /// Create a simulation with a random forest, random fires and a random crew
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid; no grid is built then
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = config.grid_dimensions()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        info!(
            "Creating forest grid {}x{} (density {:.2}, {} fires, seed {})",
            width, height, config.tree_density, config.initial_fires, seed
        );

        let grid = ForestGrid::random_forest(
            width,
            height,
            config.tree_density,
            config.initial_fires,
            &mut rng,
        );
        let crew = Crew::deploy(
            width,
            height,
            config.firefighter_count,
            config.firefighter_radius,
            config.truck_radius,
            &mut rng,
        );

        Ok(Self::assemble(config, grid, crew, rng, seed))
    }

    /// Create a simulation from a hand-built grid and crew
    ///
    /// Only the run parameters of `config` are used (`max_ticks`, `tick_rate`,
    /// `seed`); the world size and agent settings come from `grid` and `crew`.
    pub fn from_parts(config: SimulationConfig, grid: ForestGrid, crew: Crew) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = StdRng::seed_from_u64(seed);
        Self::assemble(config, grid, crew, rng, seed)
    }

    fn assemble(
        config: SimulationConfig,
        grid: ForestGrid,
        crew: Crew,
        rng: StdRng,
        seed: u64,
    ) -> Self {
        let initial_trees = grid.vegetation_count() as i64;
        let stats = SimulationStats {
            trees_alive: initial_trees,
            ..SimulationStats::default()
        };
        Self {
            config,
            grid,
            crew,
            stats,
            series: CounterSeries::default(),
            rng,
            seed,
            initial_trees,
        }
    }

    /// Advance one tick: transition, retarget, move, sample counters
    pub fn tick(&mut self) -> TickReport {
        let report = step_transition(&mut self.grid, &self.crew, &mut self.rng, &mut self.stats);

        let targets = self.crew.retarget(self.grid.current());
        self.crew.apply_moves(&targets);

        self.stats.tick += 1;
        self.series.sample(&self.stats);

        debug!(
            "Tick {}: alive={} burnt={} ignited={} suppressed={}",
            self.stats.tick,
            self.stats.trees_alive,
            self.stats.trees_burnt,
            report.ignited,
            report.suppressed
        );
        report
    }

    /// Run until `max_ticks` is reached or the hooks ask to stop
    ///
    /// A stop request takes effect after the current tick. Returns the number of
    /// ticks run by this call.
    pub fn run<H: SimulationHooks + ?Sized>(&mut self, hooks: &mut H) -> u64 {
        let interval = self.config.tick_interval();
        let mut ticks = 0;

        loop {
            if let Some(max_ticks) = self.config.max_ticks {
                if self.stats.tick >= max_ticks {
                    break;
                }
            }

            hooks.render(&self.view());
            self.tick();
            ticks += 1;
            hooks.pace(interval);

            if hooks.should_stop() {
                info!("Stop requested after tick {}", self.stats.tick);
                break;
            }
        }

        info!(
            "Run finished after {} ticks: {} trees alive, {} burnt",
            ticks, self.stats.trees_alive, self.stats.trees_burnt
        );
        ticks
    }

    /// Read-only view for rendering
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            grid: &self.grid,
            crew: &self.crew,
            stats: &self.stats,
        }
    }

    /// The forest grid
    pub fn grid(&self) -> &ForestGrid {
        &self.grid
    }

    /// The firefighters and the truck
    pub fn crew(&self) -> &Crew {
        &self.crew
    }

    /// Running counters
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Counters sampled once per tick
    pub fn series(&self) -> &CounterSeries {
        &self.series
    }

    /// Configuration the run was created with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed of the run's RNG, for reproducing it
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `trees_alive` at the start of the run
    pub fn initial_trees(&self) -> i64 {
        self.initial_trees
    }
}
