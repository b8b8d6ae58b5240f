//! Running counters and their per-tick time series

use serde::{Deserialize, Serialize};

/// Running totals owned by the simulation and passed into each tick
///
/// `trees_burnt` never decreases. `trees_alive` grows on every sprout and
/// shrinks only when an ember collapses to ground; trees that are put out by
/// water are not subtracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Living vegetation tally
    pub trees_alive: i64,
    /// Trees that burnt down to ground
    pub trees_burnt: u64,
    /// Ticks completed
    pub tick: u64,
}

/// Counters sampled once per tick, two equal-length series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSeries {
    trees_alive: Vec<i64>,
    trees_burnt: Vec<u64>,
}

impl CounterSeries {
    /// Append one sample of both counters
    pub fn sample(&mut self, stats: &SimulationStats) {
        self.trees_alive.push(stats.trees_alive);
        self.trees_burnt.push(stats.trees_burnt);
    }

    /// `trees_alive` per tick
    pub fn trees_alive(&self) -> &[i64] {
        &self.trees_alive
    }

    /// `trees_burnt` per tick
    pub fn trees_burnt(&self) -> &[u64] {
        &self.trees_burnt
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.trees_alive.len()
    }

    /// Whether nothing has been sampled yet
    pub fn is_empty(&self) -> bool {
        self.trees_alive.is_empty()
    }
}
