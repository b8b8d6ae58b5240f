//! Rule stages and the tick driver
//!
//! Every stage takes the immutable current buffer and the work-in-progress next
//! buffer. Stages without randomness run row-parallel with Rayon: each worker
//! owns one row of the next buffer and only reads the current buffer.

use super::rules::{next_burning_state, sprout_probability};
use crate::core_types::CellState;
use crate::grid::{CellBuffer, ForestGrid};
use crate::simulation::SimulationStats;
use crate::suppression::{apply_suppression, Crew};
use rand::Rng;
use rayon::prelude::*;
use tracing::trace;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Ground cells that sprouted a sapling
    pub sprouted: usize,
    /// Trees that caught fire
    pub ignited: usize,
    /// Embers that collapsed to ground
    pub burnt_out: usize,
    /// Cells turned to water by agents (overlapping ranges count once per agent)
    pub suppressed: usize,
    /// Water cells that receded to ground
    pub receded: usize,
}

/// Advance the grid by one tick and commit the new generation
///
/// Counters in `stats` are updated as rules fire: sprouts increment
/// `trees_alive`, embers collapsing to ground increment `trees_burnt` and
/// decrement `trees_alive`.
pub fn step_transition<R: Rng + ?Sized>(
    grid: &mut ForestGrid,
    crew: &Crew,
    rng: &mut R,
    stats: &mut SimulationStats,
) -> TickReport {
    let mut report = TickReport::default();
    if grid.width() == 0 || grid.height() == 0 {
        return report;
    }

    {
        let (current, next) = grid.split_mut();

        report.sprouted = regrow(current, next, rng);
        report.ignited = ignite_from(current, next, CellState::Ignition);
        report.ignited += ignite_from(current, next, CellState::Fire);
        report.burnt_out = progress_burning(current, next);
        report.suppressed = crew
            .iter()
            .map(|agent| apply_suppression(current, next, agent))
            .sum();
        report.receded = recede_water(current, next);
    }
    grid.commit();

    stats.trees_alive += report.sprouted as i64;
    stats.trees_alive -= report.burnt_out as i64;
    stats.trees_burnt += report.burnt_out as u64;

    trace!("{:?}", report);
    report
}

/// Stage 1: regrowth
///
/// Writes every cell of `next`. Ground sprouts with probability
/// `sprout_probability(tree neighbors)` drawn independently per cell in
/// row-major order, saplings become trees, every other state is carried over.
fn regrow<R: Rng + ?Sized>(current: &CellBuffer, next: &mut CellBuffer, rng: &mut R) -> usize {
    let width = current.width();
    let mut sprouted = 0;

    for (idx, (&state, out)) in current
        .as_slice()
        .iter()
        .zip(next.as_mut_slice().iter_mut())
        .enumerate()
    {
        *out = match state {
            CellState::Ground => {
                let (x, y) = (idx % width, idx / width);
                let trees = current.count_neighbors_of_type(CellState::Tree, x, y);
                if rng.random::<f64>() < sprout_probability(trees) {
                    sprouted += 1;
                    CellState::Sapling
                } else {
                    CellState::Ground
                }
            }
            CellState::Sapling => CellState::Tree,
            other => other,
        };
    }

    sprouted
}

/// Stages 2 and 3: trees with at least one neighbor in `source` ignite
///
/// Returns the number of trees newly marked in `next`; a tree already ignited
/// by an earlier pass of this tick is not counted twice.
fn ignite_from(current: &CellBuffer, next: &mut CellBuffer, source: CellState) -> usize {
    let width = current.width();
    next.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| {
            let mut ignited = 0;
            for (x, out) in row.iter_mut().enumerate() {
                if current.get(x, y) == CellState::Tree
                    && current.has_neighbor_of_type(source, x, y)
                {
                    if *out != CellState::Ignition {
                        ignited += 1;
                    }
                    *out = CellState::Ignition;
                }
            }
            ignited
        })
        .sum()
}

/// Stage 3: burning cells advance exactly one state
///
/// Keyed off the current state only, so a cell never advances twice in a tick.
/// Returns the number of embers that collapsed to ground.
fn progress_burning(current: &CellBuffer, next: &mut CellBuffer) -> usize {
    let width = current.width();
    next.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| {
            let mut burnt_out = 0;
            for (x, out) in row.iter_mut().enumerate() {
                let state = current.get(x, y);
                if let Some(advanced) = next_burning_state(state) {
                    if state == CellState::Ember {
                        burnt_out += 1;
                    }
                    *out = advanced;
                }
            }
            burnt_out
        })
        .sum()
}

/// Stage 5: water lasts one tick
fn recede_water(current: &CellBuffer, next: &mut CellBuffer) -> usize {
    let width = current.width();
    next.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| {
            let mut receded = 0;
            for (x, out) in row.iter_mut().enumerate() {
                if current.get(x, y) == CellState::Water {
                    *out = CellState::Ground;
                    receded += 1;
                }
            }
            receded
        })
        .sum()
}
