//! Fixed rule constants and per-cell rule functions

use crate::core_types::CellState;

/// Chance that a ground cell with no tree neighbors sprouts this tick
pub const BASE_SPROUT_PROBABILITY: f64 = 0.0001;

/// Extra sprout chance per `Tree` neighbor
pub const SPROUT_PROBABILITY_PER_TREE: f64 = 0.0005;

/// Probability that a ground cell with `tree_neighbors` mature trees around it
/// becomes a sapling this tick
#[must_use]
pub fn sprout_probability(tree_neighbors: usize) -> f64 {
    BASE_SPROUT_PROBABILITY + SPROUT_PROBABILITY_PER_TREE * tree_neighbors as f64
}

/// Natural progression of a burning cell, `None` for cells that do not burn
///
/// `Ignition` → `Fire` → `Ember` → `Ground`.
#[must_use]
pub fn next_burning_state(state: CellState) -> Option<CellState> {
    match state {
        CellState::Ignition => Some(CellState::Fire),
        CellState::Fire => Some(CellState::Ember),
        CellState::Ember => Some(CellState::Ground),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprout_probability() {
        assert!((sprout_probability(0) - 0.0001).abs() < 1e-12);
        assert!((sprout_probability(8) - 0.0041).abs() < 1e-12);
    }

    #[test]
    fn test_burning_progression() {
        assert_eq!(next_burning_state(CellState::Ignition), Some(CellState::Fire));
        assert_eq!(next_burning_state(CellState::Fire), Some(CellState::Ember));
        assert_eq!(next_burning_state(CellState::Ember), Some(CellState::Ground));
        assert_eq!(next_burning_state(CellState::Tree), None);
        assert_eq!(next_burning_state(CellState::Water), None);
    }
}
