//! Simulation configuration and its validation

use crate::suppression::AgentKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Run parameters
///
/// Rule constants are fixed; everything here only sizes and seeds a run.
/// Deserializing a partial document fills the missing fields from `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// World width in world units
    pub world_width: u32,
    /// World height in world units
    pub world_height: u32,
    /// World units per grid cell
    pub cell_pitch: u32,
    /// Probability that a cell starts as a tree (0-1)
    pub tree_density: f64,
    /// Number of random initial ignitions (picked with replacement)
    pub initial_fires: usize,
    /// Number of firefighters, the truck comes on top
    pub firefighter_count: usize,
    /// Firefighter suppression radius in cells
    pub firefighter_radius: usize,
    /// Truck suppression radius in cells
    pub truck_radius: usize,
    /// Ticks to run, `None` runs until the hooks ask to stop
    pub max_ticks: Option<u64>,
    /// Display pacing in ticks per second, never affects the rules
    pub tick_rate: f32,
    /// RNG seed, `None` draws one from entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_width: 1280,
            world_height: 1280,
            cell_pitch: 10,
            tree_density: 0.5,
            initial_fires: 5,
            firefighter_count: 8,
            firefighter_radius: AgentKind::Firefighter.default_radius(),
            truck_radius: AgentKind::Truck.default_radius(),
            max_ticks: Some(1000),
            tick_rate: 20.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Grid size in cells: world size divided by the cell pitch, rounded down
    ///
    /// # Errors
    /// Returns an error if the pitch is zero or either dimension comes out as zero
    pub fn grid_dimensions(&self) -> Result<(usize, usize), ConfigError> {
        if self.cell_pitch == 0 {
            return Err(ConfigError::ZeroCellPitch);
        }
        let width = (self.world_width / self.cell_pitch) as usize;
        let height = (self.world_height / self.cell_pitch) as usize;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        Ok((width, height))
    }

    /// Check every parameter before a grid is built
    ///
    /// # Errors
    /// Returns the first invalid parameter found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid_dimensions()?;
        if !self.tree_density.is_finite() || !(0.0..=1.0).contains(&self.tree_density) {
            return Err(ConfigError::InvalidDensity(self.tree_density));
        }
        if self.firefighter_radius == 0 {
            return Err(ConfigError::ZeroRadius(AgentKind::Firefighter));
        }
        if self.truck_radius == 0 {
            return Err(ConfigError::ZeroRadius(AgentKind::Truck));
        }
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }
        Ok(())
    }

    /// Wall-clock time between ticks when pacing is on, zero for an invalid rate
    pub fn tick_interval(&self) -> Duration {
        Duration::try_from_secs_f32(1.0 / self.tick_rate).unwrap_or(Duration::ZERO)
    }
}

/// Errors that can occur when building a simulation from a configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Cell pitch of zero
    ZeroCellPitch,
    /// World smaller than one cell along an axis
    EmptyGrid { width: usize, height: usize },
    /// Initial tree density outside `[0, 1]` or not finite
    InvalidDensity(f64),
    /// Suppression radius of zero
    ZeroRadius(AgentKind),
    /// Tick rate not finite and positive
    InvalidTickRate(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCellPitch => write!(f, "cell pitch must be positive"),
            ConfigError::EmptyGrid { width, height } => {
                write!(f, "grid must have positive dimensions, got {width}x{height}")
            }
            ConfigError::InvalidDensity(density) => {
                write!(f, "tree density must lie in [0, 1], got {density}")
            }
            ConfigError::ZeroRadius(kind) => {
                write!(f, "{kind:?} suppression radius must be positive")
            }
            ConfigError::InvalidTickRate(rate) => {
                write!(f, "tick rate must be finite and positive, got {rate}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_128_square() {
        let config = SimulationConfig::default();
        assert_eq!(config.grid_dimensions(), Ok((128, 128)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_pitch_rejected() {
        let config = SimulationConfig {
            cell_pitch: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCellPitch));
    }

    #[test]
    fn test_world_smaller_than_cell_rejected() {
        let config = SimulationConfig {
            world_width: 5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 128
            })
        );
    }

    #[test]
    fn test_density_bounds() {
        for density in [-0.1, 1.5, f64::NAN] {
            let config = SimulationConfig {
                tree_density: density,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidDensity(_))
            ));
        }
        for density in [0.0, 1.0] {
            let config = SimulationConfig {
                tree_density: density,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_zero_radius_rejected() {
        let config = SimulationConfig {
            truck_radius: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroRadius(AgentKind::Truck))
        );
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Truck suppression radius must be positive"
        );
    }

    #[test]
    fn test_tick_rate_rejected() {
        let config = SimulationConfig {
            tick_rate: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTickRate(0.0)));
        let interval = SimulationConfig::default().tick_interval();
        assert!((interval.as_secs_f64() - 0.05).abs() < 1e-6);
    }
}
