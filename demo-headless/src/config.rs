//! Run configuration assembly: defaults, then an optional TOML file, then flags

use forest_fire_core::{ConfigError, SimulationConfig};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Args;

/// Failure while assembling or validating the run configuration
#[derive(Debug)]
pub enum DemoError {
    /// The config file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// The config file is not valid TOML for `SimulationConfig`
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The engine rejected the assembled configuration
    Config(ConfigError),
    /// The frame snapshot could not be written
    Snapshot { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            DemoError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            DemoError::Config(e) => write!(f, "invalid configuration: {e}"),
            DemoError::Snapshot { path, source } => {
                write!(f, "failed to write snapshot {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DemoError {}

impl From<ConfigError> for DemoError {
    fn from(e: ConfigError) -> Self {
        DemoError::Config(e)
    }
}

/// Parse a TOML document; missing fields keep their defaults
pub fn parse_config(contents: &str, path: &Path) -> Result<SimulationConfig, DemoError> {
    toml::from_str(contents).map_err(|source| DemoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a TOML config file
pub fn load_config(path: &Path) -> Result<SimulationConfig, DemoError> {
    let contents = fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, path)?;
    info!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Apply command-line overrides on top of `config`
pub fn apply_overrides(mut config: SimulationConfig, args: &Args) -> SimulationConfig {
    if let Some(width) = args.width {
        config.world_width = width;
    }
    if let Some(height) = args.height {
        config.world_height = height;
    }
    if let Some(pitch) = args.cell_pitch {
        config.cell_pitch = pitch;
    }
    if let Some(density) = args.density {
        config.tree_density = density;
    }
    if let Some(fires) = args.fires {
        config.initial_fires = fires;
    }
    if let Some(count) = args.firefighters {
        config.firefighter_count = count;
    }
    if let Some(ticks) = args.ticks {
        config.max_ticks = (ticks > 0).then_some(ticks);
    }
    if let Some(rate) = args.tick_rate {
        config.tick_rate = rate;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config
}

/// Defaults, then the file named by `--config`, then flags; validated
pub fn resolve(args: &Args) -> Result<SimulationConfig, DemoError> {
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    let config = apply_overrides(base, args);
    config.validate()?;
    Ok(config)
}
