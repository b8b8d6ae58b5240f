//! Cell states of the forest grid
//!
//! Every grid position holds exactly one `CellState`. The numeric codes are kept
//! stable because external renderers index their color tables with them; rule
//! logic never looks at the codes.

use serde::{Deserialize, Serialize};

/// Code reserved for the agent overlay drawn on top of the grid.
///
/// It never appears in a grid buffer.
pub const AGENT_OVERLAY_CODE: u8 = 6;

/// State of a single grid cell
///
/// Burning cells move through `Ignition` → `Fire` → `Ember` → `Ground`, one step
/// per tick. `Water` is left behind by suppression and recedes to `Ground` after
/// one tick.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Bare ground, may sprout a sapling
    #[default]
    Ground = 0,
    /// Mature tree, flammable
    Tree = 1,
    /// Young tree, matures next tick
    Sapling = 2,
    /// Tree that caught fire this tick
    Ignition = 3,
    /// Actively burning
    Fire = 4,
    /// Last burning state before collapsing to ground
    Ember = 5,
    /// Suppressed cell, recedes to ground next tick
    Water = 7,
}

impl CellState {
    /// All grid states in code order
    pub const ALL: [CellState; 7] = [
        CellState::Ground,
        CellState::Tree,
        CellState::Sapling,
        CellState::Ignition,
        CellState::Fire,
        CellState::Ember,
        CellState::Water,
    ];

    /// Convert from the renderer code, `None` for the overlay code or unknown values
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Ground),
            1 => Some(Self::Tree),
            2 => Some(Self::Sapling),
            3 => Some(Self::Ignition),
            4 => Some(Self::Fire),
            5 => Some(Self::Ember),
            7 => Some(Self::Water),
            _ => None,
        }
    }

    /// Convert to the renderer code
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Cells agents detect and suppress: `Ignition` and `Fire`.
    ///
    /// `Ember` is burning too but is already past saving.
    #[must_use]
    pub fn is_burning(self) -> bool {
        matches!(self, Self::Ignition | Self::Fire)
    }

    /// Counted by the `trees_alive` tally: trees, saplings and anything still burning
    #[must_use]
    pub fn is_vegetation(self) -> bool {
        matches!(
            self,
            Self::Tree | Self::Sapling | Self::Ignition | Self::Fire | Self::Ember
        )
    }
}
