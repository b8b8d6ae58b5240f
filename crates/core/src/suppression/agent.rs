//! Agent types
//!
//! Agents have no health and no capacity, never collide, and are never removed
//! during a run. Several agents may share a cell.

use serde::{Deserialize, Serialize};

/// Kind of firefighting agent
///
/// Rendering draws a firefighter as a single cell and the truck as a 3×3 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    /// Firefighter on foot with a hose
    Firefighter = 0,
    /// Fire truck with a long-range cannon
    Truck = 1,
}

impl AgentKind {
    /// Suppression radius used when none is configured
    #[must_use]
    pub fn default_radius(self) -> usize {
        match self {
            AgentKind::Firefighter => 5,
            AgentKind::Truck => 11,
        }
    }
}

/// A firefighting agent on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    x: usize,
    y: usize,
    kind: AgentKind,
    radius: usize,
}

impl Agent {
    /// Create an agent at `(x, y)` with a Chebyshev suppression radius
    #[must_use]
    pub fn new(x: usize, y: usize, kind: AgentKind, radius: usize) -> Self {
        Self { x, y, kind, radius }
    }

    /// Create a firefighter with the default radius
    #[must_use]
    pub fn firefighter(x: usize, y: usize) -> Self {
        Self::new(x, y, AgentKind::Firefighter, AgentKind::Firefighter.default_radius())
    }

    /// Create a truck with the default radius
    #[must_use]
    pub fn truck(x: usize, y: usize) -> Self {
        Self::new(x, y, AgentKind::Truck, AgentKind::Truck.default_radius())
    }

    /// Grid position `(x, y)`
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Agent kind
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Suppression radius in cells
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Whether `(x, y)` lies inside the square suppression range
    pub fn covers(&self, x: usize, y: usize) -> bool {
        self.x.abs_diff(x) <= self.radius && self.y.abs_diff(y) <= self.radius
    }

    pub(crate) fn move_to(&mut self, (x, y): (usize, usize)) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_radii() {
        assert_eq!(Agent::firefighter(0, 0).radius(), 5);
        assert_eq!(Agent::truck(0, 0).radius(), 11);
    }

    #[test]
    fn test_covers_is_square() {
        let agent = Agent::new(10, 10, AgentKind::Firefighter, 2);
        assert!(agent.covers(12, 12));
        assert!(agent.covers(8, 12));
        assert!(agent.covers(10, 10));
        assert!(!agent.covers(13, 10));
        assert!(!agent.covers(10, 7));
    }
}
