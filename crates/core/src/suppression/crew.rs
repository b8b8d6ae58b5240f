//! The agents deployed for a run
//!
//! Iteration order is always the firefighters in list order, then the truck.
//! Suppression and retargeting both follow it.

use super::{find_move_target, Agent, AgentKind};
use crate::grid::CellBuffer;
use rand::Rng;
use tracing::trace;

/// Firefighters plus one truck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crew {
    firefighters: Vec<Agent>,
    truck: Agent,
}

impl Crew {
    /// Create a crew from explicit agents
    #[must_use]
    pub fn new(firefighters: Vec<Agent>, truck: Agent) -> Self {
        Self {
            firefighters,
            truck,
        }
    }

    /// Deploy `firefighter_count` firefighters and a truck at uniformly random cells
    ///
    /// The grid must have at least one cell.
    pub fn deploy<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        firefighter_count: usize,
        firefighter_radius: usize,
        truck_radius: usize,
        rng: &mut R,
    ) -> Self {
        let firefighters = (0..firefighter_count)
            .map(|_| {
                let x = rng.random_range(0..width);
                let y = rng.random_range(0..height);
                Agent::new(x, y, AgentKind::Firefighter, firefighter_radius)
            })
            .collect();
        let truck = Agent::new(
            rng.random_range(0..width),
            rng.random_range(0..height),
            AgentKind::Truck,
            truck_radius,
        );
        Self::new(firefighters, truck)
    }

    /// Firefighters in list order
    pub fn firefighters(&self) -> &[Agent] {
        &self.firefighters
    }

    /// The truck
    pub fn truck(&self) -> &Agent {
        &self.truck
    }

    /// Total number of agents including the truck
    pub fn len(&self) -> usize {
        self.firefighters.len() + 1
    }

    /// A crew always has its truck, so this is never true
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Firefighters in list order, then the truck
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.firefighters.iter().chain(std::iter::once(&self.truck))
    }

    /// Move targets for every agent, computed from one grid snapshot
    ///
    /// Targets come back in `iter` order. Nothing moves until `apply_moves`.
    pub fn retarget(&self, grid: &CellBuffer) -> Vec<(usize, usize)> {
        self.iter()
            .map(|agent| {
                let (x, y) = agent.position();
                find_move_target(x, y, grid)
            })
            .collect()
    }

    /// Apply targets produced by `retarget`
    ///
    /// # Panics
    ///
    /// Panics if `targets` does not hold one entry per agent
    pub fn apply_moves(&mut self, targets: &[(usize, usize)]) {
        assert_eq!(targets.len(), self.len(), "one target per agent");
        let agents = self
            .firefighters
            .iter_mut()
            .chain(std::iter::once(&mut self.truck));
        for (agent, &target) in agents.zip(targets) {
            if agent.position() != target {
                trace!(
                    "{:?} moves {:?} -> {:?}",
                    agent.kind(),
                    agent.position(),
                    target
                );
            }
            agent.move_to(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::CellState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deploy_within_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let crew = Crew::deploy(16, 12, 8, 5, 11, &mut rng);
        assert_eq!(crew.firefighters().len(), 8);
        assert_eq!(crew.len(), 9);
        for agent in crew.iter() {
            let (x, y) = agent.position();
            assert!(x < 16 && y < 12);
        }
        assert_eq!(crew.truck().kind(), AgentKind::Truck);
        assert_eq!(crew.truck().radius(), 11);
        assert_eq!(crew.firefighters()[0].radius(), 5);
    }

    #[test]
    fn test_iter_order_truck_last() {
        let crew = Crew::new(
            vec![Agent::firefighter(1, 1), Agent::firefighter(2, 2)],
            Agent::truck(3, 3),
        );
        let kinds: Vec<AgentKind> = crew.iter().map(Agent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                AgentKind::Firefighter,
                AgentKind::Firefighter,
                AgentKind::Truck
            ]
        );
    }

    #[test]
    fn test_retarget_uses_one_snapshot() {
        let mut grid = CellBuffer::new(10, 10);
        grid.set(5, 0, CellState::Fire);
        let mut crew = Crew::new(
            vec![Agent::firefighter(0, 0), Agent::firefighter(9, 0)],
            Agent::truck(5, 9),
        );

        let targets = crew.retarget(&grid);
        assert_eq!(targets, vec![(2, 0), (7, 0), (5, 7)]);

        crew.apply_moves(&targets);
        assert_eq!(crew.firefighters()[0].position(), (2, 0));
        assert_eq!(crew.firefighters()[1].position(), (7, 0));
        assert_eq!(crew.truck().position(), (5, 7));
    }
}
