//! Firefighting agents
//!
//! Agents are points on the grid with a square suppression range:
//! - `agent`: the agent type and its kinds (firefighter, truck)
//! - `coverage`: turning burning cells inside a range into water
//! - `pathing`: the leap-toward-nearest-fire movement heuristic
//! - `crew`: the ordered set of agents deployed for a run

pub mod agent;
pub mod coverage;
pub mod crew;
pub mod pathing;

pub use agent::{Agent, AgentKind};
pub use coverage::apply_suppression;
pub use crew::Crew;
pub use pathing::{find_move_target, LEAP_DISTANCE, SEARCH_DIRECTIONS};
