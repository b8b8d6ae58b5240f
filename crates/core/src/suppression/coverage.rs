//! Water suppression inside an agent's range

use super::Agent;
use crate::core_types::CellState;
use crate::grid::CellBuffer;

/// Turn burning cells inside `agent`'s range into water
///
/// For every in-range cell: if the *current* state is `Ignition` or `Fire`, the
/// next state becomes `Water`. Otherwise, if an earlier rule of this tick already
/// wrote `Ignition` into the *next* buffer, that fresh ignition is overridden
/// with `Water` too, so agents catch fire the moment it appears.
///
/// The square range is clipped to the grid before it is scanned. Returns the
/// number of cells written.
pub fn apply_suppression(current: &CellBuffer, next: &mut CellBuffer, agent: &Agent) -> usize {
    let (x, y) = agent.position();
    let r = agent.radius();
    let (Some(max_x), Some(max_y)) = (
        current.width().checked_sub(1),
        current.height().checked_sub(1),
    ) else {
        return 0;
    };
    let mut written = 0;

    for cy in y.saturating_sub(r)..=y.saturating_add(r).min(max_y) {
        for cx in x.saturating_sub(r)..=x.saturating_add(r).min(max_x) {
            if current.get(cx, cy).is_burning() || next.get(cx, cy) == CellState::Ignition {
                next.set(cx, cy, CellState::Water);
                written += 1;
            }
        }
    }

    written
}
