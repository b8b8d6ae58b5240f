//! Leap-toward-nearest-fire movement heuristic
//!
//! An agent standing on a burning cell stays put. Otherwise it scans rings of
//! increasing radius along eight compass directions; the first burning cell found
//! decides the direction and the agent leaps `LEAP_DISTANCE` cells that way. It
//! does not step onto the fire cell itself.

use crate::grid::CellBuffer;

/// Scan order of the eight directions at each radius; earlier entries win ties
pub const SEARCH_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Cells moved per tick toward the detected fire
pub const LEAP_DISTANCE: isize = 2;

/// Next position of an agent at `(x, y)` given the post-transition grid
///
/// Radii `1..=max(width, height) - 1` are scanned outward, so the nearest ring
/// always wins over a farther one. Without any burning cell in sight the agent
/// stays where it is. A leap that would leave the grid is clamped to the edge.
pub fn find_move_target(x: usize, y: usize, grid: &CellBuffer) -> (usize, usize) {
    if !grid.in_bounds(x, y) || grid.get(x, y).is_burning() {
        return (x, y);
    }

    let max_radius = grid.width().max(grid.height()).saturating_sub(1) as isize;
    for radius in 1..=max_radius {
        for &(dx, dy) in &SEARCH_DIRECTIONS {
            let Some((cx, cy)) = grid.offset(x, y, dx * radius, dy * radius) else {
                continue;
            };
            if grid.get(cx, cy).is_burning() {
                return leap(x, y, dx, dy, grid);
            }
        }
    }

    (x, y)
}

fn leap(x: usize, y: usize, dx: isize, dy: isize, grid: &CellBuffer) -> (usize, usize) {
    let max_x = grid.width() as isize - 1;
    let max_y = grid.height() as isize - 1;
    let tx = (x as isize + LEAP_DISTANCE * dx).clamp(0, max_x);
    let ty = (y as isize + LEAP_DISTANCE * dy).clamp(0, max_y);
    (tx as usize, ty as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::CellState;

    #[test]
    fn test_stays_on_burning_cell() {
        let mut grid = CellBuffer::new(10, 10);
        grid.set(4, 4, CellState::Ignition);
        grid.set(5, 4, CellState::Fire);
        assert_eq!(find_move_target(4, 4, &grid), (4, 4));
    }

    #[test]
    fn test_leaps_two_cells_toward_fire() {
        let mut grid = CellBuffer::new(10, 10);
        grid.set(0, 3, CellState::Fire);
        assert_eq!(find_move_target(0, 0, &grid), (0, 2));
    }

    #[test]
    fn test_no_fire_no_move() {
        let grid = CellBuffer::with_value(10, 10, CellState::Tree);
        assert_eq!(find_move_target(3, 7, &grid), (3, 7));
    }

    #[test]
    fn test_ember_is_not_a_target() {
        let mut grid = CellBuffer::new(10, 10);
        grid.set(5, 7, CellState::Ember);
        assert_eq!(find_move_target(5, 5, &grid), (5, 5));
    }

    #[test]
    fn test_nearest_ring_wins() {
        let mut grid = CellBuffer::new(20, 20);
        // Farther fire in the first-scanned direction
        grid.set(15, 10, CellState::Fire);
        // Nearer fire in the last-scanned direction
        grid.set(8, 12, CellState::Fire);
        assert_eq!(find_move_target(10, 10, &grid), (8, 12));
    }

    #[test]
    fn test_direction_order_breaks_ties() {
        let mut grid = CellBuffer::new(20, 20);
        grid.set(7, 10, CellState::Ignition); // (-1, 0) at radius 3
        grid.set(13, 10, CellState::Ignition); // (1, 0) at radius 3
        assert_eq!(find_move_target(10, 10, &grid), (12, 10));
    }

    #[test]
    fn test_off_axis_fire_is_not_seen() {
        let mut grid = CellBuffer::new(20, 20);
        // Not on any of the eight rays from (10, 10)
        grid.set(11, 13, CellState::Fire);
        assert_eq!(find_move_target(10, 10, &grid), (10, 10));
    }

    #[test]
    fn test_leap_clamped_at_edge() {
        let mut grid = CellBuffer::new(10, 10);
        grid.set(9, 9, CellState::Fire);
        // Fire at radius 1 diagonally, leap of 2 would reach (10, 10)
        assert_eq!(find_move_target(8, 8, &grid), (9, 9));
    }
}
