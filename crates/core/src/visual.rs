//! Rendering boundary: color table and agent overlay
//!
//! The only place where cell states turn back into numeric codes for display.
//! Renderers take a `FrameView`, compose the code frame and map codes to colors.

use crate::core_types::AGENT_OVERLAY_CODE;
use crate::simulation::FrameView;

/// Overlay code of the truck's 3×3 block
pub const TRUCK_OVERLAY_CODE: u8 = 8;

/// RGB color per code: the seven cell states, the agent overlay (6) and the truck (8)
pub const PALETTE: [[u8; 3]; 9] = [
    [255, 255, 255], // ground
    [0, 175, 0],     // tree
    [0, 215, 0],     // sapling
    [200, 100, 0],   // ignition
    [150, 30, 0],    // fire
    [100, 0, 0],     // ember
    [125, 38, 205],  // firefighter
    [0, 60, 255],    // water
    [155, 48, 255],  // truck
];

/// Color for a cell or overlay code
pub fn color_for_code(code: u8) -> Option<[u8; 3]> {
    PALETTE.get(usize::from(code)).copied()
}

/// One overlay cell drawn on top of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayCell {
    pub x: usize,
    pub y: usize,
    pub code: u8,
}

/// Cells covered by agent markers
///
/// One cell per firefighter, then the truck as a 3×3 block centered on its cell,
/// clipped to the grid.
pub fn agent_overlay(frame: &FrameView<'_>) -> Vec<OverlayCell> {
    let (width, height) = frame.dimensions();
    let mut cells: Vec<OverlayCell> = frame
        .firefighter_positions()
        .filter(|&(x, y)| x < width && y < height)
        .map(|(x, y)| OverlayCell {
            x,
            y,
            code: AGENT_OVERLAY_CODE,
        })
        .collect();

    let (tx, ty) = frame.truck_position();
    for dy in -1..=1_isize {
        for dx in -1..=1_isize {
            let (Some(x), Some(y)) = (tx.checked_add_signed(dx), ty.checked_add_signed(dy)) else {
                continue;
            };
            if x < width && y < height {
                cells.push(OverlayCell {
                    x,
                    y,
                    code: TRUCK_OVERLAY_CODE,
                });
            }
        }
    }

    cells
}

/// Row-major code frame with the agent overlay painted over the cell states
pub fn compose_frame(frame: &FrameView<'_>) -> Vec<u8> {
    let (width, _) = frame.dimensions();
    let mut codes: Vec<u8> = frame.states().iter().map(|s| s.code()).collect();
    for cell in agent_overlay(frame) {
        codes[cell.y * width + cell.x] = cell.code;
    }
    codes
}
