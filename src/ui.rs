//! Clickable screen regions
//!
//! The host reports raw click positions in field coordinates; this module maps
//! them to the mode-dependent UI actions. Regions are fixed rectangles sized
//! for the 1000x800 field.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::GameMode;

/// Axis-aligned screen rectangle, inclusive on both edges
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Pause button in the top-right corner, active while Playing
pub const PAUSE_BUTTON: Rect =
    Rect::new(FIELD_WIDTH - 80.0, FIELD_HEIGHT - 40.0, FIELD_WIDTH, FIELD_HEIGHT - 10.0);

/// Resume button on the pause overlay
pub const RESUME_BUTTON: Rect = Rect::new(200.0, 220.0, 300.0, 250.0);

/// Restart button on the game-over screen
pub const RESTART_BUTTON: Rect = Rect::new(450.0, 385.0, 550.0, 425.0);

/// UI action resolved from a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Pause,
    Resume,
    Restart,
}

/// Map a click to an action. Only the region belonging to the current mode is
/// live; everywhere else the click falls through (in Playing, the host treats
/// a fall-through as a fire request).
pub fn handle_click(mode: GameMode, pos: Vec2) -> Option<UiAction> {
    match mode {
        GameMode::Playing if PAUSE_BUTTON.contains(pos) => Some(UiAction::Pause),
        GameMode::Paused if RESUME_BUTTON.contains(pos) => Some(UiAction::Resume),
        GameMode::GameOver if RESTART_BUTTON.contains(pos) => Some(UiAction::Restart),
        _ => None,
    }
}
