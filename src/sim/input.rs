//! Input mapper
//!
//! Converts raw key/pointer events from the host into movement intent and a
//! fire edge. WASD and arrow keys are tracked as separate flag sets and OR'd
//! together, so releasing one key never clears intent held by the other set.

use glam::Vec2;

/// Movement keys understood by the mapper (WASD and arrows map to the same
/// four directions)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

/// Movement source selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Keyboard,
    /// Player seeks the pointer position each tick
    Pointer,
}

/// Intent state read by the simulation step once per tick.
///
/// Key and pointer events may arrive at any time relative to ticks; the most
/// recent write wins before the next tick reads it.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    wasd: [bool; 4],
    arrows: [bool; 4],
    pointer: Vec2,
    mode: ControlMode,
    fire_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press/release
    pub fn key_event(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::A => self.wasd[0] = pressed,
            MoveKey::D => self.wasd[1] = pressed,
            MoveKey::W => self.wasd[2] = pressed,
            MoveKey::S => self.wasd[3] = pressed,
            MoveKey::Left => self.arrows[0] = pressed,
            MoveKey::Right => self.arrows[1] = pressed,
            MoveKey::Up => self.arrows[2] = pressed,
            MoveKey::Down => self.arrows[3] = pressed,
        }
    }

    /// Record the latest pointer position (field coordinates, y-up)
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Toggle keyboard-relative vs pointer-seek movement
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ControlMode::Keyboard => ControlMode::Pointer,
            ControlMode::Pointer => ControlMode::Keyboard,
        };
    }

    /// Request a shot (key press edge or click). Latched until the next tick
    /// consumes it; firing rate is still gated by the cooldown.
    pub fn request_fire(&mut self) {
        self.fire_requested = true;
    }

    /// Consume the pending fire edge, if any
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_requested)
    }

    /// Keyboard intent as a direction vector with components in {-1, 0, 1}
    pub fn intent(&self) -> Vec2 {
        let left = self.wasd[0] || self.arrows[0];
        let right = self.wasd[1] || self.arrows[1];
        let up = self.wasd[2] || self.arrows[2];
        let down = self.wasd[3] || self.arrows[3];

        let mut dir = Vec2::ZERO;
        if left {
            dir.x -= 1.0;
        }
        if right {
            dir.x += 1.0;
        }
        if up {
            dir.y += 1.0;
        }
        if down {
            dir.y -= 1.0;
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_or_together() {
        let mut input = InputState::new();
        input.key_event(MoveKey::A, true);
        input.key_event(MoveKey::Left, true);
        assert_eq!(input.intent().x, -1.0);

        // Releasing 'a' leaves the arrow intent in place
        input.key_event(MoveKey::A, false);
        assert_eq!(input.intent().x, -1.0);

        input.key_event(MoveKey::Left, false);
        assert_eq!(input.intent(), Vec2::ZERO);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputState::new();
        input.key_event(MoveKey::A, true);
        input.key_event(MoveKey::D, true);
        assert_eq!(input.intent().x, 0.0);
    }

    #[test]
    fn test_fire_edge_consumed_once() {
        let mut input = InputState::new();
        assert!(!input.take_fire());
        input.request_fire();
        assert!(input.take_fire());
        assert!(!input.take_fire());
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        let mut input = InputState::new();
        assert_eq!(input.mode(), ControlMode::Keyboard);
        input.toggle_mode();
        assert_eq!(input.mode(), ControlMode::Pointer);
        input.toggle_mode();
        assert_eq!(input.mode(), ControlMode::Keyboard);
    }
}
