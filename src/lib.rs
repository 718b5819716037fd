//! Stellar Strike - a top-down arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: The game simulation (entities, timed effects, spawning, the tick)
//! - `platform`: Collaborator traits for clock, audio cues, and rendering
//! - `tuning`: Data-driven game balance
//! - `ui`: Fixed window-space click regions for mode transitions

pub mod platform;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal host tick period in seconds (~60 Hz timer)
    pub const TICK_PERIOD: f32 = 1.0 / 60.0;

    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Player defaults - triangle bounding box, pixels per second
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Pointer-seek movement stops within this distance of the cursor
    pub const POINTER_STOP_DIST: f32 = 10.0;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 400.0;
    /// Horizontal spacing between bullets in a fanned burst
    pub const BULLET_FAN_OFFSET: f32 = 10.0;

    /// Enemy defaults - pentagon bounding box
    pub const ENEMY_SIZE: f32 = 20.0;
    pub const ENEMY_BASE_SPEED: f32 = 100.0;
    /// Cosmetic spin, degrees per second
    pub const ENEMY_ROTATION_SPEED: f32 = 90.0;

    /// Power-up defaults
    pub const POWER_UP_SIZE: f32 = 15.0;
    pub const POWER_UP_SPEED: f32 = 150.0;
    pub const POWER_UP_ROTATION_SPEED: f32 = 90.0;

    /// Decorative starfield density
    pub const NUM_STARS: usize = 200;

    /// Hitboxes shrink to 80% of nominal size to compensate for the
    /// non-rectangular sprite shapes
    pub const HITBOX_SCALE: f32 = 0.8;
}
