//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay pure and host-agnostic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Driven by the host's clock via explicit `now`/`dt` arguments

pub mod collision;
pub mod effects;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use effects::{Effect, TimedEffects};
pub use input::{ControlMode, InputState, MoveKey};
pub use spawn::WaveState;
pub use state::{
    AudioCue, Bullet, Enemy, GameMode, Player, PowerUp, PowerUpKind, SimulationState, Star,
};
pub use tick::tick;
