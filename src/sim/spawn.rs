//! Enemy/power-up spawning and wave progression
//!
//! The wave controller is the sole producer of spawn quota; the spawner only
//! consumes it. Power-ups spawn on a fixed cadence independent of wave state.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, PowerUp, PowerUpKind, SimulationState};
use crate::consts::*;
use crate::tuning::Tuning;

/// Wave and spawn pacing state
#[derive(Debug, Clone)]
pub struct WaveState {
    /// Current wave number, >= 1
    pub wave: u32,
    /// Enemy spawns still owed for this wave
    pub quota: u32,
    pub last_spawn: f32,
    pub last_power_up_spawn: f32,
    /// A new wave may not begin before this timestamp
    pub next_wave_at: f32,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave: 1,
            quota: 0,
            last_spawn: 0.0,
            last_power_up_spawn: 0.0,
            next_wave_at: 0.0,
        }
    }
}

/// Enemy spawn interval: shrinks as score grows, floored to keep the field
/// playable.
pub fn spawn_interval(tuning: &Tuning, score: u64) -> f32 {
    (tuning.base_spawn_interval / (1.0 + score as f32 * 0.01)).max(tuning.min_spawn_interval)
}

/// Enemy descent speed: grows with score and wave, capped.
pub fn enemy_speed(tuning: &Tuning, score: u64, wave: u32) -> f32 {
    ENEMY_BASE_SPEED + (score as f32 * 5.0 + wave as f32 * 2.0).min(tuning.enemy_speed_bonus_cap)
}

/// Advance the wave when the previous one is exhausted: quota spent, no live
/// enemies, and the pacing pause has elapsed.
pub fn advance_wave(state: &mut SimulationState, now: f32) {
    let waves = &state.waves;
    if waves.quota == 0 && state.enemies.is_empty() && now > waves.next_wave_at {
        let wave = waves.wave + 1;
        state.waves.wave = wave;
        state.waves.quota = wave / 2 + 1;
        state.waves.next_wave_at = now + state.tuning.wave_pause_duration;
        state.set_message(format!("Wave {wave} Started!"), now);
        log::info!("wave {} started, quota {}", wave, state.waves.quota);
    }
}

/// Spawn one enemy at the top boundary if quota remains and the interval has
/// elapsed.
///
/// After a spawn, `last_spawn` is set to `now - interval + retrigger_gap`
/// rather than `now`: every spawn after the first in a burst arrives at the
/// fixed retrigger gap instead of the full interval. Long-standing pacing
/// behavior, kept as-is.
pub fn maybe_spawn_enemy(state: &mut SimulationState, now: f32) {
    if state.waves.quota == 0 {
        return;
    }
    let interval = spawn_interval(&state.tuning, state.score);
    if now - state.waves.last_spawn <= interval {
        return;
    }

    let speed = enemy_speed(&state.tuning, state.score, state.waves.wave);
    let gap = state.tuning.spawn_retrigger_gap;
    let x = state.rng_mut().random_range(10.0..FIELD_WIDTH - 10.0);
    state.enemies.push(Enemy {
        pos: Vec2::new(x, FIELD_HEIGHT),
        speed,
        rotation: 0.0,
    });
    state.waves.quota -= 1;
    state.waves.last_spawn = now - interval + gap;
}

/// Spawn a uniform-random power-up on the fixed cadence, independent of wave
/// and score.
pub fn maybe_spawn_power_up(state: &mut SimulationState, now: f32) {
    if now - state.waves.last_power_up_spawn <= state.tuning.power_up_spawn_interval {
        return;
    }
    let rng = state.rng_mut();
    let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
    let x = rng.random_range(10.0..FIELD_WIDTH - 10.0);
    state.power_ups.push(PowerUp {
        kind,
        pos: Vec2::new(x, FIELD_HEIGHT),
        rotation: 0.0,
    });
    state.waves.last_power_up_spawn = now;
}
