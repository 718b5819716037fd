//! Stellar Strike headless demo
//!
//! Runs the simulation for a fixed stretch of wall-clock time with a simple
//! autopilot on the controls, logging cues and a final summary. Useful for
//! exercising the full loop without a display.

use std::thread;
use std::time::Duration;

use glam::Vec2;

use stellar_strike::consts::*;
use stellar_strike::platform::{Clock, CuePlayer, LogCuePlayer, SystemClock};
use stellar_strike::sim::{tick, GameMode, InputState, MoveKey, SimulationState};
use stellar_strike::Tuning;

const DEMO_SECONDS: f32 = 30.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("Stellar Strike demo starting (seed {seed})");

    let mut state = SimulationState::new(seed, Tuning::default());
    let mut input = InputState::new();
    let mut cues = LogCuePlayer;

    let clock = SystemClock::new();
    let mut last = clock.now();
    while clock.now() < DEMO_SECONDS && state.mode != GameMode::GameOver {
        let now = clock.now();
        let dt = now - last;
        last = now;

        autopilot(&state, &mut input);
        tick(&mut state, &mut input, now, dt);
        for cue in state.drain_cues() {
            cues.play(cue);
        }

        thread::sleep(Duration::from_secs_f32(TICK_PERIOD));
    }

    log::info!(
        "demo finished: score {}, wave {}, health {}",
        state.score,
        state.waves.wave,
        state.player.health
    );
}

/// Steer toward the nearest power-up (or back to center) and hold the trigger.
fn autopilot(state: &SimulationState, input: &mut InputState) {
    let target = state
        .power_ups
        .iter()
        .map(|p| p.pos)
        .min_by(|a, b| {
            let pa = a.distance_squared(state.player.pos);
            let pb = b.distance_squared(state.player.pos);
            pa.total_cmp(&pb)
        })
        .unwrap_or(Vec2::new(FIELD_WIDTH / 2.0, 50.0));

    let dx = target.x - state.player.pos.x;
    input.key_event(MoveKey::A, dx < -5.0);
    input.key_event(MoveKey::D, dx > 5.0);
    input.request_fire();
}
