//! Host integration seams
//!
//! The simulation core never talks to a clock, audio device, or display
//! directly; the host supplies these behind small traits so the core stays
//! testable and portable.

use std::time::Instant;

use crate::sim::{AudioCue, SimulationState};

/// Monotonic time source in seconds
pub trait Clock {
    fn now(&self) -> f32;
}

/// Wall clock measured from construction
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }
}

/// Sink for sound cues drained from the simulation after each frame.
///
/// Playback is fire-and-forget; implementations must not block the caller.
pub trait CuePlayer {
    fn play(&mut self, cue: AudioCue);
}

/// Discards all cues (headless hosts, tests)
pub struct NullCuePlayer;

impl CuePlayer for NullCuePlayer {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Logs each cue at debug level instead of playing it
pub struct LogCuePlayer;

impl CuePlayer for LogCuePlayer {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("cue: {cue:?}");
    }
}

/// Presents one frame of simulation state
pub trait Renderer {
    fn frame(&mut self, state: &SimulationState);
}

/// Draws nothing (headless hosts, tests)
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn frame(&mut self, _state: &SimulationState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_null_sinks_accept_everything() {
        let mut cues = NullCuePlayer;
        cues.play(AudioCue::Shoot);
        let mut renderer = NullRenderer;
        let state = SimulationState::new(1, crate::Tuning::default());
        renderer.frame(&state);
    }
}
