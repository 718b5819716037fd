//! Game state and core simulation types
//!
//! The entity stores are plain growable collections with no behavior of their
//! own; all mutation happens in the simulation step. `SimulationState` is the
//! single aggregate passed into the tick, so there are no ambient globals and
//! a single writer by construction.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::spawn::WaveState;
use super::TimedEffects;
use crate::consts::*;
use crate::tuning::Tuning;

/// Top-level game mode; exactly one active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Active gameplay (initial)
    Playing,
    /// Simulation frozen, resume gesture returns to Playing
    Paused,
    /// Terminal until restart
    GameOver,
}

/// Fire-and-forget sound cues emitted by the simulation step.
///
/// The tick pushes these onto a queue; the host drains them to a
/// [`CuePlayer`](crate::platform::CuePlayer) after each frame. The simulation
/// never waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Shoot,
    EnemyHit,
    PlayerHit,
    PowerUpCollect,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Bounded 0..=max_health
    pub health: i32,
    /// Bullets per burst, bounded 1..=max_bullet_count
    pub bullet_count: u32,
    /// Timestamp of the last honored fire action
    pub last_shot: f32,
}

/// A player bullet travelling straight up
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    /// Vertical velocity, pixels per second (positive = up)
    pub vel_y: f32,
}

/// A descending enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Downward speed, pixels per second
    pub speed: f32,
    /// Cosmetic spin angle in degrees, monotonically increasing
    pub rotation: f32,
}

/// The six power-up kinds; the effect table in the tick is the full contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    BulletIncrease,
    SpeedBoost,
    HealthRestore,
    FasterShooting,
    Invincibility,
    ScoreMultiplier,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::BulletIncrease,
        PowerUpKind::SpeedBoost,
        PowerUpKind::HealthRestore,
        PowerUpKind::FasterShooting,
        PowerUpKind::Invincibility,
        PowerUpKind::ScoreMultiplier,
    ];
}

/// A falling power-up pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub rotation: f32,
}

/// Decorative background star; created once at init, never collides
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec2,
}

/// Transient UI message (wave banners, power-up pickups)
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub expires_at: f32,
}

/// Complete simulation state for one game instance
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub mode: GameMode,
    pub player: Player,
    pub score: u64,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    /// Immutable after init; survives restarts
    pub stars: Vec<Star>,
    pub effects: TimedEffects,
    pub waves: WaveState,
    pub message: Option<Message>,
    pub tuning: Tuning,
    cues: Vec<AudioCue>,
    rng: Pcg32,
    seed: u64,
}

impl SimulationState {
    /// Create a fresh game with the given RNG seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..NUM_STARS)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(0.0..FIELD_WIDTH),
                    rng.random_range(0.0..FIELD_HEIGHT),
                ),
            })
            .collect();

        Self {
            mode: GameMode::Playing,
            player: Player {
                pos: Vec2::new(FIELD_WIDTH / 2.0, 50.0),
                health: tuning.max_health,
                bullet_count: 1,
                last_shot: 0.0,
            },
            score: 0,
            bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            stars,
            effects: TimedEffects::default(),
            waves: WaveState::default(),
            message: None,
            tuning,
            cues: Vec::new(),
            rng,
            seed,
        }
    }

    /// Explicit pause gesture (Playing -> Paused)
    pub fn pause(&mut self) {
        if self.mode == GameMode::Playing {
            self.mode = GameMode::Paused;
        }
    }

    /// Explicit resume gesture (Paused -> Playing)
    pub fn resume(&mut self) {
        if self.mode == GameMode::Paused {
            self.mode = GameMode::Playing;
        }
    }

    /// Full reset back to Playing. Honored only from GameOver; the starfield
    /// is decorative and persists across runs.
    pub fn restart(&mut self) {
        if self.mode != GameMode::GameOver {
            return;
        }
        log::info!("restarting after game over (final score {})", self.score);
        self.mode = GameMode::Playing;
        self.player = Player {
            pos: Vec2::new(FIELD_WIDTH / 2.0, 50.0),
            health: self.tuning.max_health,
            bullet_count: 1,
            last_shot: 0.0,
        };
        self.score = 0;
        self.bullets.clear();
        self.enemies.clear();
        self.power_ups.clear();
        self.effects = TimedEffects::default();
        self.waves = WaveState::default();
        self.message = None;
        self.cues.clear();
    }

    /// Queue a sound cue for the host to dispatch
    pub fn push_cue(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }

    /// Drain queued cues (called by the host after each frame)
    pub fn drain_cues(&mut self) -> impl Iterator<Item = AudioCue> + '_ {
        self.cues.drain(..)
    }

    /// Show a transient UI message
    pub fn set_message(&mut self, text: impl Into<String>, now: f32) {
        self.message = Some(Message {
            text: text.into(),
            expires_at: now + self.tuning.message_display_time,
        });
    }

    /// Run seed, for logging/reproduction
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
