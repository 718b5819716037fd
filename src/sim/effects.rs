//! Timed power-up effect tracker
//!
//! Each active effect is an absolute expiry timestamp plus, where relevant, a
//! magnitude. Expiry is reconciled every tick against the current time rather
//! than being event-driven, so a magnitude reverts to its baseline exactly
//! once after its timer runs out.

use super::state::Player;

/// The five timed power-up effects
///
/// Health restore is instantaneous and has no timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Extra bullets per burst (magnitude lives on the player)
    BulletBoost,
    /// Player speed multiplier
    SpeedBoost,
    /// Shorter fire cooldown (presence-only, queried by the fire action)
    FasterShooting,
    /// Player takes no damage from enemy contact
    Invincibility,
    /// Score award multiplier
    ScoreMultiplier,
}

/// Expiry timestamps and magnitudes for all active effects
#[derive(Debug, Clone)]
pub struct TimedEffects {
    bullet_boost_until: f32,
    speed_boost_until: f32,
    faster_shooting_until: f32,
    invincible_until: f32,
    score_boost_until: f32,
    /// Player speed factor, baseline 1.0
    pub speed_multiplier: f32,
    /// Score award factor, baseline 1.0
    pub score_multiplier: f32,
}

impl Default for TimedEffects {
    fn default() -> Self {
        Self {
            bullet_boost_until: 0.0,
            speed_boost_until: 0.0,
            faster_shooting_until: 0.0,
            invincible_until: 0.0,
            score_boost_until: 0.0,
            speed_multiplier: 1.0,
            score_multiplier: 1.0,
        }
    }
}

impl TimedEffects {
    /// Whether an effect is active at `now` (strictly before its expiry)
    pub fn is_active(&self, effect: Effect, now: f32) -> bool {
        now < self.expiry(effect)
    }

    /// Start (or refresh) an effect. Re-activating an already-active effect
    /// overwrites its expiry and magnitude; durations never stack.
    ///
    /// `magnitude` is ignored for presence-only effects.
    pub fn activate(&mut self, effect: Effect, now: f32, duration: f32, magnitude: f32) {
        let until = now + duration;
        match effect {
            Effect::BulletBoost => self.bullet_boost_until = until,
            Effect::SpeedBoost => {
                self.speed_boost_until = until;
                self.speed_multiplier = magnitude;
            }
            Effect::FasterShooting => self.faster_shooting_until = until,
            Effect::Invincibility => self.invincible_until = until,
            Effect::ScoreMultiplier => {
                self.score_boost_until = until;
                self.score_multiplier = magnitude;
            }
        }
    }

    /// Revert every expired effect whose magnitude differs from baseline.
    ///
    /// Idempotent: reconciling when nothing has expired changes nothing, and
    /// an already-reverted magnitude is left alone.
    pub fn reconcile(&mut self, player: &mut Player, now: f32) {
        if now > self.bullet_boost_until && player.bullet_count > 1 {
            player.bullet_count = 1;
        }
        if now > self.speed_boost_until && self.speed_multiplier != 1.0 {
            self.speed_multiplier = 1.0;
        }
        if now > self.score_boost_until && self.score_multiplier != 1.0 {
            self.score_multiplier = 1.0;
        }
        // Faster shooting and invincibility are presence-only; their expiry
        // is observed directly by is_active callers.
    }

    fn expiry(&self, effect: Effect) -> f32 {
        match effect {
            Effect::BulletBoost => self.bullet_boost_until,
            Effect::SpeedBoost => self.speed_boost_until,
            Effect::FasterShooting => self.faster_shooting_until,
            Effect::Invincibility => self.invincible_until,
            Effect::ScoreMultiplier => self.score_boost_until,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn test_player() -> Player {
        Player {
            pos: Vec2::new(500.0, 50.0),
            health: 3,
            bullet_count: 1,
            last_shot: 0.0,
        }
    }

    #[test]
    fn test_activate_and_expire() {
        let mut fx = TimedEffects::default();
        fx.activate(Effect::SpeedBoost, 10.0, 10.0, 1.5);
        assert!(fx.is_active(Effect::SpeedBoost, 15.0));
        assert!(!fx.is_active(Effect::SpeedBoost, 20.0));
        assert_eq!(fx.speed_multiplier, 1.5);

        let mut player = test_player();
        fx.reconcile(&mut player, 20.01);
        assert_eq!(fx.speed_multiplier, 1.0);
    }

    #[test]
    fn test_reconcile_is_idempotent_when_nothing_expired() {
        let mut fx = TimedEffects::default();
        fx.activate(Effect::SpeedBoost, 0.0, 10.0, 1.5);
        fx.activate(Effect::ScoreMultiplier, 0.0, 10.0, 2.0);
        let mut player = test_player();
        player.bullet_count = 3;
        fx.activate(Effect::BulletBoost, 0.0, 10.0, 0.0);

        fx.reconcile(&mut player, 5.0);
        assert_eq!(fx.speed_multiplier, 1.5);
        assert_eq!(fx.score_multiplier, 2.0);
        assert_eq!(player.bullet_count, 3);
    }

    #[test]
    fn test_reactivation_overwrites_without_stacking() {
        let mut fx = TimedEffects::default();
        fx.activate(Effect::Invincibility, 0.0, 10.0, 0.0);
        fx.activate(Effect::Invincibility, 5.0, 10.0, 0.0);
        // New expiry is 15, not 20
        assert!(fx.is_active(Effect::Invincibility, 14.9));
        assert!(!fx.is_active(Effect::Invincibility, 15.1));
    }

    #[test]
    fn test_bullet_count_reverts_once() {
        let mut fx = TimedEffects::default();
        let mut player = test_player();
        player.bullet_count = 2;
        fx.activate(Effect::BulletBoost, 0.0, 10.0, 0.0);

        fx.reconcile(&mut player, 10.01);
        assert_eq!(player.bullet_count, 1);

        // A later manual increase is untouched by further reconciles
        player.bullet_count = 4;
        fx.activate(Effect::BulletBoost, 20.0, 10.0, 0.0);
        fx.reconcile(&mut player, 25.0);
        assert_eq!(player.bullet_count, 4);
    }
}
