//! Data-driven game balance
//!
//! Everything a designer might want to retune without touching the simulation
//! lives here. Defaults match the shipped balance; a partial JSON document can
//! override any subset of fields.

use serde::{Deserialize, Serialize};

/// Balance values consumed by the simulation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player hit points
    pub max_health: i32,
    /// Cap on bullets per burst
    pub max_bullet_count: u32,

    /// Seconds between honored fire actions
    pub bullet_cooldown: f32,
    /// Cooldown while the faster-shooting effect is active
    pub fast_bullet_cooldown: f32,

    /// Base enemy spawn interval; shrinks as score grows
    pub base_spawn_interval: f32,
    /// Floor on the spawn interval so density stays playable
    pub min_spawn_interval: f32,
    /// Effective gap applied after each spawn within a wave burst
    pub spawn_retrigger_gap: f32,
    /// Cap on the score/wave speed bonus added to the enemy base speed
    pub enemy_speed_bonus_cap: f32,

    /// Fixed power-up spawn cadence, independent of wave and score
    pub power_up_spawn_interval: f32,

    /// Timed effect durations, seconds
    pub bullet_boost_duration: f32,
    pub speed_boost_duration: f32,
    pub faster_shooting_duration: f32,
    pub invincibility_duration: f32,
    pub score_multiplier_duration: f32,

    /// Speed boost magnitude
    pub speed_boost_multiplier: f32,
    /// Score multiplier magnitude
    pub score_multiplier: f32,

    /// How long transient UI messages stay up
    pub message_display_time: f32,
    /// Pacing pause between waves
    pub wave_pause_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_health: 3,
            max_bullet_count: 5,
            bullet_cooldown: 0.2,
            fast_bullet_cooldown: 0.05,
            base_spawn_interval: 1.0,
            min_spawn_interval: 0.5,
            spawn_retrigger_gap: 0.5,
            enemy_speed_bonus_cap: 300.0,
            power_up_spawn_interval: 5.0,
            bullet_boost_duration: 10.0,
            speed_boost_duration: 10.0,
            faster_shooting_duration: 10.0,
            invincibility_duration: 10.0,
            score_multiplier_duration: 10.0,
            speed_boost_multiplier: 1.5,
            score_multiplier: 2.0,
            message_display_time: 2.0,
            wave_pause_duration: 2.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_balance() {
        let t = Tuning::default();
        assert_eq!(t.max_health, 3);
        assert_eq!(t.max_bullet_count, 5);
        assert_eq!(t.bullet_cooldown, 0.2);
        assert_eq!(t.speed_boost_multiplier, 1.5);
        assert_eq!(t.score_multiplier, 2.0);
    }

    #[test]
    fn test_partial_json_overrides() {
        let t = Tuning::from_json(r#"{"max_health": 5, "bullet_cooldown": 0.1}"#).unwrap();
        assert_eq!(t.max_health, 5);
        assert_eq!(t.bullet_cooldown, 0.1);
        // Untouched fields keep their defaults
        assert_eq!(t.max_bullet_count, 5);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
