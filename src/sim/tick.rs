//! The simulation step
//!
//! Runs once per host timer wake-up while the game is in `Playing` mode,
//! integrating with the actual elapsed wall-clock delta. Stage order matters:
//! every later stage assumes the earlier stages' results.

use glam::Vec2;

use super::collision::overlaps;
use super::effects::Effect;
use super::input::{ControlMode, InputState};
use super::spawn;
use super::state::{AudioCue, Bullet, GameMode, PowerUpKind, SimulationState};
use crate::consts::*;

/// Advance the simulation by one tick.
///
/// `now` is the host clock in seconds, `dt` the elapsed delta since the last
/// tick. Does nothing outside `Playing` except discarding a pending fire edge
/// (firing while Paused or GameOver is rejected, not deferred).
pub fn tick(state: &mut SimulationState, input: &mut InputState, now: f32, dt: f32) {
    if state.mode != GameMode::Playing {
        input.take_fire();
        return;
    }

    // 1. Revert expired timed effects
    state.effects.reconcile(&mut state.player, now);

    // 2. Player movement, clamped to the field
    integrate_player(state, input, dt);

    // 3. Entity motion integration
    for bullet in &mut state.bullets {
        bullet.pos.y += bullet.vel_y * dt;
    }
    for enemy in &mut state.enemies {
        enemy.pos.y -= enemy.speed * dt;
        enemy.rotation += ENEMY_ROTATION_SPEED * dt;
    }
    for power_up in &mut state.power_ups {
        power_up.pos.y -= POWER_UP_SPEED * dt;
        power_up.rotation += POWER_UP_ROTATION_SPEED * dt;
    }

    // 4. Wave progression and spawning
    spawn::advance_wave(state, now);
    spawn::maybe_spawn_enemy(state, now);
    spawn::maybe_spawn_power_up(state, now);

    // 5-7. Collision resolution
    resolve_bullet_hits(state);
    resolve_player_enemy(state, now);
    collect_power_ups(state, now);

    // 8. Cull entities that left the field
    state.bullets.retain(|b| b.pos.y <= FIELD_HEIGHT);
    state.enemies.retain(|e| e.pos.y >= 0.0);
    state.power_ups.retain(|p| p.pos.y >= 0.0);

    // Expire the transient UI message
    if state.message.as_ref().is_some_and(|m| now > m.expires_at) {
        state.message = None;
    }

    // Consume the fire edge last; new bullets start moving next tick
    if input.take_fire() {
        fire(state, now);
    }
}

/// Integrate player position from intent at the effective speed (base speed
/// scaled by the active speed multiplier), clamped to the field on both axes.
fn integrate_player(state: &mut SimulationState, input: &InputState, dt: f32) {
    let speed = PLAYER_SPEED * state.effects.speed_multiplier;
    let pos = &mut state.player.pos;

    match input.mode() {
        ControlMode::Keyboard => {
            // Per-axis intent, so diagonals move full speed on each axis
            *pos += input.intent() * speed * dt;
        }
        ControlMode::Pointer => {
            let delta = input.pointer() - *pos;
            let dist = delta.length();
            // Suppress movement near the target to avoid jitter
            if dist > POINTER_STOP_DIST {
                *pos += delta / dist * speed * dt;
            }
        }
    }

    let half = PLAYER_SIZE / 2.0;
    pos.x = pos.x.clamp(half, FIELD_WIDTH - half);
    pos.y = pos.y.clamp(half, FIELD_HEIGHT - half);
}

/// Bullet-enemy collisions: the first overlapping bullet destroys the enemy
/// and is consumed with it. At most one bullet per enemy per tick; surviving
/// bullets keep flying.
fn resolve_bullet_hits(state: &mut SimulationState) {
    let mut destroyed = vec![false; state.enemies.len()];
    for (ei, hit) in destroyed.iter_mut().enumerate() {
        let enemy_pos = state.enemies[ei].pos;
        let Some(bi) = state
            .bullets
            .iter()
            .position(|b| overlaps(b.pos, BULLET_SIZE, enemy_pos, ENEMY_SIZE))
        else {
            continue;
        };
        state.bullets.remove(bi);
        *hit = true;
        // Fractional multipliers truncate toward zero
        state.score += (1.0 * state.effects.score_multiplier) as u64;
        state.push_cue(AudioCue::EnemyHit);
    }

    let mut idx = 0;
    state.enemies.retain(|_| {
        let keep = !destroyed[idx];
        idx += 1;
        keep
    });
}

/// Player-enemy collisions: an overlapping enemy is always removed; damage
/// and the hit cue apply only when not invincible. Health exhaustion ends the
/// game.
fn resolve_player_enemy(state: &mut SimulationState, now: f32) {
    let player_pos = state.player.pos;
    let mut hits = 0u32;
    state.enemies.retain(|e| {
        if overlaps(player_pos, PLAYER_SIZE, e.pos, ENEMY_SIZE) {
            hits += 1;
            false
        } else {
            true
        }
    });

    if hits == 0 || state.effects.is_active(Effect::Invincibility, now) {
        return;
    }

    for _ in 0..hits {
        state.push_cue(AudioCue::PlayerHit);
    }
    state.player.health = (state.player.health - hits as i32).max(0);
    if state.player.health == 0 {
        log::info!(
            "game over: score {}, wave {}",
            state.score,
            state.waves.wave
        );
        state.mode = GameMode::GameOver;
    }
}

/// Player-power-up collisions: the pickup is removed on contact, and its
/// effect applied subject to the guard table.
fn collect_power_ups(state: &mut SimulationState, now: f32) {
    let player_pos = state.player.pos;
    let mut collected = Vec::new();
    state.power_ups.retain(|pu| {
        if overlaps(player_pos, PLAYER_SIZE, pu.pos, POWER_UP_SIZE) {
            collected.push(pu.kind);
            false
        } else {
            true
        }
    });

    for kind in collected {
        apply_power_up(state, kind, now);
    }
}

fn apply_power_up(state: &mut SimulationState, kind: PowerUpKind, now: f32) {
    let t = state.tuning;
    match kind {
        PowerUpKind::BulletIncrease => {
            // Guarded: silently dropped at the bullet cap
            if state.player.bullet_count < t.max_bullet_count {
                state.player.bullet_count += 1;
                state
                    .effects
                    .activate(Effect::BulletBoost, now, t.bullet_boost_duration, 0.0);
                state.set_message("Bullet Power-Up!", now);
                state.push_cue(AudioCue::PowerUpCollect);
            }
        }
        PowerUpKind::SpeedBoost => {
            state.effects.activate(
                Effect::SpeedBoost,
                now,
                t.speed_boost_duration,
                t.speed_boost_multiplier,
            );
            state.set_message("Speed Boost!", now);
            state.push_cue(AudioCue::PowerUpCollect);
        }
        PowerUpKind::HealthRestore => {
            // Guarded: silently dropped at full health
            if state.player.health < t.max_health {
                state.player.health += 1;
                state.set_message("Health Restored!", now);
                state.push_cue(AudioCue::PowerUpCollect);
            }
        }
        PowerUpKind::FasterShooting => {
            state
                .effects
                .activate(Effect::FasterShooting, now, t.faster_shooting_duration, 0.0);
            state.set_message("Faster Shooting!", now);
            state.push_cue(AudioCue::PowerUpCollect);
        }
        PowerUpKind::Invincibility => {
            state
                .effects
                .activate(Effect::Invincibility, now, t.invincibility_duration, 0.0);
            state.set_message("Invincibility!", now);
            state.push_cue(AudioCue::PowerUpCollect);
        }
        PowerUpKind::ScoreMultiplier => {
            state.effects.activate(
                Effect::ScoreMultiplier,
                now,
                t.score_multiplier_duration,
                t.score_multiplier,
            );
            state.set_message("Score Multiplier!", now);
            state.push_cue(AudioCue::PowerUpCollect);
        }
    }
}

/// The fire action, shared by the keyboard and pointer-click triggers.
///
/// Gated by the effective cooldown (the faster-shooting effect substitutes
/// the short constant). Spawns `bullet_count` bullets fanned symmetrically
/// around the player's x at the fixed offset.
fn fire(state: &mut SimulationState, now: f32) {
    let cooldown = if state.effects.is_active(Effect::FasterShooting, now) {
        state.tuning.fast_bullet_cooldown
    } else {
        state.tuning.bullet_cooldown
    };
    if now - state.player.last_shot <= cooldown {
        return;
    }

    let count = state.player.bullet_count;
    let start_x = state.player.pos.x - (count - 1) as f32 * BULLET_FAN_OFFSET / 2.0;
    let y = state.player.pos.y + PLAYER_SIZE / 2.0;
    for i in 0..count {
        state.bullets.push(Bullet {
            pos: Vec2::new(start_x + i as f32 * BULLET_FAN_OFFSET, y),
            vel_y: BULLET_SPEED,
        });
    }
    state.player.last_shot = now;
    state.push_cue(AudioCue::Shoot);
}
