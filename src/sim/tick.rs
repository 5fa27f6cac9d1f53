//! Per-tick simulation step
//!
//! Advances the whole game by one elapsed-time delta: restart handling,
//! player movement, enemy motion and garbage collection, collectible ageing,
//! collision resolution, spawning, and the goal-row check, in that order.

use serde::{Deserialize, Serialize};

use super::collision;
use super::spawn;
use super::state::{CollectibleKind, GamePhase, GameState, PlayerKind};
use crate::consts::*;

/// Abstract input vocabulary; the core knows nothing about physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveUp,
    MoveRight,
    MoveDown,
    RestartNormal,
    RestartEmpowered,
}

/// Input for a single tick (at most one command)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub command: Option<Command>,
}

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if let Some(command) = input.command {
        if handle_restart(state, command) {
            return; // field rebuilt this tick; play resumes next tick
        }
    }

    // Dead is terminal: nothing moves until a restart command arrives
    if state.phase == GamePhase::Dead {
        return;
    }

    state.time_ticks += 1;

    if let Some(command) = input.command {
        state.player.apply_move(command);
    }

    advance_enemies(state, dt);
    age_collectible(state, dt);

    if resolve_enemy_collisions(state) {
        return; // hit forced a field rebuild or ended the session
    }
    resolve_collectible_pickup(state);

    spawn::tick_enemy_spawn(state, dt);
    spawn::tick_collectible_spawn(state, dt);

    check_goal(state);

    debug_assert!(state.lives <= MAX_LIVES);
    debug_assert!(state.level >= 1);
}

/// Returns true when the command rebuilt the field this tick
fn handle_restart(state: &mut GameState, command: Command) -> bool {
    let kind = match command {
        Command::RestartNormal => PlayerKind::Normal,
        Command::RestartEmpowered => PlayerKind::Empowered,
        _ => return false,
    };
    match state.phase {
        GamePhase::Dead => {
            log::info!("restart: variant={kind:?}");
            state.restart(kind);
            true
        }
        // Mid-session variant switch; same-variant restarts are ignored
        GamePhase::Alive if state.player.kind != kind => {
            log::info!("variant switch: {kind:?}");
            state.reset_field(kind);
            true
        }
        GamePhase::Alive => false,
    }
}

/// Move every enemy along its lane, then drop the ones past the right edge
fn advance_enemies(state: &mut GameState, dt: f32) {
    for enemy in &mut state.enemies {
        enemy.advance(dt);
    }
    state.enemies.retain(|enemy| !enemy.off_field());
}

fn age_collectible(state: &mut GameState, dt: f32) {
    let expired = match state.collectible.as_mut() {
        Some(item) => item.tick_age(dt),
        None => return,
    };
    if expired {
        log::debug!("collectible expired");
        spawn::rearm_collectible(state);
    }
}

/// Resolve player/enemy overlaps. Returns true when the hit forced a field
/// rebuild (or the session ended), making the rest of the tick moot.
fn resolve_enemy_collisions(state: &mut GameState) -> bool {
    let colliding = collision::colliding_enemies(state);
    if colliding.is_empty() {
        return false;
    }

    match state.player.kind {
        PlayerKind::Normal => {
            debug_assert!(state.lives > 0);
            state.lives -= 1;
            if state.lives == 0 {
                log::info!(
                    "player died on level {} with score {}",
                    state.level,
                    state.score
                );
                state.phase = GamePhase::Dead;
            } else {
                state.reset_field(PlayerKind::Normal);
            }
            true
        }
        PlayerKind::Empowered => {
            // Remove back to front so earlier indices stay valid
            for &idx in colliding.iter().rev() {
                state.enemies.remove(idx);
                state.score += KILL_BONUS;
                state.gain_life();
            }
            false
        }
    }
}

fn resolve_collectible_pickup(state: &mut GameState) {
    if !collision::touching_collectible(state) {
        return;
    }
    if let Some(item) = state.collectible.take() {
        log::debug!("collected {:?}", item.kind);
        match item.kind {
            CollectibleKind::LifeBonus => state.gain_life(),
            CollectibleKind::ScoreGem => state.score += GEM_BONUS,
        }
    }
    spawn::rearm_collectible(state);
}

/// Reaching the goal band banks the bonus, raises the level, and resets
fn check_goal(state: &mut GameState) {
    if state.player.row() >= 0 {
        return;
    }
    state.score += GOAL_BONUS;
    state.level += 1;
    log::info!("level {} reached, score {}", state.level, state.score);
    let kind = state.player.kind;
    state.reset_field(kind);
}
