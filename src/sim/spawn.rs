//! Timer-driven entity creation
//!
//! Two accumulator timers share the tick's delta: one re-rolls a short wait
//! between enemy spawns, one arms the single collectible slot. Thresholds are
//! randomized on every spawn so pacing stays organic, and enemy speed scales
//! linearly with the current level.

use rand::Rng;

use super::state::{Collectible, CollectibleKind, Enemy, GameState};
use crate::consts::*;

/// Rebuild the initial enemy set after a field reset
pub fn populate_enemies(state: &mut GameState) {
    state.enemies.clear();
    for i in 1..=RESET_ENEMY_COUNT {
        let row = i % ENEMY_ROWS;
        let speed = RESET_ENEMY_SPEED_BASE + RESET_ENEMY_SPEED_RANGE * state.rng.random::<f32>();
        let x = ENEMY_SPAWN_X + FIELD_WIDTH * 0.9 * state.rng.random::<f32>();
        state.enemies.push(Enemy::new(row, x, speed));
    }
}

/// Advance the enemy spawn timer; crossing the threshold creates one enemy
/// off the left edge and re-rolls the wait.
pub fn tick_enemy_spawn(state: &mut GameState, dt: f32) {
    state.time_since_enemy += dt;
    if state.time_since_enemy < state.wait_next_enemy {
        return;
    }
    state.time_since_enemy = 0.0;
    state.wait_next_enemy = state.rng.random::<f32>() * ENEMY_WAIT_MAX;

    let row = state.rng.random_range(0..ENEMY_ROWS);
    let speed = ENEMY_BASE_SPEED
        + ENEMY_SPEED_RANGE * state.rng.random::<f32>() * state.level as f32 / ENEMY_LEVEL_DIVISOR;
    log::debug!("enemy spawn: row={row} speed={speed:.1}");
    state.enemies.push(Enemy::new(row, ENEMY_SPAWN_X, speed));
}

/// Advance the collectible spawn timer while the slot is empty; crossing the
/// threshold fills the slot with a weighted-random item placed away from the
/// player.
pub fn tick_collectible_spawn(state: &mut GameState, dt: f32) {
    if state.collectible.is_some() {
        return;
    }
    state.time_since_collectible += dt;
    if state.time_since_collectible < state.wait_next_collectible {
        return;
    }
    state.time_since_collectible = 0.0;

    // Resample until the cell shares neither row nor column with the player
    let (player_row, player_col) = (state.player.row(), state.player.col());
    let mut row = player_row;
    let mut col = player_col;
    while row == player_row || col == player_col {
        row = state.rng.random_range(0..GAME_ROWS - 1);
        col = state.rng.random_range(0..GAME_COLS - 1);
    }

    let kind = if state.rng.random::<f32>() < LIFE_BONUS_CHANCE {
        CollectibleKind::LifeBonus
    } else {
        CollectibleKind::ScoreGem
    };
    log::debug!("collectible spawn: kind={kind:?} row={row} col={col}");
    state.collectible = Some(Collectible::new(kind, row, col));
}

/// Shared re-arm policy for collection and expiry: empty the slot and
/// schedule the next spawn a base wait plus random jitter away.
pub fn rearm_collectible(state: &mut GameState) {
    state.collectible = None;
    state.time_since_collectible = 0.0;
    state.wait_next_collectible =
        COLLECTIBLE_WAIT_BASE + state.rng.random::<f32>() * COLLECTIBLE_WAIT_JITTER;
}
