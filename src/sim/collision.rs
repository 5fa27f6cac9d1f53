//! Coarse lane-based collision detection
//!
//! Entities are confined to discrete lanes, so overlap reduces to a same-row
//! check plus a horizontal proximity test whose tolerance approximates sprite
//! half-width. One O(n) pass per tick; no precise shape intersection.

use super::state::GameState;
use crate::consts::COLLISION_TOLERANCE;

/// True when two same-lane entities are within the horizontal tolerance
#[inline]
pub fn lanes_overlap(row_a: i32, x_a: f32, row_b: i32, x_b: f32) -> bool {
    row_a == row_b && (x_a - x_b).abs() < COLLISION_TOLERANCE
}

/// Indices of every enemy overlapping the player this tick, in scan order.
/// Each enemy is tested exactly once, so each index appears at most once.
pub fn colliding_enemies(state: &GameState) -> Vec<usize> {
    let (row, x) = (state.player.row(), state.player.pos.x);
    state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| lanes_overlap(row, x, enemy.row(), enemy.x))
        .map(|(i, _)| i)
        .collect()
}

/// Whether the player overlaps the live collectible, if any
pub fn touching_collectible(state: &GameState) -> bool {
    state.collectible.as_ref().is_some_and(|item| {
        lanes_overlap(state.player.row(), state.player.pos.x, item.row, item.pos().x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, CollectibleKind, Enemy, PlayerKind};

    #[test]
    fn test_overlap_requires_same_row() {
        assert!(lanes_overlap(2, 100.0, 2, 140.0));
        assert!(!lanes_overlap(2, 100.0, 3, 100.0));
    }

    #[test]
    fn test_overlap_tolerance_is_exclusive() {
        assert!(lanes_overlap(0, 0.0, 0, COLLISION_TOLERANCE - 0.1));
        assert!(!lanes_overlap(0, 0.0, 0, COLLISION_TOLERANCE));
        assert!(lanes_overlap(0, COLLISION_TOLERANCE - 0.1, 0, 0.0));
    }

    #[test]
    fn test_each_overlapping_enemy_reported_once() {
        let mut state = GameState::new(1, PlayerKind::Normal);
        state.enemies.clear();
        let (row, x) = (state.player.row(), state.player.pos.x);
        state.enemies.push(Enemy::new(row, x - 10.0, 100.0));
        state.enemies.push(Enemy::new(row + 1, x, 100.0)); // wrong row
        state.enemies.push(Enemy::new(row, x + 10.0, 100.0));
        state.enemies.push(Enemy::new(row, x + 500.0, 100.0)); // too far

        assert_eq!(colliding_enemies(&state), vec![0, 2]);
    }

    #[test]
    fn test_touching_collectible() {
        let mut state = GameState::new(1, PlayerKind::Normal);
        assert!(!touching_collectible(&state));

        state.collectible = Some(Collectible::new(
            CollectibleKind::ScoreGem,
            state.player.row(),
            state.player.col(),
        ));
        assert!(touching_collectible(&state));

        state.collectible = Some(Collectible::new(
            CollectibleKind::ScoreGem,
            state.player.row() - 1,
            state.player.col(),
        ));
        assert!(!touching_collectible(&state));
    }
}
