//! Lanecross - a lane-crossing arcade game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `render`: Draw-surface contract implemented by external frontends
//! - `session`: Fixed-timestep frame driver with asset-readiness gating
//! - `settings`: User preferences (JSON)

pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 1010.0;
    pub const FIELD_HEIGHT: f32 = 760.0;

    /// Lane geometry
    pub const LANE_WIDTH: f32 = 101.0;
    pub const ROW_HEIGHT: f32 = 83.0;
    /// Vertical plane offset of row 0
    pub const BASE_OFFSET: f32 = 60.0;

    /// Grid extents
    pub const GAME_ROWS: i32 = 8;
    pub const GAME_COLS: i32 = 12;
    /// Rows 0..ENEMY_ROWS carry enemy traffic
    pub const ENEMY_ROWS: i32 = 5;

    /// Player start cell
    pub const START_ROW: i32 = 5;
    pub const START_COL: i32 = 5;

    /// Horizontal proximity below which same-row entities collide
    /// (approximates sprite half-width)
    pub const COLLISION_TOLERANCE: f32 = 60.0;

    /// Lives
    pub const START_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 10;

    /// Scoring
    pub const GOAL_BONUS: u64 = 1000;
    pub const GEM_BONUS: u64 = 5000;
    pub const KILL_BONUS: u64 = 100;

    /// Enemies enter here, fully off the left edge
    pub const ENEMY_SPAWN_X: f32 = -100.0;
    pub const ENEMY_BASE_SPEED: f32 = 100.0;
    pub const ENEMY_SPEED_RANGE: f32 = 200.0;
    /// Level scaling divisor for spawned enemy speed
    pub const ENEMY_LEVEL_DIVISOR: f32 = 8.0;
    /// Upper bound of the re-rolled wait between enemy spawns (seconds)
    pub const ENEMY_WAIT_MAX: f32 = 1.0;

    /// Initial enemy set placed on every field reset
    pub const RESET_ENEMY_COUNT: i32 = 9;
    pub const RESET_ENEMY_SPEED_BASE: f32 = 100.0;
    pub const RESET_ENEMY_SPEED_RANGE: f32 = 120.0;

    /// Collectibles
    pub const COLLECTIBLE_TTL: f32 = 5.0;
    pub const COLLECTIBLE_WAIT_BASE: f32 = 6.0;
    pub const COLLECTIBLE_WAIT_JITTER: f32 = 1.0;
    /// Probability that a spawned collectible is a life bonus
    pub const LIFE_BONUS_CHANCE: f32 = 0.2;
}

/// Convert a discrete lane cell to its continuous plane position.
///
/// Pure: the result depends only on `(row, col)`. Row 0 is the player's home
/// band; every negative row maps to the single goal band above the field.
#[inline]
pub fn lane_to_plane(row: i32, col: i32) -> Vec2 {
    let x = col as f32 * consts::LANE_WIDTH;
    let y = if row < 0 {
        consts::BASE_OFFSET - consts::ROW_HEIGHT
    } else {
        consts::BASE_OFFSET + consts::ROW_HEIGHT * row as f32
    };
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lane_to_plane_fixed_points() {
        assert_eq!(lane_to_plane(0, 0), Vec2::new(0.0, 60.0));
        assert_eq!(lane_to_plane(-1, 2), Vec2::new(202.0, -23.0));
        assert_eq!(lane_to_plane(3, 1), Vec2::new(101.0, 60.0 + 83.0 * 3.0));
    }

    proptest! {
        #[test]
        fn lane_to_plane_is_pure(row in -4i32..16, col in -4i32..16) {
            prop_assert_eq!(lane_to_plane(row, col), lane_to_plane(row, col));
        }

        #[test]
        fn negative_rows_share_the_goal_band(row in -8i32..0, col in 0i32..12) {
            prop_assert_eq!(lane_to_plane(row, col).y, lane_to_plane(-1, col).y);
        }

        #[test]
        fn x_tracks_column(row in 0i32..8, col in 0i32..12) {
            prop_assert_eq!(lane_to_plane(row, col).x, col as f32 * consts::LANE_WIDTH);
        }
    }
}
