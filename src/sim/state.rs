//! Game state and core simulation types
//!
//! Everything needed to reproduce a session from its seed lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tick::Command;
use crate::consts::*;
use crate::lane_to_plane;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Alive,
    /// Terminal until an explicit restart command arrives
    Dead,
}

/// Which collision behavior the player was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerKind {
    #[default]
    Normal,
    /// Enemy contact destroys the enemy and grants a life instead of costing one
    Empowered,
}

/// The player token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    row: i32,
    col: i32,
    /// Plane position, kept in lock-step with (row, col)
    pub pos: Vec2,
    pub kind: PlayerKind,
}

impl Player {
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            row: START_ROW,
            col: START_COL,
            pos: lane_to_plane(START_ROW, START_COL),
            kind,
        }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    fn set_row(&mut self, row: i32) {
        self.row = row;
        self.pos = lane_to_plane(self.row, self.col);
    }

    fn set_col(&mut self, col: i32) {
        self.col = col;
        self.pos = lane_to_plane(self.row, self.col);
    }

    /// Step one cell in the commanded direction if the boundary guard passes.
    /// Moves against a field edge are silently ignored.
    pub fn apply_move(&mut self, command: Command) {
        match command {
            Command::MoveLeft if self.pos.x >= 83.0 => self.set_col(self.col - 1),
            Command::MoveUp if self.pos.y >= 51.0 => self.set_row(self.row - 1),
            Command::MoveRight if self.pos.x < FIELD_WIDTH - 150.0 => self.set_col(self.col + 1),
            Command::MoveDown if self.pos.y < FIELD_HEIGHT - 250.0 => self.set_row(self.row + 1),
            _ => {}
        }
    }
}

/// An enemy token crossing its lane left to right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Lane the enemy lives on, fixed for its lifetime
    row: i32,
    /// Continuous horizontal position (pixels)
    pub x: f32,
    /// Horizontal speed (pixels/second, positive)
    pub speed: f32,
}

impl Enemy {
    pub fn new(row: i32, x: f32, speed: f32) -> Self {
        Self { row, x, speed }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    /// Plane position; y derives from the fixed row
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, lane_to_plane(self.row, 0).y)
    }

    /// Horizontal motion only; the row never changes
    pub fn advance(&mut self, dt: f32) {
        self.x += self.speed * dt;
    }

    /// True once the enemy has left the visible field on the right
    pub fn off_field(&self) -> bool {
        self.x > FIELD_WIDTH
    }
}

/// Collectible item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// +1 life, capped at the lives ceiling
    LifeBonus,
    /// Flat score bonus
    ScoreGem,
}

impl CollectibleKind {
    /// Seconds the item stays on the field before expiring uncollected
    pub fn ttl(&self) -> f32 {
        COLLECTIBLE_TTL
    }
}

/// The single optional bonus item on the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub row: i32,
    pub col: i32,
    /// Time on the field so far (seconds)
    pub age: f32,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, row: i32, col: i32) -> Self {
        Self {
            kind,
            row,
            col,
            age: 0.0,
        }
    }

    pub fn pos(&self) -> Vec2 {
        lane_to_plane(self.row, self.col)
    }

    /// Accumulate lifetime; returns true once the TTL is spent
    pub fn tick_age(&mut self, dt: f32) -> bool {
        self.age += dt;
        self.age >= self.kind.ttl()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Every random draw (spawn rows, speeds, waits) comes from this stream
    pub rng: Pcg32,
    pub score: u64,
    /// Always within 0..=MAX_LIVES
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// At most one collectible exists at any time
    pub collectible: Option<Collectible>,
    /// Spawn accumulators and their randomized thresholds (seconds)
    pub time_since_enemy: f32,
    pub wait_next_enemy: f32,
    pub time_since_collectible: f32,
    pub wait_next_collectible: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh session with an initial enemy set already on the field
    pub fn new(seed: u64, kind: PlayerKind) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: START_LIVES,
            level: 1,
            phase: GamePhase::Alive,
            player: Player::new(kind),
            enemies: Vec::new(),
            collectible: None,
            time_since_enemy: 0.0,
            wait_next_enemy: 0.0,
            time_since_collectible: 0.0,
            wait_next_collectible: COLLECTIBLE_WAIT_BASE,
            time_ticks: 0,
        };
        super::spawn::populate_enemies(&mut state);
        state
    }

    /// Grant a life, never past the cap
    pub fn gain_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    /// Reposition the player and rebuild the live collections, keeping
    /// score/lives/level. `kind` selects the player variant to place.
    pub fn reset_field(&mut self, kind: PlayerKind) {
        self.collectible = None;
        self.player = Player::new(kind);
        super::spawn::populate_enemies(self);
        debug_assert!(self.lives <= MAX_LIVES);
    }

    /// Restart from Dead: score/lives/level back to their starting values,
    /// then a normal field reset with the requested variant
    pub fn restart(&mut self, kind: PlayerKind) {
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.phase = GamePhase::Alive;
        self.reset_field(kind);
    }
}
