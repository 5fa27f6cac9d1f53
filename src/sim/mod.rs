//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{colliding_enemies, lanes_overlap, touching_collectible};
pub use spawn::{populate_enemies, rearm_collectible};
pub use state::{Collectible, CollectibleKind, Enemy, GamePhase, GameState, Player, PlayerKind};
pub use tick::{Command, TickInput, tick};
