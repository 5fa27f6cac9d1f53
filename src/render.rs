//! Render-collaborator contract
//!
//! The core paints through the [`Surface`] trait once per frame and owns no
//! pixel logic; frontends implement the trait however they like (canvas,
//! terminal, headless). Sprite identifiers are a closed set.

use crate::consts::*;
use crate::sim::{CollectibleKind, GamePhase, GameState, PlayerKind};

/// Closed set of drawable sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    WaterTile,
    StoneTile,
    GrassTile,
    EnemyBug,
    PlayerNormal,
    PlayerEmpowered,
    Heart,
    Gem,
}

/// Draw capability provided by the external rendering collaborator
pub trait Surface {
    fn draw(&mut self, sprite: SpriteId, x: f32, y: f32);
    fn draw_scaled(&mut self, sprite: SpriteId, x: f32, y: f32, w: f32, h: f32);
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// Tile used for a given field row: goal water on top, grass home bands on
/// the bottom, stone traffic lanes in between
fn row_tile(row: i32) -> SpriteId {
    if row == 0 {
        SpriteId::WaterTile
    } else if row >= GAME_ROWS - 2 {
        SpriteId::GrassTile
    } else {
        SpriteId::StoneTile
    }
}

fn player_sprite(kind: PlayerKind) -> SpriteId {
    match kind {
        PlayerKind::Normal => SpriteId::PlayerNormal,
        PlayerKind::Empowered => SpriteId::PlayerEmpowered,
    }
}

/// Paint one frame: field tiles, entities, HUD, and the death overlay
pub fn render_frame(state: &GameState, surface: &mut dyn Surface) {
    surface.clear(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);

    for row in 0..GAME_ROWS {
        for col in 0..GAME_COLS {
            surface.draw(row_tile(row), col as f32 * LANE_WIDTH, row as f32 * ROW_HEIGHT);
        }
    }

    for enemy in &state.enemies {
        let pos = enemy.pos();
        surface.draw(SpriteId::EnemyBug, pos.x, pos.y);
    }

    if state.phase == GamePhase::Alive {
        surface.draw(
            player_sprite(state.player.kind),
            state.player.pos.x,
            state.player.pos.y,
        );
    }

    if let Some(item) = &state.collectible {
        let sprite = match item.kind {
            CollectibleKind::LifeBonus => SpriteId::Heart,
            CollectibleKind::ScoreGem => SpriteId::Gem,
        };
        let pos = item.pos();
        // Item art is oversized for a lane cell; draw it inset and scaled
        surface.draw_scaled(sprite, pos.x + 25.0, pos.y + 65.0, 50.0, 85.0);
    }

    render_hud(state, surface);

    if state.phase == GamePhase::Dead {
        render_death_overlay(state, surface);
    }
}

fn render_hud(state: &GameState, surface: &mut dyn Surface) {
    surface.draw_text(&format!("Score : {}", state.score), 10.0, 35.0);
    surface.draw_text(&format!("Level : {}", state.level), 10.0, 75.0);
    if state.player.kind == PlayerKind::Empowered {
        surface.draw_text("Empowered mode activated", 10.0, 115.0);
    }
    for i in 1..=state.lives {
        surface.draw_scaled(SpriteId::Heart, FIELD_WIDTH - 60.0 * i as f32, 0.0, 50.0, 85.0);
    }
}

fn render_death_overlay(state: &GameState, surface: &mut dyn Surface) {
    let mid = FIELD_WIDTH / 2.0;
    surface.draw_text(&format!("You have died on level {}", state.level), mid, 200.0);
    surface.draw_text(&format!("Your score is {}", state.score), mid, 250.0);
    surface.draw_text("Wanna play again?", mid, 300.0);
    surface.draw_text("Press \"Enter\" to continue", mid, 350.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Collectible, GameState, PlayerKind};

    /// Records draw calls for assertions
    #[derive(Default)]
    struct Recorder {
        sprites: Vec<SpriteId>,
        texts: Vec<String>,
        clears: u32,
    }

    impl Surface for Recorder {
        fn draw(&mut self, sprite: SpriteId, _x: f32, _y: f32) {
            self.sprites.push(sprite);
        }
        fn draw_scaled(&mut self, sprite: SpriteId, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.sprites.push(sprite);
        }
        fn clear(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.clears += 1;
        }
        fn draw_text(&mut self, text: &str, _x: f32, _y: f32) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn test_frame_draws_tiles_entities_and_hud() {
        let state = GameState::new(3, PlayerKind::Normal);
        let mut recorder = Recorder::default();
        render_frame(&state, &mut recorder);

        assert_eq!(recorder.clears, 1);
        let tiles = (GAME_ROWS * GAME_COLS) as usize;
        let bugs = recorder
            .sprites
            .iter()
            .filter(|s| **s == SpriteId::EnemyBug)
            .count();
        assert_eq!(bugs, state.enemies.len());
        assert!(recorder.sprites.contains(&SpriteId::PlayerNormal));
        assert!(recorder.sprites.len() >= tiles + bugs + 1);
        // One HUD heart per life
        let hearts = recorder
            .sprites
            .iter()
            .filter(|s| **s == SpriteId::Heart)
            .count();
        assert_eq!(hearts, state.lives as usize);
        assert!(recorder.texts.iter().any(|t| t.starts_with("Score")));
    }

    #[test]
    fn test_collectible_uses_kind_sprite() {
        let mut state = GameState::new(3, PlayerKind::Normal);
        state.collectible = Some(Collectible::new(crate::sim::CollectibleKind::ScoreGem, 1, 1));
        let mut recorder = Recorder::default();
        render_frame(&state, &mut recorder);
        assert!(recorder.sprites.contains(&SpriteId::Gem));
    }

    #[test]
    fn test_death_overlay_only_when_dead() {
        let mut state = GameState::new(3, PlayerKind::Normal);
        let mut recorder = Recorder::default();
        render_frame(&state, &mut recorder);
        assert!(!recorder.texts.iter().any(|t| t.contains("died")));

        state.phase = crate::sim::GamePhase::Dead;
        let mut recorder = Recorder::default();
        render_frame(&state, &mut recorder);
        assert!(recorder.texts.iter().any(|t| t.contains("died")));
        // No player sprite while dead
        assert!(!recorder.sprites.contains(&SpriteId::PlayerNormal));
    }

    #[test]
    fn test_empowered_notice_in_hud() {
        let state = GameState::new(3, PlayerKind::Empowered);
        let mut recorder = Recorder::default();
        render_frame(&state, &mut recorder);
        assert!(recorder.sprites.contains(&SpriteId::PlayerEmpowered));
        assert!(recorder.texts.iter().any(|t| t.contains("Empowered")));
    }
}
