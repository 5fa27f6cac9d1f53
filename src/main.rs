//! Lanecross entry point
//!
//! Headless demo run. Real frontends supply their own surface and input
//! collaborators and drive `Session::frame` from their display loop.

use std::time::{SystemTime, UNIX_EPOCH};

use lanecross::consts::SIM_DT;
use lanecross::render::{SpriteId, Surface};
use lanecross::sim::{Command, GamePhase};
use lanecross::{Session, Settings};

/// Surface that draws nowhere; headless runs only exercise the call sites
struct NullSurface;

impl Surface for NullSurface {
    fn draw(&mut self, _sprite: SpriteId, _x: f32, _y: f32) {}
    fn draw_scaled(&mut self, _sprite: SpriteId, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn clear(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32) {}
}

fn main() {
    env_logger::init();

    let settings = std::env::var("LANECROSS_SETTINGS")
        .ok()
        .and_then(|json| match Settings::from_json(&json) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::warn!("ignoring malformed settings: {err}");
                None
            }
        })
        .unwrap_or_default();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .or(settings.seed)
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    log::info!("Lanecross (headless demo) starting, seed {seed}");

    let mut session = Session::new(seed, settings.player_kind());
    session.resources_ready();

    // Scripted crossing attempt: march up, sidestep, repeat
    let script = [
        Command::MoveUp,
        Command::MoveUp,
        Command::MoveRight,
        Command::MoveUp,
        Command::MoveUp,
        Command::MoveLeft,
        Command::MoveUp,
        Command::MoveUp,
    ];

    let mut surface = NullSurface;
    for frame in 0..1800u32 {
        if session.state().phase == GamePhase::Dead {
            session.queue_command(Command::RestartNormal);
        } else if frame % 30 == 0 {
            session.queue_command(script[(frame / 30) as usize % script.len()]);
        }
        session.frame(SIM_DT, &mut surface);
    }

    let state = session.state();
    log::info!(
        "demo finished: level {} score {} lives {}",
        state.level,
        state.score,
        state.lives
    );
}
