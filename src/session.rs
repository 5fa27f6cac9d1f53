//! Frame driver
//!
//! One externally-triggered frame per display refresh; each frame converts
//! the elapsed wall time into fixed simulation ticks and then renders.
//! Nothing runs, and nothing is drawn, until the asset collaborator signals
//! readiness.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::render::{self, Surface};
use crate::sim::{Command, GameState, PlayerKind, TickInput, tick};

/// Owns the single mutable game state and the frame/tick bookkeeping
pub struct Session {
    state: GameState,
    accumulator: f32,
    ready: bool,
    queued: Option<Command>,
}

impl Session {
    pub fn new(seed: u64, kind: PlayerKind) -> Self {
        Self {
            state: GameState::new(seed, kind),
            accumulator: 0.0,
            ready: false,
            queued: None,
        }
    }

    /// Asset-readiness signal; frames before this are ignored
    pub fn resources_ready(&mut self) {
        log::info!("resources ready, session live");
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Queue one abstract command for the next tick (latest wins)
    pub fn queue_command(&mut self, command: Command) {
        self.queued = Some(command);
    }

    /// Advance by one frame's elapsed seconds and draw the result.
    ///
    /// Runs zero or more fixed-dt ticks, capped at [`MAX_SUBSTEPS`] so a long
    /// stall drops its backlog instead of spiraling.
    pub fn frame(&mut self, elapsed: f32, surface: &mut dyn Surface) {
        if !self.ready {
            return;
        }

        self.accumulator += elapsed.max(0.0);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput {
                command: self.queued.take(),
            };
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }

        render::render_frame(&self.state, surface);
    }
}
