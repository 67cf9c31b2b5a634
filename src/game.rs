//! Frame loop driver
//!
//! One frame is: wait for the pacer, snapshot input, step the simulation,
//! draw. The loop checks the running flag only between frames, so a quit
//! request still lets the current frame finish.

use crate::input::{self, EventSource};
use crate::pacer::{Clock, Pacer};
use crate::renderer::{self, Canvas, Palette};
use crate::sim::{GameEvent, GameState, tick};

/// What happened over a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub retired: usize,
    /// Ended by the player rather than by losing every ball
    pub quit_requested: bool,
}

/// Game instance holding state and the backend collaborators
pub struct Game<C: Canvas, E: EventSource, K: Clock> {
    state: GameState,
    pacer: Pacer<K>,
    canvas: C,
    events: E,
    palette: Palette,
    frames: u64,
    quit_requested: bool,
}

impl<C: Canvas, E: EventSource, K: Clock> Game<C, E, K> {
    pub fn new(state: GameState, pacer: Pacer<K>, canvas: C, events: E, palette: Palette) -> Self {
        Self {
            state,
            pacer,
            canvas,
            events,
            palette,
            frames: 0,
            quit_requested: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn pacer(&self) -> &Pacer<K> {
        &self.pacer
    }

    /// Run one frame. Returns whether the game is still running.
    pub fn frame(&mut self) -> bool {
        let dt = self.pacer.tick();

        let snapshot = input::poll(&mut self.events);
        if snapshot.quit_requested && !self.quit_requested {
            log::info!("Quit requested");
            self.quit_requested = true;
            self.state.stop();
        }

        tick(&mut self.state, &snapshot, dt);
        self.drain_events();

        renderer::draw_frame(&mut self.canvas, &self.state, &self.palette);
        self.frames += 1;

        self.state.is_running()
    }

    /// Run frames until the running flag drops
    pub fn run(&mut self) -> RunSummary {
        log::info!("Starting with {} balls", self.state.total_balls());
        while self.state.is_running() {
            self.frame();
        }

        let summary = self.summary();
        log::info!(
            "Stopped after {} frames, {} of {} balls retired",
            summary.frames,
            summary.retired,
            self.state.total_balls()
        );
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            retired: self.state.retired(),
            quit_requested: self.quit_requested,
        }
    }

    fn drain_events(&mut self) {
        for event in self.state.events.drain(..) {
            match event {
                GameEvent::PaddleHit { ball, side } => {
                    log::debug!("Ball {} hit {:?} paddle", ball, side)
                }
                GameEvent::WallBounce { ball, wall } => {
                    log::trace!("Ball {} bounced off {:?} wall", ball, wall)
                }
                GameEvent::BallRetired { ball, retired } => {
                    log::info!("Ball {} out ({} retired)", ball, retired)
                }
                GameEvent::GameOver => log::info!("All balls retired, game over"),
            }
        }
    }
}
