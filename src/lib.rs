//! Twin Pong - two paddles, several balls, one fixed-cadence loop
//!
//! Core modules:
//! - `sim`: Simulation state and the physics/collision step
//! - `pacer`: Frame pacing and delta-time clamping
//! - `input`: Per-frame input snapshot
//! - `renderer`: Draw primitives and the canvas they are issued to
//! - `platform`: Headless and SDL2 backends
//! - `game`: Frame loop driver

pub mod game;
pub mod input;
pub mod pacer;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, RunSummary};
pub use input::InputState;
pub use pacer::{Clock, Pacer};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1024.0;
    pub const PLAYFIELD_HEIGHT: f32 = 768.0;

    /// Walls, paddles and balls all share this thickness
    pub const THICKNESS: i32 = 15;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Paddle center distance from its side edge
    pub const PADDLE_INSET: f32 = 10.0;
    /// Contact band (distance from the side edge) in which a paddle returns the ball
    pub const PADDLE_BAND_NEAR: f32 = 20.0;
    pub const PADDLE_BAND_FAR: f32 = 25.0;

    /// Minimum time between frames (~60 Hz)
    pub const FRAME_INTERVAL_MS: u64 = 16;
    /// Largest delta time handed to the simulation, in seconds
    pub const MAX_DELTA: f32 = 0.05;

    /// Default window placement
    pub const WINDOW_TITLE: &str = "Twin Pong";
    pub const WINDOW_X: i32 = 100;
    pub const WINDOW_Y: i32 = 100;
}
