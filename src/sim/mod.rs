//! Simulation module
//!
//! Paddles, balls and the per-frame physics step. No rendering or platform
//! dependencies; everything here is driven by an input snapshot and a delta time.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Contact, detect_contact};
pub use state::{ArenaConfig, Ball, BallSpawn, GameEvent, GameState, Paddle, Side, Wall};
pub use tick::tick;
