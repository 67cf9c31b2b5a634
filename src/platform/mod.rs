//! Platform abstraction layer
//!
//! Backends supply the three collaborators the game loop needs:
//! - `Canvas`: window renderer
//! - `EventSource`: quit events and keyboard state
//! - `Clock`: monotonic time and waiting
//!
//! `headless` is always available; `sdl` needs the `sdl` feature.

pub mod headless;
#[cfg(feature = "sdl")]
pub mod sdl;

use thiserror::Error;

/// Backend failures
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("unable to initialize platform: {0}")]
    Init(String),

    #[error("failed to create window: {0}")]
    Window(String),

    #[error("failed to create renderer: {0}")]
    Renderer(String),

    #[error("failed to draw: {0}")]
    Draw(String),
}
