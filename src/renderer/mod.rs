//! Rendering module
//!
//! `shapes` turns the simulation into rectangles; a `Canvas` rasterizes them.

pub mod shapes;

pub use shapes::{Color, FilledRect, Palette, render};

use crate::platform::PlatformError;
use crate::sim::GameState;

/// Something that can fill rectangles (SDL renderer, or a recorder in tests)
pub trait Canvas {
    fn set_draw_color(&mut self, color: Color);
    /// Fill the whole target with the current draw color
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: FilledRect) -> Result<(), PlatformError>;
    /// Swap front and back buffers
    fn present(&mut self);
}

/// Draw one frame: clear to the backdrop, fill every shape, present.
///
/// A rectangle that fails to draw is logged and skipped; the frame still
/// presents.
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, palette: &Palette) {
    canvas.set_draw_color(palette.background);
    canvas.clear();

    canvas.set_draw_color(palette.foreground);
    for rect in render(state) {
        if let Err(e) = canvas.fill_rect(rect) {
            log::warn!("Render error: {}", e);
        }
    }

    canvas.present();
}
