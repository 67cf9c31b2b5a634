//! Draw primitives for the playfield
//!
//! Converts center-point float positions into top-left integer rectangles.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Backdrop and foreground colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgba(0, 0, 255, 255),
            foreground: Color::rgba(255, 255, 255, 255),
        }
    }
}

/// Axis-aligned filled rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilledRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl FilledRect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Rectangles for the current frame: top wall, bottom wall, left paddle,
/// right paddle, then one square per ball in list order (retired balls too).
pub fn render(state: &GameState) -> Vec<FilledRect> {
    let arena = &state.arena;
    let t = arena.thickness;
    let side = t.max(0) as u32;
    let width = arena.width as u32;
    // Integer half, so a 15-unit square is offset by 7
    let half_t = (t / 2) as f32;
    let half_paddle = arena.paddle_half_height();

    let mut rects = Vec::with_capacity(4 + state.balls.len());

    rects.push(FilledRect::new(0, 0, width, side));
    rects.push(FilledRect::new(0, arena.height as i32 - t, width, side));

    for paddle in [&state.paddle1, &state.paddle2] {
        rects.push(FilledRect::new(
            (paddle.pos.x - half_t) as i32,
            (paddle.pos.y - half_paddle) as i32,
            side,
            arena.paddle_height as u32,
        ));
    }

    for ball in &state.balls {
        rects.push(FilledRect::new(
            (ball.pos.x - half_t) as i32,
            (ball.pos.y - half_t) as i32,
            side,
            side,
        ));
    }

    rects
}
