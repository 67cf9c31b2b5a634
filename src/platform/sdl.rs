//! SDL2 backend: window, accelerated renderer and keyboard

use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;
use sdl2::{EventPump, Sdl};

use super::PlatformError;
use crate::input::{EventSource, Key, PlatformEvent};
use crate::renderer::{Canvas, Color, FilledRect};
use crate::settings::WindowSettings;
use crate::sim::ArenaConfig;

/// Renderer bound to the game window. Dropping it destroys the renderer and
/// then the window.
pub struct SdlCanvas {
    canvas: WindowCanvas,
}

/// Event pump plus the SDL context it keeps alive
pub struct SdlEvents {
    pump: EventPump,
    _sdl: Sdl,
}

/// Create the window and renderer sized to the playfield
pub fn init(
    window: &WindowSettings,
    arena: &ArenaConfig,
) -> Result<(SdlCanvas, SdlEvents), PlatformError> {
    let sdl = sdl2::init().map_err(PlatformError::Init)?;
    let video = sdl.video().map_err(PlatformError::Init)?;

    let win = video
        .window(&window.title, arena.width as u32, arena.height as u32)
        .position(window.x, window.y)
        .build()
        .map_err(|e| PlatformError::Window(e.to_string()))?;
    log::info!(
        "Created window {}x{} at ({}, {})",
        arena.width,
        arena.height,
        window.x,
        window.y
    );

    let mut builder = win.into_canvas().accelerated();
    if window.vsync {
        builder = builder.present_vsync();
    }
    let canvas = builder
        .build()
        .map_err(|e| PlatformError::Renderer(e.to_string()))?;

    let pump = sdl.event_pump().map_err(PlatformError::Init)?;

    Ok((SdlCanvas { canvas }, SdlEvents { pump, _sdl: sdl }))
}

fn scancode(key: Key) -> Scancode {
    match key {
        Key::Escape => Scancode::Escape,
        Key::W => Scancode::W,
        Key::S => Scancode::S,
        Key::I => Scancode::I,
        Key::K => Scancode::K,
    }
}

impl Canvas for SdlCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: FilledRect) -> Result<(), PlatformError> {
        self.canvas
            .fill_rect(Rect::new(rect.x, rect.y, rect.w, rect.h))
            .map_err(PlatformError::Draw)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

impl EventSource for SdlEvents {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        self.pump
            .poll_iter()
            .map(|event| match event {
                Event::Quit { .. } => PlatformEvent::Quit,
                _ => PlatformEvent::Other,
            })
            .collect()
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.pump
            .keyboard_state()
            .is_scancode_pressed(scancode(key))
    }
}
