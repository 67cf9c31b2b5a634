//! In-memory backend
//!
//! A canvas that records draw calls, an input source driven by the caller and
//! a clock that only moves when told to. Used by tests and by builds without
//! a window system.

use std::collections::{HashSet, VecDeque};

use super::PlatformError;
use crate::input::{EventSource, Key, PlatformEvent};
use crate::pacer::Clock;
use crate::renderer::{Canvas, Color, FilledRect};

/// One recorded canvas call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    SetColor(Color),
    Clear,
    Fill(FilledRect),
    Present,
}

/// Canvas that keeps the calls of the most recent frame
#[derive(Debug, Default)]
pub struct HeadlessCanvas {
    calls: Vec<DrawCall>,
    frames: u64,
    presented: bool,
    fail_fills: bool,
}

impl HeadlessCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls since the previous `present` (inclusive of the current one)
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Rectangles filled in the most recent frame
    pub fn filled(&self) -> Vec<FilledRect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Fill(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Make every `fill_rect` fail
    pub fn fail_fills(&mut self, fail: bool) {
        self.fail_fills = fail;
    }

    fn record(&mut self, call: DrawCall) {
        if self.presented {
            self.calls.clear();
            self.presented = false;
        }
        self.calls.push(call);
    }
}

impl Canvas for HeadlessCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.record(DrawCall::SetColor(color));
    }

    fn clear(&mut self) {
        self.record(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: FilledRect) -> Result<(), PlatformError> {
        if self.fail_fills {
            return Err(PlatformError::Draw(format!("{:?} rejected", rect)));
        }
        self.record(DrawCall::Fill(rect));
        Ok(())
    }

    fn present(&mut self) {
        self.record(DrawCall::Present);
        self.presented = true;
        self.frames += 1;
    }
}

/// Input source fed by the caller: queued events plus a set of held keys
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pending: VecDeque<PlatformEvent>,
    held: HashSet<Key>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: PlatformEvent) {
        self.pending.push_back(event);
    }

    pub fn hold(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }
}

impl EventSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        self.pending.drain(..).collect()
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Clock that only advances explicitly or by waiting
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn wait_until(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_keeps_last_frame() {
        let mut canvas = HeadlessCanvas::new();
        canvas.clear();
        canvas.present();
        canvas.clear();
        canvas.fill_rect(FilledRect::new(1, 2, 3, 4)).unwrap();
        canvas.present();
        assert_eq!(canvas.frames(), 2);
        assert_eq!(canvas.filled(), vec![FilledRect::new(1, 2, 3, 4)]);
        assert_eq!(canvas.calls().len(), 3);
    }

    #[test]
    fn test_scripted_input() {
        let mut input = ScriptedInput::new();
        input.push_event(PlatformEvent::Quit);
        input.hold(Key::W);
        assert_eq!(input.poll_events(), vec![PlatformEvent::Quit]);
        assert!(input.poll_events().is_empty());
        assert!(input.is_pressed(Key::W));
        input.release(Key::W);
        assert!(!input.is_pressed(Key::W));
    }

    #[test]
    fn test_manual_clock_never_rewinds() {
        let mut clock = ManualClock::new(50);
        clock.wait_until(40);
        assert_eq!(clock.now_ms(), 50);
        clock.wait_until(66);
        assert_eq!(clock.now_ms(), 66);
    }
}
