//! Per-frame input snapshot
//!
//! Platform events are drained once per frame and the keyboard is sampled
//! into a plain `InputState`. Nothing is buffered between frames.

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    /// Paddle 1 up
    W,
    /// Paddle 1 down
    S,
    /// Paddle 2 up
    I,
    /// Paddle 2 down
    K,
}

/// Discrete platform events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Window closed or OS asked the app to quit
    Quit,
    /// Anything else; drained and ignored
    Other,
}

/// Source of events and keyboard state (window system, or a script in tests)
pub trait EventSource {
    /// Drain every pending event
    fn poll_events(&mut self) -> Vec<PlatformEvent>;
    /// Whether `key` is held right now
    fn is_pressed(&self, key: Key) -> bool;
}

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub quit_requested: bool,
    /// -1 up, +1 down, 0 none or both
    pub paddle1_intent: i32,
    pub paddle2_intent: i32,
}

/// Net direction from an up/down key pair
fn intent(up: bool, down: bool) -> i32 {
    let mut dir = 0;
    if up {
        dir -= 1;
    }
    if down {
        dir += 1;
    }
    dir
}

impl InputState {
    /// Build a snapshot from a quit flag and a key query
    pub fn from_keys(quit_event: bool, pressed: impl Fn(Key) -> bool) -> Self {
        Self {
            quit_requested: quit_event || pressed(Key::Escape),
            paddle1_intent: intent(pressed(Key::W), pressed(Key::S)),
            paddle2_intent: intent(pressed(Key::I), pressed(Key::K)),
        }
    }
}

/// Drain pending events and sample the keyboard
pub fn poll<E: EventSource + ?Sized>(source: &mut E) -> InputState {
    let quit_event = source
        .poll_events()
        .iter()
        .any(|e| *e == PlatformEvent::Quit);
    InputState::from_keys(quit_event, |key| source.is_pressed(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::ScriptedInput;

    #[test]
    fn test_intent_pairs() {
        let snap = InputState::from_keys(false, |k| k == Key::W);
        assert_eq!(snap.paddle1_intent, -1);
        assert_eq!(snap.paddle2_intent, 0);

        let snap = InputState::from_keys(false, |k| k == Key::K);
        assert_eq!(snap.paddle2_intent, 1);

        // Both keys cancel out
        let snap = InputState::from_keys(false, |k| matches!(k, Key::I | Key::K | Key::S));
        assert_eq!(snap.paddle1_intent, 1);
        assert_eq!(snap.paddle2_intent, 0);
        assert!(!snap.quit_requested);
    }

    #[test]
    fn test_escape_quits() {
        let snap = InputState::from_keys(false, |k| k == Key::Escape);
        assert!(snap.quit_requested);
    }

    #[test]
    fn test_poll_consumes_events_once() {
        let mut source = ScriptedInput::new();
        source.push_event(PlatformEvent::Other);
        source.push_event(PlatformEvent::Quit);
        source.hold(Key::S);

        let first = poll(&mut source);
        assert!(first.quit_requested);
        assert_eq!(first.paddle1_intent, 1);

        let second = poll(&mut source);
        assert!(!second.quit_requested);
        assert_eq!(second.paddle1_intent, 1);
    }
}
