//! Physics/collision step
//!
//! Advances paddles and balls by one frame's delta time and resolves contacts.

use super::collision::{Contact, detect_contact, reflect};
use super::state::{GameEvent, GameState};
use crate::input::InputState;

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) {
    // Intent only lives for this frame
    state.paddle1.dir = input.paddle1_intent;
    state.paddle2.dir = input.paddle2_intent;
    state.paddle1.advance(&state.arena, dt);
    state.paddle2.advance(&state.arena, dt);

    // Retired balls keep drifting; they are only skipped for contacts
    for ball in &mut state.balls {
        ball.pos += ball.vel * dt;
    }

    let paddle1 = state.paddle1.pos;
    let paddle2 = state.paddle2.pos;
    for index in 0..state.balls.len() {
        let ball = &mut state.balls[index];
        if !ball.active {
            continue;
        }

        let contact = detect_contact(ball, paddle1, paddle2, &state.arena);
        match contact {
            Contact::Paddle(side) => {
                reflect(ball, contact);
                log::trace!("ball {} returned by {:?} paddle", index, side);
                state.events.push(GameEvent::PaddleHit { ball: index, side });
            }
            Contact::Wall(wall) => {
                reflect(ball, contact);
                state.events.push(GameEvent::WallBounce { ball: index, wall });
            }
            Contact::OutOfBounds => state.retire(index),
            Contact::None => {}
        }
    }
}
