//! Collision checks for a single ball
//!
//! Paddles are thin vertical bands a few units in from each side edge, walls
//! are horizontal lines `thickness` in from the top and bottom. The checks are
//! point-vs-band, not true shape intersection, and run as an ordered chain:
//! the first matching contact wins and nothing after it is tested.

use glam::Vec2;

use super::state::{ArenaConfig, Ball, Side, Wall};

/// Outcome of the contact chain for one ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Ball is inside a paddle's band and moving toward it
    Paddle(Side),
    /// Ball crossed a side edge
    OutOfBounds,
    /// Ball reached a wall while moving into it
    Wall(Wall),
    None,
}

/// Classify where an active ball is, given both paddle centers.
///
/// Boundary values count as contact (`<=` / `>=` throughout).
pub fn detect_contact(ball: &Ball, paddle1: Vec2, paddle2: Vec2, arena: &ArenaConfig) -> Contact {
    let half = arena.paddle_half_height();
    let (near, far) = arena.paddle_band;
    let t = arena.thickness as f32;
    let pos = ball.pos;
    let vel = ball.vel;

    if (pos.y - paddle1.y).abs() <= half && pos.x <= far && pos.x >= near && vel.x < 0.0 {
        Contact::Paddle(Side::Left)
    } else if (pos.y - paddle2.y).abs() <= half
        && pos.x <= arena.width - near
        && pos.x >= arena.width - far
        && vel.x > 0.0
    {
        Contact::Paddle(Side::Right)
    } else if pos.x <= 0.0 || pos.x >= arena.width {
        Contact::OutOfBounds
    } else if pos.y <= t && vel.y < 0.0 {
        Contact::Wall(Wall::Top)
    } else if pos.y >= arena.height - t && vel.y > 0.0 {
        Contact::Wall(Wall::Bottom)
    } else {
        Contact::None
    }
}

/// Apply the velocity change for a bounce. Out-of-bounds is handled by the
/// caller since it touches shared state.
pub fn reflect(ball: &mut Ball, contact: Contact) {
    match contact {
        Contact::Paddle(_) => ball.vel.x *= -1.0,
        Contact::Wall(_) => ball.vel.y *= -1.0,
        Contact::OutOfBounds | Contact::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            active: true,
        }
    }

    fn detect(b: &Ball) -> Contact {
        let arena = ArenaConfig::default();
        detect_contact(b, Vec2::new(10.0, 384.0), Vec2::new(1014.0, 384.0), &arena)
    }

    #[test]
    fn test_left_paddle_band() {
        assert_eq!(detect(&ball(22.0, 384.0, -200.0, 10.0)), Contact::Paddle(Side::Left));
        // Band edges are inclusive
        assert_eq!(detect(&ball(20.0, 434.0, -200.0, 0.0)), Contact::Paddle(Side::Left));
        assert_eq!(detect(&ball(25.0, 334.0, -200.0, 0.0)), Contact::Paddle(Side::Left));
        // Moving away from the paddle
        assert_eq!(detect(&ball(22.0, 384.0, 200.0, 0.0)), Contact::None);
        // Outside the band
        assert_eq!(detect(&ball(25.5, 384.0, -200.0, 0.0)), Contact::None);
        assert_eq!(detect(&ball(22.0, 434.5, -200.0, 0.0)), Contact::None);
    }

    #[test]
    fn test_right_paddle_band() {
        assert_eq!(detect(&ball(1002.0, 400.0, 200.0, 0.0)), Contact::Paddle(Side::Right));
        assert_eq!(detect(&ball(1004.0, 400.0, 200.0, 0.0)), Contact::Paddle(Side::Right));
        assert_eq!(detect(&ball(999.0, 400.0, 200.0, 0.0)), Contact::Paddle(Side::Right));
        assert_eq!(detect(&ball(1002.0, 400.0, -200.0, 0.0)), Contact::None);
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(detect(&ball(0.0, 384.0, -200.0, 0.0)), Contact::OutOfBounds);
        assert_eq!(detect(&ball(-3.0, 384.0, 200.0, 0.0)), Contact::OutOfBounds);
        assert_eq!(detect(&ball(1024.0, 384.0, 200.0, 0.0)), Contact::OutOfBounds);
        assert_eq!(detect(&ball(0.5, 384.0, -200.0, 0.0)), Contact::None);
    }

    #[test]
    fn test_walls_boundary_inclusive() {
        assert_eq!(detect(&ball(512.0, 15.0, 0.0, -50.0)), Contact::Wall(Wall::Top));
        assert_eq!(detect(&ball(512.0, 15.0, 0.0, 50.0)), Contact::None);
        assert_eq!(detect(&ball(512.0, 753.0, 0.0, 50.0)), Contact::Wall(Wall::Bottom));
        assert_eq!(detect(&ball(512.0, 753.0, 0.0, -50.0)), Contact::None);
    }

    #[test]
    fn test_chain_order() {
        // In the band but far from the paddle: falls through to the wall
        assert_eq!(detect(&ball(22.0, 10.0, -200.0, -50.0)), Contact::Wall(Wall::Top));
        // In the paddle band and past the top wall: the paddle wins
        let arena = ArenaConfig::default();
        let b = ball(22.0, 10.0, -200.0, -50.0);
        let hit = detect_contact(&b, Vec2::new(10.0, 40.0), Vec2::new(1014.0, 384.0), &arena);
        assert_eq!(hit, Contact::Paddle(Side::Left));
        // Off the side edge and past the wall: out of bounds wins
        assert_eq!(detect(&ball(-1.0, 5.0, -200.0, -50.0)), Contact::OutOfBounds);
    }

    #[test]
    fn test_reflect() {
        let mut b = ball(22.0, 384.0, -200.0, 30.0);
        reflect(&mut b, Contact::Paddle(Side::Left));
        assert_eq!(b.vel, Vec2::new(200.0, 30.0));
        reflect(&mut b, Contact::Wall(Wall::Top));
        assert_eq!(b.vel, Vec2::new(200.0, -30.0));
        reflect(&mut b, Contact::OutOfBounds);
        assert_eq!(b.vel, Vec2::new(200.0, -30.0));
    }
}
