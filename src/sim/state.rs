//! Game state and core simulation types
//!
//! Everything the physics step reads or mutates lives here. The state is owned
//! by the frame loop and handed to `tick` by mutable reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Which wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Playfield geometry and paddle tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    /// Wall height, paddle width and ball size
    pub thickness: i32,
    pub paddle_height: f32,
    /// Units per second at full intent
    pub paddle_speed: f32,
    /// Paddle center distance from its side edge
    pub paddle_inset: f32,
    /// Contact band `[near, far]`, measured inward from each side edge
    pub paddle_band: (f32, f32),
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            thickness: THICKNESS,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            paddle_band: (PADDLE_BAND_NEAR, PADDLE_BAND_FAR),
        }
    }
}

impl ArenaConfig {
    pub fn paddle_half_height(&self) -> f32 {
        self.paddle_height / 2.0
    }

    /// Lowest and highest y a paddle center may take
    pub fn paddle_bounds(&self) -> (f32, f32) {
        let half = self.paddle_half_height();
        let t = self.thickness as f32;
        (half + t, self.height - half - t)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle. `pos` is its center point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    /// Vertical intent for the current frame, one of -1, 0, +1
    pub dir: i32,
}

impl Paddle {
    /// Paddle at the vertical center, `inset` units from its side edge
    pub fn new(side: Side, arena: &ArenaConfig) -> Self {
        let x = match side {
            Side::Left => arena.paddle_inset,
            Side::Right => arena.width - arena.paddle_inset,
        };
        Self {
            pos: Vec2::new(x, arena.height / 2.0),
            dir: 0,
        }
    }

    /// Move by the current intent and keep the paddle between the walls.
    /// A paddle with no intent stays where it is.
    pub fn advance(&mut self, arena: &ArenaConfig, dt: f32) {
        if self.dir == 0 {
            return;
        }
        self.pos.y += self.dir as f32 * arena.paddle_speed * dt;

        let (min_y, max_y) = arena.paddle_bounds();
        if self.pos.y < min_y {
            self.pos.y = min_y;
        } else if self.pos.y > max_y {
            self.pos.y = max_y;
        }
    }
}

/// Initial position and velocity of one ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl BallSpawn {
    /// The three-ball set: all at the playfield center, fanning out
    pub fn defaults(arena: &ArenaConfig) -> Vec<BallSpawn> {
        let center = arena.center();
        [
            Vec2::new(-200.0, 235.0),
            Vec2::new(156.6, -133.3),
            Vec2::new(200.0, -235.0),
        ]
        .into_iter()
        .map(|vel| BallSpawn { pos: center, vel })
        .collect()
    }
}

/// A ball. Once `active` is false it never comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl From<BallSpawn> for Ball {
    fn from(spawn: BallSpawn) -> Self {
        Self {
            pos: spawn.pos,
            vel: spawn.vel,
            active: true,
        }
    }
}

/// Things that happened during a tick, for logging and feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball `ball` was returned by a paddle
    PaddleHit { ball: usize, side: Side },
    /// Ball `ball` bounced off a wall
    WallBounce { ball: usize, wall: Wall },
    /// Ball `ball` left the playfield; `retired` is the new tally
    BallRetired { ball: usize, retired: usize },
    /// Every ball has been retired
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: ArenaConfig,
    pub paddle1: Paddle,
    pub paddle2: Paddle,
    /// Stable order, used for rendering and event indices
    pub balls: Vec<Ball>,
    /// Events from the most recent ticks, drained by the frame loop
    pub events: Vec<GameEvent>,
    retired: usize,
    running: bool,
}

impl Default for GameState {
    fn default() -> Self {
        let arena = ArenaConfig::default();
        let spawns = BallSpawn::defaults(&arena);
        Self::new(arena, &spawns)
    }
}

impl GameState {
    /// Create a running state with paddles centered and one ball per spawn
    pub fn new(arena: ArenaConfig, spawns: &[BallSpawn]) -> Self {
        Self {
            paddle1: Paddle::new(Side::Left, &arena),
            paddle2: Paddle::new(Side::Right, &arena),
            balls: spawns.iter().copied().map(Ball::from).collect(),
            events: Vec::new(),
            retired: 0,
            running: true,
            arena,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.paddle1,
            Side::Right => &self.paddle2,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the loop to end after the current frame
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn retired(&self) -> usize {
        self.retired
    }

    pub fn total_balls(&self) -> usize {
        self.balls.len()
    }

    pub fn active_balls(&self) -> usize {
        self.balls.iter().filter(|b| b.active).count()
    }

    /// Retire ball `index` and end the game when it was the last one.
    /// Already retired balls are left alone.
    pub(crate) fn retire(&mut self, index: usize) {
        let Some(ball) = self.balls.get_mut(index) else {
            return;
        };
        if !ball.active {
            return;
        }
        ball.active = false;
        self.retired += 1;
        self.events.push(GameEvent::BallRetired {
            ball: index,
            retired: self.retired,
        });

        if self.retired == self.balls.len() {
            self.running = false;
            self.events.push(GameEvent::GameOver);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = GameState::default();
        assert!(state.is_running());
        assert_eq!(state.total_balls(), 3);
        assert_eq!(state.active_balls(), 3);
        assert_eq!(state.retired(), 0);
        assert_eq!(state.paddle1.pos, Vec2::new(10.0, 384.0));
        assert_eq!(state.paddle2.pos, Vec2::new(1014.0, 384.0));
        for ball in &state.balls {
            assert_eq!(ball.pos, Vec2::new(512.0, 384.0));
        }
        assert_eq!(state.balls[1].vel, Vec2::new(156.6, -133.3));
    }

    #[test]
    fn test_paddle_bounds() {
        let arena = ArenaConfig::default();
        assert_eq!(arena.paddle_bounds(), (65.0, 703.0));
    }

    #[test]
    fn test_retire_is_counted_once() {
        let mut state = GameState::default();
        state.retire(0);
        state.retire(0);
        assert_eq!(state.retired(), 1);
        assert!(!state.balls[0].active);
        assert!(state.is_running());

        state.retire(1);
        state.retire(2);
        assert_eq!(state.retired(), 3);
        assert!(!state.is_running());
        assert_eq!(state.events.last(), Some(&GameEvent::GameOver));
    }

    #[test]
    fn test_single_ball_variant() {
        let arena = ArenaConfig::default();
        let spawn = BallSpawn {
            pos: arena.center(),
            vel: Vec2::new(-200.0, 235.0),
        };
        let mut state = GameState::new(arena, &[spawn]);
        state.retire(0);
        assert!(!state.is_running());
    }
}
