//! Game state and core simulation types
//!
//! All X/Y positions are measured from the top left of the window, so Y
//! increases downward (matching camera image coordinates).

use glam::{IVec2, Vec2};

use super::geometry::Rect;
use crate::settings::Config;

/// The ball
///
/// Position keeps sub-pixel precision; readers see it truncated to whole
/// pixels through [`GameState::ball_pos`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center position (pixels)
    pub pos: Vec2,
    /// Velocity (pixels per second)
    pub vel: Vec2,
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    /// Y coordinate of the paddle center, always within the court
    pub y: i32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: Config,
    pub(crate) ball: Ball,
    pub(crate) paddle: Paddle,
    pub(crate) score: i64,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl GameState {
    /// Start a new game: ball centered and heading up-left, paddle centered
    pub fn new(config: &Config) -> Self {
        let speed = config.ball_initial_speed;
        Self::with_initial(
            config,
            config.center().as_vec2(),
            Vec2::new(-speed, -speed),
            config.window_height / 2,
        )
    }

    /// Start a game from explicit initial values
    ///
    /// The paddle is clamped into the court exactly like [`Self::move_paddle`].
    pub fn with_initial(config: &Config, ball_pos: Vec2, ball_vel: Vec2, paddle_y: i32) -> Self {
        let mut state = Self {
            config: config.clone(),
            ball: Ball {
                pos: ball_pos,
                vel: ball_vel,
            },
            paddle: Paddle { y: 0 },
            score: 0,
            time_ticks: 0,
        };
        state.move_paddle(paddle_y);
        state
    }

    /// Configuration this game was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Move the paddle center toward `target_y`, saturating at the walls
    pub fn move_paddle(&mut self, target_y: i32) {
        let (min, max) = self.config.paddle_bounds();
        self.paddle.y = target_y.clamp(min, max);
    }

    /// Ball center, truncated to whole pixels
    pub fn ball_pos(&self) -> IVec2 {
        self.ball.pos.as_ivec2()
    }

    /// Ball center with sub-pixel precision
    pub fn ball_pos_exact(&self) -> Vec2 {
        self.ball.pos
    }

    /// Ball velocity (pixels per second)
    pub fn ball_vel(&self) -> Vec2 {
        self.ball.vel
    }

    /// Y coordinate of the paddle center
    pub fn paddle_y(&self) -> i32 {
        self.paddle.y
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of ticks simulated so far
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Valid range of the paddle center (inclusive)
    pub fn paddle_bounds(&self) -> (i32, i32) {
        self.config.paddle_bounds()
    }

    /// Ball bounding box
    pub fn ball_rect(&self) -> Rect {
        let size = self.config.ball_size;
        let top_left = self.ball_pos() - IVec2::splat(size / 2);
        Rect::new(top_left.x, top_left.y, size, size)
    }

    /// Paddle bounding box (fixed horizontal position)
    pub fn paddle_rect(&self) -> Rect {
        let c = &self.config;
        Rect::new(
            c.paddle_left(),
            self.paddle.y - c.paddle_height / 2,
            c.paddle_width,
            c.paddle_height,
        )
    }

    /// Put the ball back at the center of the window, keeping its velocity
    pub(crate) fn recenter_ball(&mut self) {
        self.ball.pos = self.config.center().as_vec2();
    }
}
