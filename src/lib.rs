//! CV Pong - single-player Pong steered by keyboard or hand tracking
//!
//! Core modules:
//! - `clock`: Fixed-rate frame pacing for the main loop
//! - `sim`: Fixed-timestep simulation (geometry, vector helpers, game state, tick)
//! - `controller`: Paddle input sources (keyboard, webcam hand tracking, autopilot)
//! - `view`: Read-only draw list and view implementations
//! - `settings`: Process-wide configuration loaded once at startup
//! - `error`: Error types shared across the crate

pub mod clock;
pub mod controller;
pub mod error;
pub mod settings;
pub mod sim;
pub mod view;

pub use clock::FrameClock;
pub use error::{ControllerError, SettingsError, VectorError};
pub use settings::{Config, Rgb, Rgba};

/// Game configuration constants
///
/// These are the defaults behind [`Config::default`]. All positions are in
/// pixels from the top left of the window, with Y increasing downward.
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;
    /// Simulation and render rate (frames per second)
    pub const FRAME_RATE: u32 = 60;

    /// Court walls (top, left, bottom)
    pub const WALL_THICKNESS: i32 = 10;

    /// Paddle defaults - paddle guards the open right edge
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    /// Distance from the right edge of the window to the paddle's outer edge
    pub const PADDLE_DIST_FROM_EDGE: i32 = 20;
    /// Keyboard paddle step (pixels per frame)
    pub const PADDLE_SPEED: i32 = 8;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 50;
    /// Initial speed along each axis (pixels per second)
    pub const BALL_INITIAL_SPEED: f32 = 100.0;
    /// Speed boost on every back-wall bounce (multiplicative)
    pub const BALL_SPEED_FACTOR: f64 = 1.05;

    /// Offset of the score text's top-center below the top wall
    pub const SCORE_MARGIN: i32 = 10;

    /// Colors (RGB)
    pub const BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];
    /// Translucent court drawn over the camera feed (RGBA)
    pub const COURT_OVERLAY_COLOR: [u8; 4] = [0, 0, 0, 160];
    pub const WALL_COLOR: [u8; 3] = [255, 255, 255];
    pub const BALL_COLOR: [u8; 3] = [255, 255, 255];
    pub const PADDLE_COLOR: [u8; 3] = [255, 255, 255];
    pub const SCORE_COLOR: [u8; 3] = [200, 200, 200];
}
