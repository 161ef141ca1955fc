//! Game configuration
//!
//! Built once at startup and passed by reference to the simulation, the
//! controllers and the view. Defaults come from [`crate::consts`]; a JSON file
//! may override any subset of fields.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::vector::scale_tuple;

/// Largest accepted window side (pixels)
pub const MAX_WINDOW_DIM: i32 = 1 << 15;

/// An RGB color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb(c[0], c[1], c[2])
    }
}

/// An RGBA color with straight alpha, serialized as `[r, g, b, a]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Rgba(c[0], c[1], c[2], c[3])
    }
}

/// Process-wide game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Display ===
    pub window_width: i32,
    pub window_height: i32,
    /// Fixed simulation rate (ticks per second)
    pub frame_rate: u32,

    // === Court ===
    pub wall_thickness: i32,

    // === Paddle ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Distance from the right window edge to the paddle's outer edge
    pub paddle_dist_from_edge: i32,
    /// Keyboard step per frame (pixels)
    pub paddle_speed: i32,

    // === Ball ===
    pub ball_size: i32,
    /// Initial speed along each axis (pixels per second)
    pub ball_initial_speed: f32,
    /// Multiplier applied on each back-wall bounce
    pub ball_speed_factor: f64,

    // === HUD ===
    pub score_margin: i32,

    // === Colors ===
    pub background_color: Rgb,
    /// Court tint drawn over the camera feed
    pub court_overlay_color: Rgba,
    pub wall_color: Rgb,
    pub ball_color: Rgb,
    pub paddle_color: Rgb,
    pub score_color: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            frame_rate: FRAME_RATE,

            wall_thickness: WALL_THICKNESS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_dist_from_edge: PADDLE_DIST_FROM_EDGE,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_initial_speed: BALL_INITIAL_SPEED,
            ball_speed_factor: BALL_SPEED_FACTOR,

            score_margin: SCORE_MARGIN,

            background_color: BACKGROUND_COLOR.into(),
            court_overlay_color: COURT_OVERLAY_COLOR.into(),
            wall_color: WALL_COLOR.into(),
            ball_color: BALL_COLOR.into(),
            paddle_color: PADDLE_COLOR.into(),
            score_color: SCORE_COLOR.into(),
        }
    }
}

impl Config {
    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check that the geometry is playable
    ///
    /// Every length is bounded by the window, and the window by
    /// [`MAX_WINDOW_DIM`], so the derived geometry cannot overflow `i32`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| {
            log::warn!("Rejected configuration: {}", msg);
            Err(SettingsError::Invalid(msg))
        };
        let (w, h) = (self.window_width as i64, self.window_height as i64);
        let max = MAX_WINDOW_DIM as i64;

        if !(1..=max).contains(&w) || !(1..=max).contains(&h) {
            return invalid(format!(
                "window size must be between 1 and {} pixels per side, got {}x{}",
                max, w, h
            ));
        }
        if self.frame_rate == 0 {
            return invalid("frame rate must be positive".to_string());
        }
        let t = self.wall_thickness as i64;
        if t < 0 || t >= w || 2 * t >= h {
            return invalid(format!("wall thickness {} does not fit a {}x{} window", t, w, h));
        }
        if self.ball_size <= 0 || self.paddle_width <= 0 || self.paddle_height <= 0 {
            return invalid("ball and paddle sizes must be positive".to_string());
        }
        if self.ball_size as i64 > w.min(h) {
            return invalid(format!("ball size {} does not fit a {}x{} window", self.ball_size, w, h));
        }
        if !(0..=h).contains(&(self.paddle_speed as i64)) {
            return invalid(format!(
                "paddle speed must be between 0 and the window height, got {}",
                self.paddle_speed
            ));
        }
        let court_height = h - 2 * t;
        if court_height < self.paddle_height as i64 {
            return invalid(format!(
                "court height {} cannot fit a paddle of height {}",
                court_height, self.paddle_height
            ));
        }
        let dist = self.paddle_dist_from_edge as i64;
        if dist < 0 || dist + self.paddle_width as i64 > w {
            return invalid(format!(
                "paddle {} px from the edge does not fit a window {} px wide",
                dist, w
            ));
        }
        if !(0..=h).contains(&(self.score_margin as i64)) {
            return invalid(format!(
                "score margin must be between 0 and the window height, got {}",
                self.score_margin
            ));
        }
        if !self.ball_initial_speed.is_finite() {
            return invalid("ball initial speed must be finite".to_string());
        }
        if !self.ball_speed_factor.is_finite() || self.ball_speed_factor < 1.0 {
            return invalid(format!(
                "ball speed factor must be at least 1.0, got {}",
                self.ball_speed_factor
            ));
        }
        Ok(())
    }

    /// Center of the window, truncated to whole pixels
    pub fn center(&self) -> IVec2 {
        let c = scale_tuple(&[self.window_width, self.window_height], 0.5);
        IVec2::new(c[0], c[1])
    }

    /// Valid range of the paddle center's Y coordinate (inclusive)
    pub fn paddle_bounds(&self) -> (i32, i32) {
        let half = self.paddle_height / 2;
        (
            self.wall_thickness + half,
            self.window_height - self.wall_thickness - half,
        )
    }

    /// X coordinate of the paddle's left (court-facing) edge
    pub fn paddle_left(&self) -> i32 {
        self.window_width - self.paddle_dist_from_edge - self.paddle_width
    }

    /// Top-center anchor of the score text
    pub fn score_anchor(&self) -> IVec2 {
        IVec2::new(self.window_width / 2, self.wall_thickness + self.score_margin)
    }
}
