//! Presentation
//!
//! Views only read the game state. [`Scene`] flattens it into a backdrop, a
//! list of colored rectangles and the score label so any backend can paint
//! it. When a camera feed is available the mirrored frame becomes the
//! backdrop and the court is tinted over it.

use glam::IVec2;

use crate::controller::Frame;
use crate::settings::{Config, Rgb, Rgba};
use crate::sim::{GameState, Rect};

/// Something that can present the game once per frame
pub trait PongView {
    /// `feed` is the latest mirrored camera frame, if the paddle is hand tracked
    fn draw(&mut self, state: &GameState, feed: Option<&Frame>);
}

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredRect {
    pub rect: Rect,
    pub color: Rgb,
}

/// What goes behind the walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop<'a> {
    /// Opaque fill of the whole window
    Solid(ColoredRect),
    /// Camera frame stretched over the window, then a translucent court
    Camera {
        frame: &'a Frame,
        court: Rect,
        tint: Rgba,
    },
}

/// The score text and where its top-center goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLabel {
    pub text: String,
    pub anchor: IVec2,
    pub color: Rgb,
}

/// Everything needed to paint one frame, back to front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene<'a> {
    pub backdrop: Backdrop<'a>,
    /// Top, left and bottom walls (the right side is open)
    pub walls: [ColoredRect; 3],
    pub ball: ColoredRect,
    pub paddle: ColoredRect,
    pub score: ScoreLabel,
}

impl<'a> Scene<'a> {
    /// Scene with the plain background
    pub fn build(state: &GameState) -> Self {
        Self::build_with_feed(state, None)
    }

    pub fn build_with_feed(state: &GameState, feed: Option<&'a Frame>) -> Self {
        let c: &Config = state.config();
        let (w, h, t) = (c.window_width, c.window_height, c.wall_thickness);
        let wall = |rect| ColoredRect {
            rect,
            color: c.wall_color,
        };

        let backdrop = match feed {
            Some(frame) => Backdrop::Camera {
                frame,
                court: Rect::new(t, t, w - t, h - 2 * t),
                tint: c.court_overlay_color,
            },
            None => Backdrop::Solid(ColoredRect {
                rect: Rect::new(0, 0, w, h),
                color: c.background_color,
            }),
        };

        Self {
            backdrop,
            walls: [
                wall(Rect::new(0, 0, w, t)),
                wall(Rect::new(0, 0, t, h)),
                wall(Rect::new(0, h - t, w, t)),
            ],
            ball: ColoredRect {
                rect: state.ball_rect(),
                color: c.ball_color,
            },
            paddle: ColoredRect {
                rect: state.paddle_rect(),
                color: c.paddle_color,
            },
            score: ScoreLabel {
                text: state.score().to_string(),
                anchor: c.score_anchor(),
                color: c.score_color,
            },
        }
    }

    /// Opaque rectangles in paint order, starting with a solid backdrop
    pub fn rects(&self) -> impl Iterator<Item = &ColoredRect> {
        let solid = match &self.backdrop {
            Backdrop::Solid(fill) => Some(fill),
            Backdrop::Camera { .. } => None,
        };
        solid
            .into_iter()
            .chain(self.walls.iter())
            .chain([&self.ball, &self.paddle])
    }
}

/// Headless view that reports score changes through the logger
#[derive(Debug, Default)]
pub struct LogView {
    last_score: Option<i64>,
    frames: u64,
    feed_frames: u64,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames drawn
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of frames drawn over a camera backdrop
    pub fn feed_frames(&self) -> u64 {
        self.feed_frames
    }
}

impl PongView for LogView {
    fn draw(&mut self, state: &GameState, feed: Option<&Frame>) {
        self.frames += 1;
        let scene = Scene::build_with_feed(state, feed);
        if let Backdrop::Camera { frame, .. } = scene.backdrop {
            self.feed_frames += 1;
            log::trace!("Camera backdrop {}x{}", frame.width, frame.height);
        }
        if self.last_score != Some(state.score()) {
            log::info!("Score: {}", scene.score.text);
            self.last_score = Some(state.score());
        }
        log::trace!(
            "Frame {}: ball {:?} paddle {:?}",
            self.frames,
            scene.ball.rect,
            scene.paddle.rect
        );
    }
}
