//! Webcam hand-tracking paddle control
//!
//! The capture device and the landmark model are external collaborators
//! behind [`FrameSource`] and [`HandDetector`]. Each frame the controller
//! blocks on one camera read, runs the detector, and maps the hand's height
//! in the image to a paddle coordinate.

use glam::Vec2;

use super::PaddleController;
use crate::error::ControllerError;
use crate::settings::Config;
use crate::sim::GameState;

/// A packed RGB camera image (3 bytes per pixel, row-major)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * 3);
        Self {
            width,
            height,
            data,
        }
    }

    /// Whether the buffer holds `width * height` RGB pixels and is not empty
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.data.len() == self.width * self.height * 3
    }

    /// Flip left-right so the feed behaves like a mirror
    pub fn mirror(&mut self) {
        if self.width == 0 {
            return;
        }
        let row_len = self.width * 3;
        for row in self.data.chunks_exact_mut(row_len) {
            for x in 0..self.width / 2 {
                let (a, b) = (x * 3, (self.width - 1 - x) * 3);
                for c in 0..3 {
                    row.swap(a + c, b + c);
                }
            }
        }
    }
}

/// An opened video capture device
pub trait FrameSource {
    fn is_opened(&self) -> bool;
    /// Blocking read of the next frame; `None` if the read failed
    fn read_frame(&mut self) -> Option<Frame>;
}

/// Number of points in the hand landmark model
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Normalized hand landmark positions (0.0..=1.0 across the image)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    points: [Vec2; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    pub const WRIST: usize = 0;
    pub const MIDDLE_FINGER_MCP: usize = 9;

    pub fn new(points: [Vec2; HAND_LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn wrist(&self) -> Vec2 {
        self.points[Self::WRIST]
    }

    pub fn middle_finger_mcp(&self) -> Vec2 {
        self.points[Self::MIDDLE_FINGER_MCP]
    }

    /// Midpoint between the wrist and the base of the middle finger
    pub fn palm_center(&self) -> Vec2 {
        (self.wrist() + self.middle_finger_mcp()) / 2.0
    }
}

/// A hand landmark model session
pub trait HandDetector {
    /// Landmarks of the first detected hand, or `None` if no hand is visible
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks>;
}

/// Paddle controller driven by the player's hand height
pub struct VisionController<S, D> {
    source: S,
    detector: D,
    window_height: i32,
    /// Last frame read, mirrored, kept for the view's background
    camera_frame: Option<Frame>,
}

impl<S: FrameSource, D: HandDetector> VisionController<S, D> {
    pub fn new(source: S, detector: D, config: &Config) -> Self {
        if !source.is_opened() {
            log::warn!("Camera is not open; hand tracking will fail until it is");
        }
        Self {
            source,
            detector,
            window_height: config.window_height,
            camera_frame: None,
        }
    }

    /// Map normalized landmarks to a paddle center coordinate
    fn paddle_target(&self, hand: &HandLandmarks) -> i32 {
        (hand.palm_center().y * self.window_height as f32) as i32
    }
}

impl<S: FrameSource, D: HandDetector> PaddleController for VisionController<S, D> {
    fn target(&mut self, _state: &GameState) -> Result<Option<i32>, ControllerError> {
        if !self.source.is_opened() {
            return Err(ControllerError::CameraUnavailable);
        }
        let mut frame = self
            .source
            .read_frame()
            .ok_or(ControllerError::CameraUnavailable)?;
        if !frame.is_valid() {
            log::debug!("Camera returned a malformed {}x{} frame", frame.width, frame.height);
            return Err(ControllerError::CameraUnavailable);
        }
        frame.mirror();

        let target = self
            .detector
            .detect(&frame)
            .map(|hand| self.paddle_target(&hand));
        self.camera_frame = Some(frame);

        if target.is_none() {
            log::trace!("No hand detected");
        }
        Ok(target)
    }

    /// Most recent (mirrored) camera frame, if any frame has been read
    fn camera_frame(&self) -> Option<&Frame> {
        self.camera_frame.as_ref()
    }
}
