//! Paddle controllers
//!
//! A controller looks at the current game state (and whatever external
//! signal it owns) and proposes where the paddle center should be this
//! frame. The model does the clamping.

pub mod autopilot;
pub mod keyboard;
pub mod vision;

pub use autopilot::AutopilotController;
pub use keyboard::{Key, KeyEvent, KeyboardController};
pub use vision::{Frame, FrameSource, HandDetector, HandLandmarks, VisionController};

use crate::error::ControllerError;
use crate::sim::GameState;

/// Produces a target paddle coordinate once per frame
pub trait PaddleController {
    /// Target Y for the paddle center, or `None` to leave the paddle where it is
    fn target(&mut self, state: &GameState) -> Result<Option<i32>, ControllerError>;

    /// Latest camera frame to show behind the court, for camera-driven controllers
    fn camera_frame(&self) -> Option<&Frame> {
        None
    }
}

impl<C: PaddleController + ?Sized> PaddleController for Box<C> {
    fn target(&mut self, state: &GameState) -> Result<Option<i32>, ControllerError> {
        (**self).target(state)
    }

    fn camera_frame(&self) -> Option<&Frame> {
        (**self).camera_frame()
    }
}

/// Ask `controller` for a target and apply it to the paddle
pub fn drive<C: PaddleController + ?Sized>(
    controller: &mut C,
    state: &mut GameState,
) -> Result<(), ControllerError> {
    if let Some(target_y) = controller.target(state)? {
        state.move_paddle(target_y);
    }
    Ok(())
}
