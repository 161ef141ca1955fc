//! Demo-mode paddle control
//!
//! Chases the ball with the same per-frame step a keyboard player gets, aiming
//! at a random point on the paddle face for each approach. A wide enough aim
//! offset makes it miss now and then, which keeps demo runs from looping
//! forever. Seeded, so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::PaddleController;
use crate::error::ControllerError;
use crate::settings::Config;
use crate::sim::GameState;

/// Extra aim spread beyond the paddle's half height (pixels)
const AIM_SLOP: i32 = 20;

/// Paddle controller that tracks the ball on its own
#[derive(Debug, Clone)]
pub struct AutopilotController {
    rng: Pcg32,
    max_step: i32,
    aim_spread: i32,
    /// Offset from the ball center to aim the paddle center at
    aim_offset: i32,
    /// Whether the ball was heading toward the paddle last frame
    approaching: bool,
}

impl AutopilotController {
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_step: config.paddle_speed,
            aim_spread: config.paddle_height / 2 + AIM_SLOP,
            aim_offset: 0,
            approaching: false,
        }
    }

    pub fn aim_offset(&self) -> i32 {
        self.aim_offset
    }
}

impl PaddleController for AutopilotController {
    fn target(&mut self, state: &GameState) -> Result<Option<i32>, ControllerError> {
        let approaching = state.ball_vel().x > 0.0;
        if approaching && !self.approaching {
            self.aim_offset = self.rng.random_range(-self.aim_spread..=self.aim_spread);
            log::debug!("Autopilot aiming {} px off the ball", self.aim_offset);
        }
        self.approaching = approaching;

        // Drift back to the middle while the ball is heading away
        let goal = if approaching {
            state.ball_pos().y + self.aim_offset
        } else {
            state.config().window_height / 2
        };

        let paddle_y = state.paddle_y();
        let step = (goal - paddle_y).clamp(-self.max_step, self.max_step);
        Ok((step != 0).then_some(paddle_y + step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::drive;
    use crate::sim::tick;
    use glam::Vec2;

    #[test]
    fn test_step_is_capped() {
        let config = Config::default();
        let mut pilot = AutopilotController::new(&config, 7);
        let state = GameState::with_initial(&config, Vec2::new(400.0, 100.0), Vec2::new(60.0, 0.0), 500);
        let target = pilot.target(&state).unwrap().unwrap();
        assert!((state.paddle_y() - target).abs() <= config.paddle_speed);
    }

    #[test]
    fn test_aim_within_spread() {
        let config = Config::default();
        let spread = config.paddle_height / 2 + AIM_SLOP;
        for seed in 0..50 {
            let mut pilot = AutopilotController::new(&config, seed);
            let state = GameState::with_initial(&config, Vec2::new(400.0, 300.0), Vec2::new(60.0, 0.0), 300);
            pilot.target(&state).unwrap();
            assert!(pilot.aim_offset().abs() <= spread);
        }
    }

    #[test]
    fn test_returns_to_center_when_ball_leaves() {
        let config = Config::default();
        let mut pilot = AutopilotController::new(&config, 1);
        let state = GameState::with_initial(&config, Vec2::new(400.0, 100.0), Vec2::new(-60.0, 0.0), 300);
        assert_eq!(pilot.target(&state), Ok(None));
    }

    #[test]
    fn test_same_seed_same_game() {
        let config = Config::default();
        let run = |seed| {
            let mut state = GameState::new(&config);
            let mut pilot = AutopilotController::new(&config, seed);
            for _ in 0..2_000 {
                drive(&mut pilot, &mut state).unwrap();
                tick(&mut state);
            }
            (state.score(), state.paddle_y(), state.ball_pos())
        };
        assert_eq!(run(42), run(42));
    }
}
