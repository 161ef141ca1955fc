//! Fixed timestep simulation tick
//!
//! Advances the ball by one frame and resolves walls, paddle and scoring.
//! The checks run in a fixed order and are independent of each other, so a
//! single tick can fire several events (e.g. a corner bounce off the top and
//! back walls).

use glam::Vec2;

use super::geometry::rects_intersect;
use super::state::GameState;

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball reflected off the back wall and scored
    BackWallBounce { score: i64 },
    /// Ball was returned by the paddle
    PaddleHit,
    /// Ball left the court past the paddle
    Miss { score: i64 },
}

/// Advance the game state by one fixed timestep (`1 / frame_rate` seconds)
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let config = state.config().clone();
    let half_ball = (config.ball_size / 2) as f32;

    state.time_ticks += 1;

    // Find next position
    state.ball.pos += state.ball.vel / config.frame_rate as f32;

    // Bounce off top/bottom wall
    let top_of_ball = state.ball.pos.y - half_ball;
    let bottom_of_ball = top_of_ball + config.ball_size as f32;
    if top_of_ball < config.wall_thickness as f32
        || bottom_of_ball > (config.window_height - config.wall_thickness) as f32
    {
        state.ball.vel.y = -state.ball.vel.y;
        log::debug!("Tick {}: wall bounce at y={}", state.time_ticks, state.ball.pos.y);
        events.push(GameEvent::WallBounce);
    }

    // Bounce off the back wall: one point and a faster ball
    let left_of_ball = state.ball.pos.x - half_ball;
    if left_of_ball < config.wall_thickness as f32 {
        let vel = Vec2::new(state.ball.vel.x.abs(), state.ball.vel.y);
        state.ball.vel = speed_up(vel, config.ball_speed_factor);
        state.score += 1;
        log::debug!(
            "Tick {}: back wall bounce, score {} speed {:?}",
            state.time_ticks,
            state.score,
            state.ball.vel
        );
        events.push(GameEvent::BackWallBounce { score: state.score });
    }

    // Return off the paddle
    if rects_intersect(&state.ball_rect(), &state.paddle_rect()) {
        state.ball.vel.x = -state.ball.vel.x.abs();
        log::debug!("Tick {}: paddle hit at y={}", state.time_ticks, state.paddle.y);
        events.push(GameEvent::PaddleHit);
    }

    // Missed - minus one point, velocity already points right
    if state.ball.pos.x > config.window_width as f32 {
        state.score -= 1;
        state.recenter_ball();
        log::debug!("Tick {}: miss, score {}", state.time_ticks, state.score);
        events.push(GameEvent::Miss { score: state.score });
    }

    events
}

/// Scale both velocity components, dropping the fractional pixel/second
///
/// Each product is truncated toward zero, so the sign of a component never
/// flips.
fn speed_up(vel: Vec2, factor: f64) -> Vec2 {
    let scale = |v: f32| (v as f64 * factor).trunc() as f32;
    Vec2::new(scale(vel.x), scale(vel.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Config;
    use glam::IVec2;
    use proptest::prelude::*;

    const CENTER_X: i32 = WINDOW_WIDTH / 2;
    const CENTER_Y: i32 = WINDOW_HEIGHT / 2;
    const HALF_BALL: i32 = BALL_SIZE / 2;

    /// Convert a per-frame speed to pixels per second
    fn pix_per_sec(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y) * FRAME_RATE as f32
    }

    struct MotionCase {
        pos: (i32, i32),
        vel: Vec2,
        paddle: i32,
        next_pos: (i32, i32),
        next_vel: Vec2,
    }

    fn case(pos: (i32, i32), vel: Vec2, paddle: i32, next_pos: (i32, i32), next_vel: Vec2) -> MotionCase {
        MotionCase {
            pos,
            vel,
            paddle,
            next_pos,
            next_vel,
        }
    }

    fn state_at(pos: (i32, i32), vel: Vec2, paddle: i32) -> GameState {
        GameState::with_initial(
            &Config::default(),
            Vec2::new(pos.0 as f32, pos.1 as f32),
            vel,
            paddle,
        )
    }

    fn motion_cases() -> Vec<MotionCase> {
        vec![
            // Ball moves in empty space
            case((CENTER_X, CENTER_Y), pix_per_sec(1.0, 1.0), 0,
                (CENTER_X + 1, CENTER_Y + 1), pix_per_sec(1.0, 1.0)),
            case((CENTER_X, CENTER_Y), pix_per_sec(1.0, -2.0), 0,
                (CENTER_X + 1, CENTER_Y - 2), pix_per_sec(1.0, -2.0)),
            case((CENTER_X, CENTER_Y), pix_per_sec(-1.0, 1.0), 0,
                (CENTER_X - 1, CENTER_Y + 1), pix_per_sec(-1.0, 1.0)),
            case((CENTER_X / 2, CENTER_Y), pix_per_sec(1.0, 1.0), 0,
                (CENTER_X / 2 + 1, CENTER_Y + 1), pix_per_sec(1.0, 1.0)),
            case((CENTER_X, CENTER_Y / 2), pix_per_sec(1.0, -2.0), 0,
                (CENTER_X + 1, CENTER_Y / 2 - 2), pix_per_sec(1.0, -2.0)),
            case((CENTER_X / 2, CENTER_Y / 2), pix_per_sec(-1.0, 1.0), 0,
                (CENTER_X / 2 - 1, CENTER_Y / 2 + 1), pix_per_sec(-1.0, 1.0)),
            // Ball hits top/bottom wall
            case((CENTER_X, WALL_THICKNESS + HALF_BALL + 2), pix_per_sec(1.0, -3.0), 0,
                (CENTER_X + 1, WALL_THICKNESS + HALF_BALL - 1), pix_per_sec(1.0, 3.0)),
            case((CENTER_X / 2, WINDOW_HEIGHT - WALL_THICKNESS - HALF_BALL - 2), pix_per_sec(-2.0, 4.0), 0,
                (CENTER_X / 2 - 2, WINDOW_HEIGHT - WALL_THICKNESS - HALF_BALL + 2), pix_per_sec(-2.0, -4.0)),
            // Ball hits back wall
            case((WALL_THICKNESS + HALF_BALL + 1, CENTER_Y), pix_per_sec(-4.0, -3.0), 0,
                (WALL_THICKNESS + HALF_BALL - 3, CENTER_Y - 3),
                pix_per_sec(4.0 * BALL_SPEED_FACTOR as f32, -3.0 * BALL_SPEED_FACTOR as f32)),
            // Ball hits paddle
            case((WINDOW_WIDTH - PADDLE_DIST_FROM_EDGE, CENTER_Y), pix_per_sec(1.0, 1.0), CENTER_Y,
                (WINDOW_WIDTH - PADDLE_DIST_FROM_EDGE + 1, CENTER_Y + 1), pix_per_sec(-1.0, 1.0)),
            // Ball leaves the screen
            case((WINDOW_WIDTH + HALF_BALL + 10, CENTER_Y), pix_per_sec(1.0, 1.0), 0,
                (CENTER_X, CENTER_Y), pix_per_sec(1.0, 1.0)),
        ]
    }

    #[test]
    fn test_motion_of_ball() {
        for (i, c) in motion_cases().into_iter().enumerate() {
            let mut state = state_at(c.pos, c.vel, c.paddle);
            tick(&mut state);
            assert_eq!(state.ball_pos(), IVec2::new(c.next_pos.0, c.next_pos.1), "case {}", i);
            let vel = state.ball_vel();
            assert!(
                (vel - c.next_vel).abs().max_element() < 1e-3,
                "case {}: velocity {:?} != {:?}",
                i,
                vel,
                c.next_vel
            );
        }
    }

    #[test]
    fn test_point_increase() {
        let mut state = state_at((WALL_THICKNESS + HALF_BALL + 1, CENTER_Y), pix_per_sec(-4.0, -3.0), CENTER_Y);
        assert_eq!(state.score(), 0);
        let events = tick(&mut state);
        assert_eq!(state.score(), 1);
        assert_eq!(events, vec![GameEvent::BackWallBounce { score: 1 }]);
    }

    #[test]
    fn test_point_decrease() {
        let mut state = state_at((WINDOW_WIDTH + HALF_BALL + 10, CENTER_Y), pix_per_sec(1.0, 1.0), 0);
        assert_eq!(state.score(), 0);
        let events = tick(&mut state);
        assert_eq!(state.score(), -1);
        assert_eq!(events, vec![GameEvent::Miss { score: -1 }]);
    }

    #[test]
    fn test_miss_resets_regardless_of_direction() {
        let mut state = state_at((WINDOW_WIDTH + 200, CENTER_Y / 2), pix_per_sec(-1.0, 2.0), 0);
        tick(&mut state);
        assert_eq!(state.ball_pos(), IVec2::new(CENTER_X, CENTER_Y));
        assert_eq!(state.score(), -1);
        assert_eq!(state.ball_vel(), pix_per_sec(-1.0, 2.0));
    }

    #[test]
    fn test_corner_bounce_fires_both_events() {
        let mut state = state_at(
            (WALL_THICKNESS + HALF_BALL + 1, WALL_THICKNESS + HALF_BALL + 1),
            pix_per_sec(-2.0, -2.0),
            CENTER_Y,
        );
        let events = tick(&mut state);
        assert_eq!(
            events,
            vec![GameEvent::WallBounce, GameEvent::BackWallBounce { score: 1 }]
        );
        let vel = state.ball_vel();
        assert!(vel.x > 0.0 && vel.y > 0.0);
    }

    #[test]
    fn test_paddle_hit_keeps_speed_and_score() {
        let mut state = state_at((WINDOW_WIDTH - PADDLE_DIST_FROM_EDGE, CENTER_Y), pix_per_sec(1.0, 1.0), CENTER_Y);
        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::PaddleHit]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.ball_vel().length(), pix_per_sec(1.0, 1.0).length());
    }

    #[test]
    fn test_speed_up_truncates_toward_zero() {
        assert_eq!(speed_up(Vec2::new(100.0, -100.0), 1.05), Vec2::new(105.0, -105.0));
        assert_eq!(speed_up(Vec2::new(110.0, -110.0), 1.05), Vec2::new(115.0, -115.0));
    }

    #[test]
    fn test_tick_counter() {
        let mut state = GameState::new(&Config::default());
        for _ in 0..5 {
            tick(&mut state);
        }
        assert_eq!(state.time_ticks(), 5);
    }

    proptest! {
        #[test]
        fn prop_free_flight_moves_by_velocity(
            x in 200i32..600,
            y in 150i32..450,
            vx in -5i32..=5,
            vy in -5i32..=5,
        ) {
            let vel = pix_per_sec(vx as f32, vy as f32);
            let mut state = state_at((x, y), vel, 0);
            let events = tick(&mut state);
            prop_assert!(events.is_empty());
            prop_assert_eq!(state.ball_pos(), IVec2::new(x + vx, y + vy));
            prop_assert_eq!(state.ball_vel(), vel);
        }

        #[test]
        fn prop_back_wall_never_slows_ball(vx in 1i32..20, vy in -20i32..20) {
            let vel = pix_per_sec(-(vx as f32), vy as f32);
            let mut state = state_at((WALL_THICKNESS + HALF_BALL, CENTER_Y), vel, CENTER_Y);
            tick(&mut state);
            prop_assert!(state.ball_vel().x > 0.0);
            prop_assert!(state.ball_vel().length() >= vel.length());
        }
    }
}
