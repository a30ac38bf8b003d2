// Ball physics and the collision/scoring judge primitives
//
// These are free functions over the entities so the session can sequence
// them, and so tests can drive them without a running match.

use super::state::{Ball, Paddle, Side};

/// Move the ball along its velocity for one integration step
pub fn advance(ball: &mut Ball, step: f32) {
    ball.x += ball.vx * step;
    ball.y += ball.vy * step;
}

/// Reflect off the top and bottom walls.
///
/// Only a ball still heading outwards is reflected, so a ball that has
/// tunneled past the wall flips once and then travels back instead of
/// flipping every tick. Position is not corrected.
pub fn reflect_off_walls(ball: &mut Ball, field_height: f32) -> bool {
    let past_top = ball.y - ball.radius < 0.0 && ball.vy < 0.0;
    let past_bottom = ball.y + ball.radius > field_height && ball.vy > 0.0;

    if past_top || past_bottom {
        ball.vy = -ball.vy;
        true
    } else {
        false
    }
}

/// Box-vs-box overlap, treating the ball as its bounding square
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x + ball.radius > paddle.x
        && ball.x - ball.radius < paddle.x + paddle.width
        && ball.y + ball.radius > paddle.y
        && ball.y - ball.radius < paddle.y + paddle.height
}

/// The paddle the ball is heading toward; the only one eligible for a hit
pub fn approaching_side(ball: &Ball) -> Side {
    if ball.vx < 0.0 {
        Side::Player
    } else {
        Side::Opponent
    }
}

/// Send the ball back the way it came, faster.
///
/// The horizontal component is inverted and scaled by `multiplier`. When
/// `max_speed` is set the speed-up stops at the cap, but a hit never slows the
/// ball. The vertical component is untouched.
pub fn bounce_off_paddle(ball: &mut Ball, multiplier: f32, max_speed: Option<f32>) {
    let incoming = ball.vx.abs();
    let mut speed = incoming * multiplier;
    if let Some(cap) = max_speed {
        speed = speed.min(cap).max(incoming);
    }
    ball.vx = if ball.vx > 0.0 { -speed } else { speed };
}

/// Which side scores if the ball has left the field horizontally
pub fn exit_scorer(ball: &Ball, field_width: f32) -> Option<Side> {
    if ball.x - ball.radius < 0.0 {
        Some(Side::Opponent)
    } else if ball.x + ball.radius > field_width {
        Some(Side::Player)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Field;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            x,
            y,
            radius: 10.0,
            vx,
            vy,
            color: [255, 255, 255],
        }
    }

    fn field() -> Field {
        Field::new(800.0, 400.0)
    }

    #[test]
    fn test_advance_integrates_velocity() {
        let mut ball = ball_at(400.0, 200.0, 450.0, -450.0);
        advance(&mut ball, 0.1);
        assert!((ball.x - 445.0).abs() < 1e-3);
        assert!((ball.y - 155.0).abs() < 1e-3);
    }

    #[test]
    fn test_reflect_top_wall() {
        let mut ball = ball_at(400.0, 5.0, 100.0, -300.0);
        assert!(reflect_off_walls(&mut ball, 400.0));
        assert_eq!(ball.vy, 300.0);
        // position is left alone
        assert_eq!(ball.y, 5.0);
    }

    #[test]
    fn test_reflect_bottom_wall() {
        let mut ball = ball_at(400.0, 395.0, 100.0, 300.0);
        assert!(reflect_off_walls(&mut ball, 400.0));
        assert_eq!(ball.vy, -300.0);
    }

    #[test]
    fn test_reflect_flips_once_per_crossing() {
        let mut ball = ball_at(400.0, -40.0, 0.0, -300.0);
        assert!(reflect_off_walls(&mut ball, 400.0));
        // still outside next tick but already heading back in
        advance(&mut ball, 0.01);
        assert!(!reflect_off_walls(&mut ball, 400.0));
        assert_eq!(ball.vy, 300.0);
    }

    #[test]
    fn test_no_reflection_inside_field() {
        let mut ball = ball_at(400.0, 200.0, 100.0, 300.0);
        assert!(!reflect_off_walls(&mut ball, 400.0));
        assert_eq!(ball.vy, 300.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let paddle = Paddle::new(Side::Player, &field(), 15.0, 100.0, 20.0);
        // paddle spans x 20..35, y 150..250
        assert!(overlaps(&ball_at(40.0, 200.0, -1.0, 0.0), &paddle));
        assert!(!overlaps(&ball_at(45.0, 200.0, -1.0, 0.0), &paddle));
        assert!(!overlaps(&ball_at(30.0, 140.0, -1.0, 0.0), &paddle));
        assert!(overlaps(&ball_at(30.0, 141.0, -1.0, 0.0), &paddle));
    }

    #[test]
    fn test_approaching_side_follows_horizontal_velocity() {
        assert_eq!(approaching_side(&ball_at(0.0, 0.0, -5.0, 0.0)), Side::Player);
        assert_eq!(approaching_side(&ball_at(0.0, 0.0, 5.0, 0.0)), Side::Opponent);
    }

    #[test]
    fn test_bounce_inverts_and_speeds_up_ten_percent() {
        let mut ball = ball_at(40.0, 200.0, -450.0, 120.0);
        bounce_off_paddle(&mut ball, 1.1, None);
        assert!((ball.vx - 495.0).abs() < 1e-3);
        assert_eq!(ball.vy, 120.0);
    }

    #[test]
    fn test_bounce_respects_cap() {
        let mut ball = ball_at(760.0, 200.0, 950.0, 0.0);
        bounce_off_paddle(&mut ball, 1.1, Some(1000.0));
        assert_eq!(ball.vx, -1000.0);
    }

    #[test]
    fn test_cap_below_incoming_speed_never_slows_the_ball() {
        let mut ball = ball_at(760.0, 200.0, 900.0, 0.0);
        bounce_off_paddle(&mut ball, 1.1, Some(450.0));
        assert_eq!(ball.vx, -900.0);

        let mut ball = ball_at(40.0, 200.0, -900.0, 0.0);
        bounce_off_paddle(&mut ball, 1.1, Some(450.0));
        assert_eq!(ball.vx, 900.0);
    }

    #[test]
    fn test_exit_scorer() {
        assert_eq!(exit_scorer(&ball_at(5.0, 200.0, -1.0, 0.0), 800.0), Some(Side::Opponent));
        assert_eq!(exit_scorer(&ball_at(795.0, 200.0, 1.0, 0.0), 800.0), Some(Side::Player));
        assert_eq!(exit_scorer(&ball_at(400.0, 200.0, 1.0, 0.0), 800.0), None);
    }
}
