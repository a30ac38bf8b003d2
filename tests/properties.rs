// Property tests for the invariants that must hold for any input

use proptest::prelude::*;

use rally_pong::clock::{sanitize_dt, MAX_FRAME_DT};
use rally_pong::config::Config;
use rally_pong::game::physics::reflect_off_walls;
use rally_pong::game::{Ball, Difficulty, MatchPhase, Session};

proptest! {
    #[test]
    fn test_sanitized_dt_stays_in_range(raw in prop::num::f32::ANY) {
        let dt = sanitize_dt(raw);
        prop_assert!((0.0..=MAX_FRAME_DT).contains(&dt));
    }

    #[test]
    fn test_paddles_stay_inside_after_any_resize(
        width in 1.0f32..3000.0,
        height in 1.0f32..3000.0,
        pointer in -5000.0f32..5000.0,
    ) {
        let mut session = Session::new(&Config::default());
        session.start_match(Difficulty::Normal);
        session.set_player_target_y(pointer);
        session.tick(1.0 / 60.0);
        session.set_field_size(width, height).unwrap();

        for paddle in [session.player_paddle(), session.opponent_paddle()] {
            prop_assert!(paddle.y >= 0.0);
            prop_assert!(paddle.y <= paddle.max_y(height));
        }
    }

    #[test]
    fn test_resize_twice_equals_resize_once(width in 50.0f32..3000.0, height in 50.0f32..3000.0) {
        let mut session = Session::new(&Config::default());
        session.start_match(Difficulty::Hard);
        session.set_field_size(width, height).unwrap();
        let player = session.player_paddle().clone();
        let opponent = session.opponent_paddle().clone();
        let ball = session.ball().clone();

        session.set_field_size(width, height).unwrap();
        prop_assert_eq!(session.player_paddle(), &player);
        prop_assert_eq!(session.opponent_paddle(), &opponent);
        prop_assert_eq!(session.ball(), &ball);
    }

    #[test]
    fn test_pointer_target_is_clamped(display_y in -1000.0f32..1000.0, shown in 1.0f32..1000.0) {
        let mut session = Session::new(&Config::default());
        session.start_match(Difficulty::Easy);
        session.pointer_moved(display_y, shown).unwrap();
        session.tick(1.0 / 60.0);

        let paddle = session.player_paddle();
        prop_assert!(paddle.y >= 0.0);
        prop_assert!(paddle.y <= 300.0);
    }

    #[test]
    fn test_ball_waits_for_the_serve(dts in prop::collection::vec(0.0f32..0.1, 1..9)) {
        // Fewer than ten frames of at most 0.1s cannot reach the 1s delay
        let mut session = Session::new(&Config::default());
        session.start_match(Difficulty::Expert);
        for dt in dts {
            session.tick(dt);
        }
        prop_assert!(matches!(session.phase(), MatchPhase::Serving(_)));
        prop_assert_eq!((session.ball().x, session.ball().y), (400.0, 200.0));
        prop_assert!(!session.ball().is_moving());
    }

    #[test]
    fn test_one_flip_per_wall_crossing(y in -50.0f32..450.0, vy in -900.0f32..900.0) {
        let mut ball = Ball::new(10.0, [255, 255, 255]);
        ball.y = y;
        ball.vy = vy;
        reflect_off_walls(&mut ball, 400.0);
        let after_first = ball.vy;
        // Still overlapping the wall, but now moving away from it
        prop_assert!(!reflect_off_walls(&mut ball, 400.0));
        prop_assert_eq!(ball.vy, after_first);
    }
}
