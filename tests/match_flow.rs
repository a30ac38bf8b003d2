// Full matches driven through the public session API

use rally_pong::ai::{create_bot, Bot, PaddleMove};
use rally_pong::clock::TimeModel;
use rally_pong::config::{parse_config, Config};
use rally_pong::game::{
    Ball, Difficulty, DifficultyProfile, FixedServe, Horizontal, MatchPhase, Paddle, Serve,
    Session, Side, Vertical,
};
use rally_pong::GameError;

const FRAME: f32 = 1.0 / 60.0;

fn fixed(horizontal: Horizontal, vertical: Vertical) -> Box<FixedServe> {
    Box::new(FixedServe(Serve {
        horizontal,
        vertical,
    }))
}

/// Opponent that parks its paddle against the top wall
struct TopHugger;

impl Bot for TopHugger {
    fn get_action(&mut self, _ball: &Ball, _paddle: &Paddle) -> Option<PaddleMove> {
        Some(PaddleMove::Up)
    }

    fn reset(&mut self, _profile: &DifficultyProfile, _paddle_height: f32) {}

    fn name(&self) -> &str {
        "top-hugger"
    }
}

fn run_for(session: &mut Session, seconds: f32, dt: f32) {
    let ticks = (seconds / dt).round() as usize;
    for _ in 0..ticks {
        session.tick(dt);
    }
}

#[test]
fn test_serve_launches_after_one_second() {
    let config = Config::default();
    let mut session = Session::with_parts(
        &config,
        fixed(Horizontal::Right, Vertical::Up),
        create_bot(&config.ai),
    );
    session.start_match_by_name("normal").unwrap();
    assert!(matches!(session.phase(), MatchPhase::Serving(_)));

    run_for(&mut session, 0.5, 0.1);
    assert!(matches!(session.phase(), MatchPhase::Serving(_)));
    assert!(!session.ball().is_moving());

    run_for(&mut session, 0.5, 0.1);
    assert_eq!(session.phase(), MatchPhase::Rallying);
    assert_eq!((session.ball().vx, session.ball().vy), (450.0, -450.0));
    assert_eq!((session.ball().x, session.ball().y), (400.0, 200.0));
}

#[test]
fn test_serve_delay_is_wall_clock_at_low_frame_rates() {
    let config = Config::default();
    let mut session = Session::with_parts(
        &config,
        fixed(Horizontal::Left, Vertical::Down),
        create_bot(&config.ai),
    );
    session.start_match(Difficulty::Normal);

    // A 5 fps host: five 0.2s frames are one second of real time
    let launched = (0..5).any(|_| session.tick(0.2).serve_launched);
    assert!(launched);
    assert_eq!(session.phase(), MatchPhase::Rallying);
    assert_eq!((session.ball().vx, session.ball().vy), (-450.0, 450.0));

    // A single long stall also serves, with the ball still at center
    session.restart_match();
    assert!(session.tick(3.0).serve_launched);
    assert_eq!((session.ball().x, session.ball().y), (400.0, 200.0));
}

#[test]
fn test_ball_speed_is_frame_rate_independent() {
    let config = Config::default();
    let mut session = Session::with_parts(
        &config,
        fixed(Horizontal::Right, Vertical::Down),
        Box::new(TopHugger),
    );
    session.set_field_size(2000.0, 2000.0).unwrap();
    session.start_match(Difficulty::Normal);
    assert!(session.on_serve_timer_fired());

    run_for(&mut session, 1.0, 0.05);
    let ball = session.ball();
    assert!((ball.x - 1450.0).abs() < 0.5, "x = {}", ball.x);
    assert!((ball.y - 1450.0).abs() < 0.5, "y = {}", ball.y);
}

#[test]
fn test_stalled_frames_do_not_teleport_the_ball() {
    let config = Config::default();
    let mut session = Session::with_parts(
        &config,
        fixed(Horizontal::Right, Vertical::Down),
        Box::new(TopHugger),
    );
    session.start_match(Difficulty::Normal);
    assert!(session.on_serve_timer_fired());

    session.tick(5.0);
    let ball = session.ball();
    assert!((ball.x - (400.0 + 450.0 / 60.0)).abs() < 1e-3);
    assert_eq!(session.phase(), MatchPhase::Rallying);
}

#[test]
fn test_unguarded_goal_ends_the_match_for_the_player() {
    let config = Config::default();
    let mut session = Session::with_parts(
        &config,
        fixed(Horizontal::Right, Vertical::Down),
        Box::new(TopHugger),
    );
    session.start_match(Difficulty::Normal);

    let mut points = 0;
    let mut finished = None;
    for _ in 0..3000 {
        let events = session.tick(FRAME);
        if events.point_scored.is_some() {
            points += 1;
        }
        if let Some(winner) = events.game_over {
            finished = Some(winner);
            break;
        }
    }

    assert_eq!(finished, Some(Side::Player));
    assert_eq!(points, 10);
    assert_eq!(session.score().player, 10);
    assert_eq!(session.score().opponent, 0);
    assert_eq!(session.winner_label(), Some("player"));
    assert!(!session.ball().is_moving());

    // Frozen until restarted
    let ball = session.ball().clone();
    session.tick(FRAME);
    assert_eq!(session.ball().x, ball.x);

    session.restart_match();
    assert_eq!(session.score().player, 0);
    assert!(matches!(session.phase(), MatchPhase::Serving(_)));
}

#[test]
fn test_fixed_step_presets_from_config_file() {
    let config = parse_config(
        r#"
        [physics]
        time_model = "fixed_step"
        "#,
    )
    .unwrap();
    assert_eq!(config.physics.time_model, TimeModel::FixedStep);

    let mut session = Session::with_parts(
        &config,
        fixed(Horizontal::Right, Vertical::Up),
        create_bot(&config.ai),
    );
    session.start_match(Difficulty::Normal);
    assert!(session.on_serve_timer_fired());
    assert_eq!((session.ball().vx, session.ball().vy), (7.0, -7.0));

    session.tick(FRAME);
    assert_eq!((session.ball().x, session.ball().y), (407.0, 193.0));
}

#[test]
fn test_invalid_commands_are_rejected_without_side_effects() {
    let config = Config::default();
    let mut session = Session::new(&config);

    assert_eq!(
        session.start_match_by_name("nightmare"),
        Err(GameError::UnknownDifficulty("nightmare".to_string()))
    );
    assert_eq!(session.phase(), MatchPhase::Idle);

    assert!(session.set_field_size(0.0, 400.0).is_err());
    assert!(session.set_field_size(f32::NAN, 400.0).is_err());
    assert_eq!(session.field().width, 800.0);

    session.start_match(Difficulty::Easy);
    assert!(session.pointer_moved(10.0, 0.0).is_err());
}

#[test]
fn test_pointer_drives_the_player_paddle() {
    let config = Config::default();
    let mut session = Session::new(&config);
    session.start_match(Difficulty::Hard);

    // Halfway down a view half the field's size
    session.pointer_moved(100.0, 200.0).unwrap();
    session.tick(FRAME);
    assert_eq!(session.player_paddle().center_y(), 200.0);

    // Far beyond the bottom edge: clamped
    session.pointer_moved(500.0, 200.0).unwrap();
    session.tick(FRAME);
    assert_eq!(session.player_paddle().y, 300.0);
}

#[test]
fn test_resize_is_idempotent() {
    let config = Config::default();
    let mut session = Session::new(&config);
    session.start_match(Difficulty::Expert);
    session.pointer_moved(400.0, 400.0).unwrap();
    session.tick(FRAME);

    session.set_field_size(600.0, 300.0).unwrap();
    let once = (
        session.player_paddle().clone(),
        session.opponent_paddle().clone(),
        session.ball().clone(),
    );
    session.set_field_size(600.0, 300.0).unwrap();
    assert_eq!(session.player_paddle(), &once.0);
    assert_eq!(session.opponent_paddle(), &once.1);
    assert_eq!(session.ball(), &once.2);
    assert_eq!(session.opponent_paddle().x, 600.0 - 20.0 - 15.0);
    assert_eq!(session.player_paddle().y, 200.0);
}
