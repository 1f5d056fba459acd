//! End-to-end match scenarios driven through the public API

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use table_pong::settings::Tuning;
use table_pong::sim::{GameEvent, GameState, Side, TickInput, tick};
use table_pong::{Session, Settings};

fn new_state(seed: u64) -> (GameState, Pcg32) {
    let mut rng = Pcg32::seed_from_u64(seed);
    let state = GameState::new(Tuning::default(), &mut rng);
    (state, rng)
}

#[test]
fn test_unreturned_ball_scores_for_computer() {
    let (mut state, mut rng) = new_state(2024);
    // Human paddle parked at the top, out of the ball's path
    state.human.y = 0.0;
    state.ball.pos = state.center();
    state.ball.vel = Vec2::new(-5.0, 0.0);
    state.ball.speed = 5.0;

    // x + r < 0 first holds when 400 - 5n < -9, i.e. n = 82
    let input = TickInput::default();
    for n in 1..82 {
        let events = tick(&mut state, &input, &mut rng);
        assert!(events.is_empty(), "unexpected events at tick {}: {:?}", n, events);
    }
    assert_eq!(state.score.computer, 0);

    let events = tick(&mut state, &input, &mut rng);
    assert_eq!(
        events,
        vec![GameEvent::PointScored {
            winner: Side::Computer
        }]
    );
    assert_eq!(state.score.computer, 1);
    assert_eq!(state.score.human, 0);
    // New serve from the middle, heading back toward the human
    assert_eq!(state.ball.pos, state.center());
    assert!(state.ball.vel.x < 0.0);
}

#[test]
fn test_reset_restores_fresh_match() {
    let mut session = Session::new(&Settings::default(), 77);
    // Let the computer win a few points against an absent human
    session.set_human_paddle_y(0.0);
    for _ in 0..3000 {
        session.frame();
    }
    assert!(session.state().score.human + session.state().score.computer > 0);

    session.set_paused(true);
    session.frame();
    session.reset_match();
    let events = session.frame();
    assert_eq!(events.first(), Some(&GameEvent::MatchReset));

    let state = session.state();
    assert_eq!((state.score.human, state.score.computer), (0, 0));
    assert!(!state.is_paused());
    let tuning = &state.tuning;
    let speed = state.ball.vel.length();
    assert!((speed - tuning.serve_speed).abs() < 1e-3);
    assert!(state.ball.vel.x.abs() >= tuning.serve_speed * tuning.serve_max_angle().cos() - 1e-3);
    assert!(state.ball.vel.y.abs() <= tuning.serve_speed * tuning.serve_max_angle().sin() + 1e-3);
    // One tick of travel from the center
    assert!((state.ball.pos - state.center()).length() <= tuning.serve_speed + 1e-3);
}

#[test]
fn test_paused_match_is_frozen() {
    let mut session = Session::new(&Settings::default(), 5);
    for _ in 0..40 {
        session.frame();
    }
    session.toggle_pause();
    session.frame();
    let frozen = session.snapshot();
    assert!(frozen.paused);

    session.set_keys(true, false);
    for _ in 0..120 {
        assert!(session.frame().is_empty());
    }
    let after = session.snapshot();
    assert_eq!(after.ball, frozen.ball);
    assert_eq!(after.human, frozen.human);
    assert_eq!(after.computer, frozen.computer);
    assert_eq!(after.score, frozen.score);

    // Explicit pointer writes still land
    session.set_human_paddle_y(10.0);
    session.frame();
    assert_eq!(session.state().human.y, 10.0);
    assert_eq!(session.state().ball, frozen.ball);
}

#[test]
fn test_long_match_invariants() {
    let (mut state, mut rng) = new_state(31337);
    let mut input_rng = Pcg32::seed_from_u64(4);
    let tuning = state.tuning.clone();
    let max_y = tuning.paddle_max_y();

    let mut points = 0u32;
    let mut paddle_hits = 0u32;
    let mut rally_speed = state.ball.speed;

    for i in 0..20_000u32 {
        // Jittery pointer that loosely follows the ball
        let jitter: f32 = rand::Rng::random_range(&mut input_rng, -80.0..80.0);
        let input = TickInput {
            human_paddle_y: Some(state.ball.pos.y - tuning.paddle_height / 2.0 + jitter),
            toggle_pause: i % 997 == 0,
            ..Default::default()
        };
        let events = tick(&mut state, &input, &mut rng);

        for paddle in [&state.human, &state.computer] {
            assert!(paddle.y >= 0.0 && paddle.y <= max_y, "paddle out of bounds: {}", paddle.y);
        }

        let scored = events
            .iter()
            .any(|e| matches!(e, GameEvent::PointScored { .. }));
        if scored {
            points += 1;
            assert_eq!(state.ball.speed, tuning.serve_speed);
        } else {
            assert!(state.ball.speed >= rally_speed, "speed dropped mid-rally");
            assert!(state.ball.speed <= tuning.ball_max_speed);
            let r = state.ball.radius;
            assert!(state.ball.pos.y >= r - 1e-3 && state.ball.pos.y <= tuning.playfield_height - r + 1e-3);
        }
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::PaddleBounce { .. }))
        {
            paddle_hits += 1;
            assert!(state.ball.vel.x.abs() >= tuning.min_horizontal_speed);
        }
        rally_speed = state.ball.speed;
    }

    assert_eq!(state.score.human + state.score.computer, points);
    assert!(paddle_hits > 0);
}
