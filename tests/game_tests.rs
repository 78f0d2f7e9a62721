//! Integration tests for the session and its tick rule

use tui_snake::core::{
    GameConfig, GameState, HostCall, RecordingHost, ScriptedRng, SimpleRng, StepOutcome,
};
use tui_snake::types::{ArrowKey, Direction, Position};

/// Apples placed along row 0 just ahead of the head: (4,0), (5,0), ...
fn apples_in_a_row(count: u32) -> ScriptedRng {
    let mut values = Vec::new();
    for i in 0..count {
        values.push(4 + i);
        values.push(0);
    }
    ScriptedRng::new(values)
}

fn started(rng: ScriptedRng) -> (GameState<ScriptedRng>, RecordingHost) {
    let mut game = GameState::with_config(GameConfig::default(), rng).unwrap();
    let mut host = RecordingHost::new();
    game.init(&mut host);
    host.clear();
    (game, host)
}

#[test]
fn test_init_state() {
    let (game, _) = started(ScriptedRng::new(vec![17, 23]));

    let snake = game.snake();
    assert_eq!(snake.length(), 4);
    assert_eq!(snake.head_index(), 3);
    assert_eq!(snake.direction(), Direction::Right);
    assert_eq!(
        snake.segments(),
        &[
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(3, 0)
        ]
    );
    assert!(!snake.eats_itself());
    assert!(!snake.is_out_of_bounds(40, 40));
    assert_eq!(game.apple(), Position::new(17, 23));
    assert_eq!(game.step_period_ms(), 300);
    assert_eq!(game.next_reward(), 10);
}

#[test]
fn test_eating_apple_grows_scores_and_speeds_up() {
    let (mut game, mut host) = started(ScriptedRng::new(vec![4, 0, 12, 34]));
    assert_eq!(game.apple(), Position::new(4, 0));

    let outcome = game.step(0, &mut host);
    assert_eq!(
        outcome,
        StepOutcome {
            ate_apple: true,
            game_over: false
        }
    );
    assert_eq!(game.snake().length(), 5);
    assert_eq!(game.score(), 10);
    assert_eq!(game.next_reward(), 20);
    assert_eq!(game.step_period_ms(), 275);
    assert_eq!(game.apple(), Position::new(12, 34));

    // Speed-up is reported before the score.
    let events: Vec<_> = host
        .calls()
        .iter()
        .filter(|c| matches!(c, HostCall::StepPeriodUpdated(_) | HostCall::ScoreChanged(_)))
        .copied()
        .collect();
    assert_eq!(
        events,
        vec![HostCall::StepPeriodUpdated(275), HostCall::ScoreChanged(10)]
    );
}

#[test]
fn test_plain_step_moves_body() {
    let (mut game, mut host) = started(ScriptedRng::new(vec![30, 30]));

    let outcome = game.step(0, &mut host);
    assert!(!outcome.ate_apple);
    assert!(!outcome.game_over);

    let mut cells = game.snake().segments().to_vec();
    cells.sort_by_key(|p| p.x);
    assert_eq!(
        cells,
        vec![
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(3, 0),
            Position::new(4, 0)
        ]
    );
    assert_eq!(game.snake().head_position(), Position::new(4, 0));
    assert_eq!(game.score(), 0);
    assert_eq!(game.step_period_ms(), 300);
    assert!(host.scores().is_empty());
}

#[test]
fn test_head_is_newest_segment_after_growth() {
    // After eating, the head is the cell just entered and the next tick moves
    // on from there. Keeping head_index on the old head instead stalls the
    // snake for one tick after every apple.
    let (mut game, mut host) = started(ScriptedRng::new(vec![4, 0, 30, 30]));
    game.step(0, &mut host);
    assert_eq!(game.snake().head_position(), Position::new(4, 0));

    game.step(0, &mut host);
    assert_eq!(game.snake().head_position(), Position::new(5, 0));
    assert_eq!(game.snake().length(), 5);
    assert_eq!(
        game.snake().body().collect::<Vec<_>>(),
        (1..=5).map(|x| Position::new(x, 0)).collect::<Vec<_>>()
    );
}

#[test]
fn test_reward_grows_triangularly() {
    let (mut game, mut host) = started(apples_in_a_row(8));

    let mut expected_score = 0;
    for n in 1..=6u32 {
        assert!(game.step(0, &mut host).ate_apple, "apple {}", n);
        expected_score += 10 * n;
        assert_eq!(game.score(), expected_score);
        assert_eq!(game.next_reward(), 10 + 10 * n);
    }
    assert_eq!(host.scores(), vec![10, 30, 60, 100, 150, 210]);
}

#[test]
fn test_step_period_floors_at_minimum() {
    let (mut game, mut host) = started(apples_in_a_row(16));

    for _ in 0..14 {
        assert!(game.step(0, &mut host).ate_apple);
    }
    assert_eq!(game.step_period_ms(), 50);
    assert_eq!(
        host.step_periods(),
        vec![275, 250, 225, 200, 175, 150, 125, 100, 75, 50]
    );
    assert_eq!(host.scores().len(), 14);
}

#[test]
fn test_uneven_speedup_clamps_to_minimum_period() {
    let config = GameConfig {
        speedup_ms: 100,
        ..GameConfig::default()
    };
    config.validate().unwrap();
    let mut game = GameState::with_config(config, apples_in_a_row(4)).unwrap();
    let mut host = RecordingHost::new();
    game.init(&mut host);
    host.clear();

    for _ in 0..4 {
        assert!(game.step(0, &mut host).ate_apple);
        assert!(game.step_period_ms() >= config.min_step_period_ms);
    }
    assert_eq!(game.step_period_ms(), 50);
    assert_eq!(host.step_periods(), vec![200, 100, 50]);
}

#[test]
fn test_wall_collision_reports_game_over() {
    let (mut game, mut host) = started(ScriptedRng::new(vec![30, 30]));

    game.on_key_down(ArrowKey::Down);
    game.step(0, &mut host);
    game.on_key_down(ArrowKey::Left);
    for _ in 0..3 {
        assert!(!game.step(0, &mut host).game_over);
    }
    assert_eq!(game.snake().head_position(), Position::new(0, 1));
    game.on_key_down(ArrowKey::Up);
    assert!(!game.step(0, &mut host).game_over);
    assert_eq!(game.snake().head_position(), Position::new(0, 0));

    // Head at (0,0) heading left: next cell is (-1,0).
    game.on_key_down(ArrowKey::Left);
    assert_eq!(game.snake().next_head_position(), Position::new(-1, 0));
    assert!(game.step(0, &mut host).game_over);
    assert!(game.snake().is_out_of_bounds(40, 40));
    assert_eq!(host.game_overs(), 1);
}

#[test]
fn test_game_over_is_not_latched() {
    let (mut game, mut host) = started(ScriptedRng::new(vec![30, 30]));
    game.on_key_down(ArrowKey::Up);

    for tick in 1..=5 {
        assert!(game.step(0, &mut host).game_over);
        assert_eq!(host.game_overs(), tick);
    }
    assert_eq!(game.ticks(), 5);
    assert_eq!(host.frames(), 5);
}

#[test]
fn test_self_collision_reports_game_over() {
    // Grow to length 5 first, then curl into the body.
    let (mut game, mut host) = started(ScriptedRng::new(vec![4, 0, 30, 30]));
    game.step(0, &mut host);
    assert_eq!(game.snake().length(), 5);

    game.on_key_down(ArrowKey::Down);
    assert!(!game.step(0, &mut host).game_over); // (4,1)
    game.on_key_down(ArrowKey::Left);
    assert!(!game.step(0, &mut host).game_over); // (3,1)
    game.on_key_down(ArrowKey::Up);
    let outcome = game.step(0, &mut host); // (3,0) is still body
    assert!(outcome.game_over);
    assert!(game.snake().eats_itself());
    assert!(!game.snake().is_out_of_bounds(40, 40));
}

#[test]
fn test_reversal_is_ignored_between_ticks() {
    let (mut game, mut host) = started(ScriptedRng::new(vec![30, 30]));
    assert!(!game.on_key_down(ArrowKey::Left));
    let outcome = game.step(0, &mut host);
    assert!(!outcome.game_over);
    assert_eq!(game.snake().head_position(), Position::new(4, 0));
}

#[test]
fn test_apple_may_spawn_inside_snake() {
    let (game, _) = started(ScriptedRng::new(vec![2, 0]));
    assert!(game.snake().occupies(game.apple()));
}

#[test]
fn test_timestamp_does_not_affect_simulation() {
    let mut a = GameState::new(77);
    let mut b = GameState::new(77);
    let mut ha = RecordingHost::new();
    let mut hb = RecordingHost::new();
    a.init(&mut ha);
    b.init(&mut hb);

    for i in 0..20 {
        a.step(i, &mut ha);
        b.step(i * 1000 + 7, &mut hb);
    }
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(ha.calls(), hb.calls());
}

#[test]
fn test_same_seed_same_apples() {
    let mut a = GameState::with_config(GameConfig::default(), SimpleRng::new(5)).unwrap();
    let mut b = GameState::with_config(GameConfig::default(), SimpleRng::new(5)).unwrap();
    a.init(&mut RecordingHost::new());
    b.init(&mut RecordingHost::new());
    assert_eq!(a.apple(), b.apple());

    let apple = a.apple();
    assert!(apple.x >= 0 && apple.x < 40);
    assert!(apple.y >= 0 && apple.y < 40);
}

#[test]
fn test_rejects_invalid_config() {
    let config = GameConfig::with_grid(50, 50);
    assert!(GameState::with_config(config, SimpleRng::new(1)).is_err());
}
