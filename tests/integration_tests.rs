//! Integration tests for the frame loop pieces: keys in, snapshots out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_snake::core::{GameConfig, GameEngine, GameEvent, Scheduler, StepOutcome};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::{Direction, GameState, Position};

fn press(engine: &mut GameEngine, code: KeyCode, now: u64) -> bool {
    let action = handle_key_event(KeyEvent::from(code)).expect("mapped key");
    engine.apply_action(action, now)
}

fn screen_contains(engine: &GameEngine, needle: &str) -> bool {
    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(100, 30));
    (0..fb.height()).any(|y| fb.row_string(y).contains(needle))
}

#[test]
fn test_game_lifecycle() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 12345);
    let scheduler = engine.scheduler().clone();
    assert_eq!(engine.state(), GameState::Waiting);
    assert!(!scheduler.is_engaged());
    assert!(screen_contains(&engine, "PRESS SPACE"));

    assert!(press(&mut engine, KeyCode::Char(' '), 0));
    assert_eq!(engine.state(), GameState::Playing);
    assert!(scheduler.is_engaged());

    assert!(press(&mut engine, KeyCode::Char('p'), 10));
    assert_eq!(engine.state(), GameState::Paused);
    assert!(!scheduler.is_engaged());
    assert!(screen_contains(&engine, "PAUSED"));

    assert!(press(&mut engine, KeyCode::Enter, 20));
    assert_eq!(engine.state(), GameState::Playing);
    assert!(scheduler.is_engaged());
}

#[test]
fn test_turn_keys_steer_the_snake() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 12345);
    press(&mut engine, KeyCode::Char(' '), 0);
    assert!(engine.set_food(Position::new(0, 19)));

    assert!(press(&mut engine, KeyCode::Char('w'), 1));
    assert_eq!(engine.tick(150), Some(StepOutcome::Moved));
    assert_eq!(engine.snake().head(), Position::new(15, 9));

    // Straight back down is a reversal.
    assert!(!press(&mut engine, KeyCode::Down, 151));
    assert!(press(&mut engine, KeyCode::Char('h'), 152));
    assert_eq!(engine.tick(300), Some(StepOutcome::Moved));
    assert_eq!(engine.snake().head(), Position::new(14, 9));
    assert_eq!(engine.heading(), Direction::Left);
}

#[test]
fn test_frame_loop_paces_steps() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 9);
    engine.start(0);
    assert!(engine.set_food(Position::new(0, 19)));
    let scheduler = engine.scheduler().clone();

    // 16ms frames for one second.
    let mut steps = 0;
    let mut now = 0;
    while now <= 1_000 {
        if scheduler.is_engaged() && engine.tick(now).is_some() {
            steps += 1;
        }
        now += 16;
    }
    // 150ms steps land on frame boundaries, so each one takes 10 frames.
    assert_eq!(steps, 6);
    assert_eq!(engine.snake().head(), Position::new(21, 10));
}

#[test]
fn test_restart_key_only_after_game_over() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 4);
    assert!(!press(&mut engine, KeyCode::Char('r'), 0));

    press(&mut engine, KeyCode::Char(' '), 0);
    assert!(!press(&mut engine, KeyCode::Char('r'), 1));
    assert!(engine.set_food(Position::new(0, 19)));
    while engine.state() == GameState::Playing {
        engine.step();
    }
    assert!(screen_contains(&engine, "GAME OVER"));

    assert!(press(&mut engine, KeyCode::Char('R'), 2));
    assert_eq!(engine.state(), GameState::Playing);
    assert_eq!(engine.snake().head(), Position::new(15, 10));
}

#[test]
fn test_events_describe_a_round() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 4);
    engine.start(0);
    assert!(engine.set_food(Position::new(16, 10)));
    engine.step();
    assert!(engine.set_food(Position::new(0, 19)));
    while engine.state() == GameState::Playing {
        engine.step();
    }

    let events: Vec<GameEvent> = engine.drain_events().collect();
    assert_eq!(
        events.first(),
        Some(&GameEvent::StateChanged {
            from: GameState::Waiting,
            to: GameState::Playing
        })
    );
    assert!(events.contains(&GameEvent::FoodEaten {
        at: Position::new(16, 10),
        score: 10
    }));
    assert!(events.contains(&GameEvent::HighScore { score: 10 }));
    assert_eq!(engine.drain_events().count(), 0);
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
}
