//! Terminal Snake runner (default binary).
//!
//! Owns the frame loop: it renders snapshots, feeds key presses to the
//! engine and drives `tick` while the engine keeps the scheduler engaged.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_snake::config::AppConfig;
use tui_snake::core::{
    FrameScheduler, GameEngine, GameEvent, GameSnapshot, HighScoreStore, MemoryStore, Scheduler,
};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::logging;
use tui_snake::store::JsonFileStore;
use tui_snake::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_snake::types::FRAME_MS;

/// Redraw interval for a screen that is not changing.
const STATIC_REDRAW_MS: u64 = 500;

type Engine = GameEngine<Box<dyn HighScoreStore>, FrameScheduler, StdRng>;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;
    info!("starting with {:?}", config);

    let mut engine = build_engine(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn build_engine(config: &AppConfig) -> Result<Engine> {
    let store: Box<dyn HighScoreStore> = match &config.high_score_path {
        Some(path) => Box::new(JsonFileStore::open(path)?),
        None => Box::new(MemoryStore::new()),
    };
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(GameEngine::new(config.game, store, FrameScheduler::new(), rng))
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    let scheduler = engine.scheduler().clone();
    let view = GameView::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let now_ms = || epoch.elapsed().as_millis() as u64;
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_frame = Instant::now();

    loop {
        // Render.
        engine.snapshot_into(&mut snap);
        if throttle.should_render(now_ms(), snap.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
        }

        // Input until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = engine.apply_action(action, now_ms());
                        debug!("{} -> {}", action.as_str(), applied);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            if scheduler.is_engaged() {
                engine.tick(now_ms());
            }
        }

        for event in engine.drain_events() {
            log_event(event);
        }
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::StateChanged { from, to } => debug!("state {} -> {}", from, to),
        GameEvent::FoodEaten { at, score } => debug!("ate food at {}, score {}", at, score),
        GameEvent::GameOver { reason, score } => {
            info!("game over ({}), score {}", reason.as_str(), score)
        }
        GameEvent::HighScore { score } => info!("new high score {}", score),
    }
}
