//! Game engine - the complete game state and its update loop
//!
//! This module ties together the snake, food placement, the speed model and
//! the two collaborators (high-score store and scheduler). It handles step
//! timing, direction changes, collisions, growth and the game lifecycle.

use arrayvec::ArrayVec;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::event::{EndReason, GameEvent, EVENT_CAPACITY};
use crate::food::place_food;
use crate::scheduler::{FrameScheduler, Scheduler};
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::speed::step_interval_ms;
use crate::store::{HighScoreStore, MemoryStore};
use crate::types::*;

/// What a call to [`GameEngine::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not playing; nothing changed
    Idle,
    /// Head advanced, tail dropped
    Moved,
    /// Head advanced onto food, tail kept
    Ate,
    /// The round ended
    Ended(EndReason),
}

/// Complete game state
pub struct GameEngine<S = MemoryStore, C = FrameScheduler, R = StdRng> {
    config: GameConfig,
    grid: GridSize,
    snake: Snake,
    food: Option<Position>,
    score: Score,
    state: GameState,
    /// Host timestamp of the last step (or of start/resume).
    last_step_ms: u64,
    /// Monotonic round counter (increments each time a fresh round starts).
    round: u32,
    store: S,
    scheduler: C,
    rng: R,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameEngine {
    /// Engine with an in-memory store, a frame scheduler and a seeded RNG
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(
            config,
            MemoryStore::new(),
            FrameScheduler::new(),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<S: HighScoreStore, C: Scheduler, R: Rng> GameEngine<S, C, R> {
    /// Create an engine in the Waiting state.
    ///
    /// The best score is read from `store` once, here.
    pub fn new(config: GameConfig, store: S, scheduler: C, rng: R) -> Self {
        let grid = config.grid();
        let highest = store.get(HIGH_SCORE_KEY);
        let mut engine = Self {
            config,
            grid,
            snake: Snake::new(grid.center(), Direction::Right),
            food: None,
            score: Score {
                current: 0,
                highest,
            },
            state: GameState::Waiting,
            last_step_ms: 0,
            round: 0,
            store,
            scheduler,
            rng,
            events: ArrayVec::new(),
        };
        engine.reset_round();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn heading(&self) -> Direction {
        self.snake.heading()
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_step_ms(&self) -> u64 {
        self.last_step_ms
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    /// Current step threshold, derived from the score
    pub fn step_interval_ms(&self) -> u32 {
        step_interval_ms(&self.config, self.score.current)
    }

    /// Reset the snake, score and food and enter Waiting.
    ///
    /// Leaves the best score and the scheduler untouched.
    pub fn initialize(&mut self) {
        self.reset_round();
        self.set_state(GameState::Waiting);
    }

    /// Explicit reset without starting: initialize and halt the scheduler.
    pub fn reset(&mut self) {
        self.initialize();
        self.scheduler.halt();
    }

    /// Enter Playing.
    ///
    /// From Waiting or GameOver this begins a fresh round first.
    pub fn start(&mut self, now_ms: u64) {
        if matches!(self.state, GameState::Waiting | GameState::GameOver) {
            self.reset_round();
            self.round = self.round.wrapping_add(1);
            debug!("round {} begins", self.round);
        }
        self.set_state(GameState::Playing);
        self.last_step_ms = now_ms;
        self.scheduler.engage();
    }

    /// Toggle Playing <-> Paused. Returns whether anything changed.
    ///
    /// Resuming restamps the last step time so the pause does not count as
    /// elapsed time.
    pub fn pause(&mut self, now_ms: u64) -> bool {
        match self.state {
            GameState::Playing => {
                self.set_state(GameState::Paused);
                self.scheduler.halt();
                true
            }
            GameState::Paused => {
                self.set_state(GameState::Playing);
                self.last_step_ms = now_ms;
                self.scheduler.engage();
                true
            }
            GameState::Waiting | GameState::GameOver => false,
        }
    }

    /// Request a new heading for the next step.
    ///
    /// Ignored unless Playing, and ignored if it reverses the current heading.
    /// Later requests overwrite earlier ones.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.snake.turn(direction)
    }

    /// Advance the snake by one cell.
    pub fn step(&mut self) -> StepOutcome {
        if self.state != GameState::Playing {
            return StepOutcome::Idle;
        }

        let candidate = self.snake.next_head();

        if let Some(reason) = self.collision(candidate) {
            self.end_round(reason);
            return StepOutcome::Ended(reason);
        }

        let ate = self.food == Some(candidate);
        self.snake.advance(candidate, ate);

        if !ate {
            return StepOutcome::Moved;
        }

        self.score.current = self.score.current.saturating_add(FOOD_REWARD);
        self.emit(GameEvent::FoodEaten {
            at: candidate,
            score: self.score.current,
        });
        debug!(
            "food eaten at {} (score {}, length {})",
            candidate,
            self.score.current,
            self.snake.len()
        );

        self.food = place_food(&mut self.rng, self.grid, &self.snake);
        if self.food.is_none() {
            self.end_round(EndReason::BoardFilled);
            return StepOutcome::Ended(EndReason::BoardFilled);
        }

        StepOutcome::Ate
    }

    /// Scheduler callback.
    ///
    /// Steps once if at least one step interval has passed since the last
    /// step, then restamps. Never steps more than once per call, however long
    /// the gap. Returns `None` when no step was due.
    pub fn tick(&mut self, now_ms: u64) -> Option<StepOutcome> {
        if self.state != GameState::Playing {
            return None;
        }

        let elapsed = now_ms.saturating_sub(self.last_step_ms);
        if elapsed < u64::from(self.step_interval_ms()) {
            return None;
        }

        let outcome = self.step();
        self.last_step_ms = now_ms;
        Some(outcome)
    }

    /// Apply an input signal. Returns whether it had an effect.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::Turn(direction) => self.request_direction(direction),
            GameAction::StartOrPause => match self.state {
                GameState::Waiting | GameState::GameOver => {
                    self.start(now_ms);
                    true
                }
                GameState::Playing | GameState::Paused => self.pause(now_ms),
            },
            GameAction::Restart => {
                if self.state != GameState::GameOver {
                    return false;
                }
                self.start(now_ms);
                true
            }
        }
    }

    /// Take buffered events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Replace the snake, e.g. to script a position.
    ///
    /// Rejected if any segment is out of bounds or repeated. Food covered by
    /// the new body is moved to a free cell.
    pub fn set_snake(&mut self, snake: Snake) -> bool {
        if snake.body().any(|p| !self.grid.contains(p)) || snake.has_duplicates() {
            return false;
        }
        self.snake = snake;
        if self.food.map_or(true, |f| self.snake.occupies(f)) {
            self.food = place_food(&mut self.rng, self.grid, &self.snake);
        }
        true
    }

    /// Put the food on a specific free cell.
    pub fn set_food(&mut self, pos: Position) -> bool {
        if !self.grid.contains(pos) || self.snake.occupies(pos) {
            return false;
        }
        self.food = Some(pos);
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid;
        out.body.clear();
        out.body.extend(self.snake.body());
        out.heading = self.snake.heading();
        out.food = self.food;
        out.score = self.score;
        out.state = self.state;
        out.step_interval_ms = self.step_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Wall or body hit for a candidate head.
    ///
    /// The body is checked before the move, so the cell the tail is about to
    /// leave still counts as occupied.
    fn collision(&self, candidate: Position) -> Option<EndReason> {
        if !self.grid.contains(candidate) {
            return Some(EndReason::Wall);
        }
        if self.snake.occupies(candidate) {
            return Some(EndReason::SelfCollision);
        }
        None
    }

    fn end_round(&mut self, reason: EndReason) {
        self.set_state(GameState::GameOver);
        self.scheduler.halt();
        self.emit(GameEvent::GameOver {
            reason,
            score: self.score.current,
        });
        info!(
            "round {} over ({}): score {}, length {}",
            self.round,
            reason.as_str(),
            self.score.current,
            self.snake.len()
        );

        if self.score.current > self.score.highest {
            self.score.highest = self.score.current;
            self.store.set(HIGH_SCORE_KEY, self.score.highest);
            self.emit(GameEvent::HighScore {
                score: self.score.highest,
            });
            info!("new high score {}", self.score.highest);
        }
    }

    fn reset_round(&mut self) {
        self.snake = Snake::new(self.grid.center(), Direction::Right);
        self.score.current = 0;
        self.food = place_food(&mut self.rng, self.grid, &self.snake);
    }

    fn set_state(&mut self, to: GameState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        self.emit(GameEvent::StateChanged { from, to });
        debug!("state {} -> {}", from, to);
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            debug!("event buffer full, dropping {:?}", event);
        }
    }
}
