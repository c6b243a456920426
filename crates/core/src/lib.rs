//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management and update loop.
//! It has **no dependencies** on terminals, files or timers:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Time is passed in explicitly, so tests feed synthetic timestamps
//! - **Portable**: Can run in any host that can call a function periodically
//!
//! # Module Structure
//!
//! - [`config`]: playfield size and step timing
//! - [`snake`]: the body (head first) and heading
//! - [`food`]: uniform placement on a free cell
//! - [`speed`]: step interval as a function of score
//! - [`store`]: high-score persistence seam
//! - [`scheduler`]: start/stop seam for the host's repeating callback
//! - [`event`]: change notifications
//! - [`engine`]: the state machine tying it all together
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - The snake starts as one segment in the middle of the grid, heading right
//! - It cannot reverse onto itself in a single step
//! - Food is worth 10 points and grows the snake by one
//! - Leaving the grid or entering any body cell (the tail cell included) ends the round
//! - Every 50 points the step interval drops by a fixed amount, down to a floor
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameEngine, StepOutcome};
//! use tui_snake_types::{Direction, GameState};
//!
//! let mut game = GameEngine::with_seed(GameConfig::default(), 12345);
//! game.start(0);
//! game.request_direction(Direction::Up);
//!
//! // Nothing happens until a full step interval has passed.
//! assert_eq!(game.tick(100), None);
//! assert!(game.tick(150).is_some());
//! assert_eq!(game.state(), GameState::Playing);
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::tick`] from the host loop with the current time in
//! milliseconds while the scheduler is engaged. The engine steps at most once
//! per call.

pub mod config;
pub mod engine;
pub mod event;
pub mod food;
pub mod scheduler;
pub mod snake;
pub mod snapshot;
pub mod speed;
pub mod store;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use engine::{GameEngine, StepOutcome};
pub use event::{EndReason, GameEvent};
pub use food::place_food;
pub use scheduler::{FrameScheduler, Scheduler};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use speed::step_interval_ms;
pub use store::{HighScoreStore, MemoryStore};
