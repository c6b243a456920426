//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the game core, the terminal view and the input mapper alike.
//!
//! # Playfield
//!
//! The playfield is described in pixels (as a canvas would be) and divided into
//! square cells. The default 600x400 playfield with 20px cells yields a 30x20 grid.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `DEFAULT_INITIAL_STEP_MS` | 150 | Step interval at score 0 |
//! | `DEFAULT_STEP_DECREMENT_MS` | 5 | Interval reduction per speed tier |
//! | `DEFAULT_MIN_STEP_MS` | 80 | Fastest step interval |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Position};
//!
//! let head = Position::new(15, 10);
//! assert_eq!(head.moved(Direction::Right), Position::new(16, 10));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(GameAction::Turn(Direction::Up).as_str(), "up");
//! ```

use std::fmt;

/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Default playfield width in pixels (30 columns at 20px)
pub const DEFAULT_PLAYFIELD_WIDTH: u32 = 600;

/// Default playfield height in pixels (20 rows at 20px)
pub const DEFAULT_PLAYFIELD_HEIGHT: u32 = 400;

/// Step interval at score 0
pub const DEFAULT_INITIAL_STEP_MS: u32 = 150;

/// Step interval reduction per speed tier
pub const DEFAULT_STEP_DECREMENT_MS: u32 = 5;

/// Floor for the step interval
pub const DEFAULT_MIN_STEP_MS: u32 = 80;

/// Points awarded per food item
pub const FOOD_REWARD: u32 = 10;

/// Score span of one speed tier
pub const SPEED_TIER_POINTS: u32 = 50;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Persistence key for the best score.
pub const HIGH_SCORE_KEY: &str = "tui-snake-highest-score";


/// A cell on the grid.
///
/// Coordinates are signed so that a candidate head one step past the edge
/// (e.g. `x = -1`) is representable and can be rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `pos` lies in `[0, width) x [0, height)`
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// The center cell (rounded down)
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Position::new(x, y)))
    }
}

/// Heading of the snake
///
/// The y axis grows downward, so `Up` decrements `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell offset `(dx, dy)` of one step in this direction
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game lifecycle
///
/// ```text
/// Waiting --start--> Playing <--pause--> Paused
///                       |
///                   collision
///                       v
///                   GameOver --start/restart--> Playing
/// ```
///
/// Any state returns to `Waiting` on an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Waiting,
    Playing,
    Paused,
    GameOver,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Waiting => "waiting",
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::GameOver => "game_over",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current and best score
///
/// `current` resets every round; `highest` carries across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub current: u32,
    pub highest: u32,
}

/// Control signals delivered to the game core
///
/// These are produced by the input layer from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading (ignored if it reverses the current one)
    Turn(Direction),
    /// Start a new round from Waiting/GameOver, otherwise toggle pause
    StartOrPause,
    /// Start a new round, only honoured after game over
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(direction) => direction.as_str(),
            GameAction::StartOrPause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
