//! Change notifications emitted by the engine.

use crate::types::{GameState, Position};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// Head left the grid
    Wall,
    /// Head entered a body cell
    SelfCollision,
    /// The snake covers every cell; there is nowhere left to put food
    BoardFilled,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Wall => "wall",
            EndReason::SelfCollision => "self",
            EndReason::BoardFilled => "board_filled",
        }
    }
}

/// Engine-side event, buffered until the host drains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged { from: GameState, to: GameState },
    FoodEaten { at: Position, score: u32 },
    GameOver { reason: EndReason, score: u32 },
    /// A new best score was recorded and persisted.
    HighScore { score: u32 },
}

/// Upper bound on events buffered between drains.
///
/// A single operation emits at most three; older events are kept and newer
/// ones dropped if the host never drains.
pub const EVENT_CAPACITY: usize = 16;
