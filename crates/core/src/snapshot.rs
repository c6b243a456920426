use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{Direction, GameState, GridSize, Position, Score};

/// Read-only view of the engine for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: GridSize,
    /// Head first
    pub body: Vec<Position>,
    pub heading: Direction,
    pub food: Option<Position>,
    pub score: Score,
    pub state: GameState,
    pub step_interval_ms: u32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    /// Hash of everything visible; equal snapshots give equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: GridSize::new(0, 0),
            body: Vec::new(),
            heading: Direction::Right,
            food: None,
            score: Score::default(),
            state: GameState::Waiting,
            step_interval_ms: 0,
        }
    }
}
