//! Session parameters.

use crate::types::{
    GridSize, DEFAULT_CELL_SIZE, DEFAULT_INITIAL_STEP_MS, DEFAULT_MIN_STEP_MS,
    DEFAULT_PLAYFIELD_HEIGHT, DEFAULT_PLAYFIELD_WIDTH, DEFAULT_STEP_DECREMENT_MS,
};

/// Immutable per-session configuration
///
/// The playfield is given in pixels and split into square cells of
/// `cell_size` pixels; partial cells at the right/bottom edge are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Cell edge length in pixels
    pub cell_size: u32,
    /// Playfield width in pixels
    pub playfield_width: u32,
    /// Playfield height in pixels
    pub playfield_height: u32,
    /// Step interval at score 0
    pub initial_step_ms: u32,
    /// Interval reduction per speed tier
    pub step_decrement_ms: u32,
    /// Fastest allowed step interval
    pub min_step_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            initial_step_ms: DEFAULT_INITIAL_STEP_MS,
            step_decrement_ms: DEFAULT_STEP_DECREMENT_MS,
            min_step_ms: DEFAULT_MIN_STEP_MS,
        }
    }
}

impl GameConfig {
    /// Default timing on a grid of `width` x `height` cells.
    pub fn with_grid(width: u32, height: u32) -> Self {
        Self {
            playfield_width: width.saturating_mul(DEFAULT_CELL_SIZE),
            playfield_height: height.saturating_mul(DEFAULT_CELL_SIZE),
            ..Self::default()
        }
    }

    /// Grid dimensions in cells, never smaller than 1x1.
    pub fn grid(&self) -> GridSize {
        let cell = self.cell_size.max(1);
        let width = (self.playfield_width / cell).max(1);
        let height = (self.playfield_height / cell).max(1);
        GridSize::new(
            width.min(i32::MAX as u32) as i32,
            height.min(i32::MAX as u32) as i32,
        )
    }
}
