//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{ensure, Result};

use crate::core::GameConfig;

pub const DEFAULT_HIGH_SCORE_PATH: &str = ".tui-snake-scores.json";

/// Largest accepted grid edge, in cells.
pub const MAX_GRID_CELLS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Fixed food-placement seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// JSON high-score file; `None` keeps scores in memory.
    pub high_score_path: Option<PathBuf>,
    /// Log file; `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            high_score_path: Some(PathBuf::from(DEFAULT_HIGH_SCORE_PATH)),
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable numbers fall back
    /// to their defaults; the combined result is then validated.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = GameConfig::default();
        let num = |key: &str, default: u32| -> u32 {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        let game = GameConfig {
            cell_size: num("SNAKE_CELL_SIZE", defaults.cell_size),
            playfield_width: num("SNAKE_WIDTH", defaults.playfield_width),
            playfield_height: num("SNAKE_HEIGHT", defaults.playfield_height),
            initial_step_ms: num("SNAKE_INITIAL_STEP_MS", defaults.initial_step_ms),
            step_decrement_ms: num("SNAKE_STEP_DECREMENT_MS", defaults.step_decrement_ms),
            min_step_ms: num("SNAKE_MIN_STEP_MS", defaults.min_step_ms),
        };

        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse().ok());

        let disabled = lookup("SNAKE_HIGH_SCORE_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        let high_score_path = if disabled {
            None
        } else {
            match lookup("SNAKE_HIGH_SCORE_PATH") {
                Some(s) => non_empty_path(s),
                None => Some(PathBuf::from(DEFAULT_HIGH_SCORE_PATH)),
            }
        };

        let log_path = lookup("SNAKE_LOG_PATH").and_then(non_empty_path);

        let config = Self {
            game,
            seed,
            high_score_path,
            log_path,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.game;
        ensure!(g.cell_size > 0, "cell size must be positive");
        ensure!(
            g.playfield_width >= g.cell_size && g.playfield_height >= g.cell_size,
            "playfield {}x{} is smaller than one {}px cell",
            g.playfield_width,
            g.playfield_height,
            g.cell_size
        );
        ensure!(
            g.playfield_width / g.cell_size <= MAX_GRID_CELLS
                && g.playfield_height / g.cell_size <= MAX_GRID_CELLS,
            "grid is larger than {0}x{0} cells",
            MAX_GRID_CELLS
        );
        ensure!(g.min_step_ms > 0, "minimum step interval must be positive");
        ensure!(
            g.min_step_ms <= g.initial_step_ms,
            "minimum step interval {}ms exceeds initial {}ms",
            g.min_step_ms,
            g.initial_step_ms
        );
        Ok(())
    }
}

fn non_empty_path(s: String) -> Option<PathBuf> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(PathBuf::from(s))
    }
}
