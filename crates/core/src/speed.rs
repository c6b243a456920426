//! Speed model - step interval as a function of score
//!
//! The interval shrinks by `step_decrement_ms` for every full
//! [`SPEED_TIER_POINTS`] of score and is clamped at `min_step_ms`.
//! It is derived from the score on demand and never stored.

use crate::config::GameConfig;
use crate::types::SPEED_TIER_POINTS;

/// Speed tier for a score (0 for scores below the first tier)
pub fn speed_tier(score: u32) -> u32 {
    score / SPEED_TIER_POINTS
}

/// Get the step interval for a score (in milliseconds)
///
/// `max(min_step_ms, initial_step_ms - tier * step_decrement_ms)`, computed
/// with saturating arithmetic so large scores cannot wrap.
pub fn step_interval_ms(config: &GameConfig, score: u32) -> u32 {
    let bonus = speed_tier(score).saturating_mul(config.step_decrement_ms);
    config
        .initial_step_ms
        .saturating_sub(bonus)
        .max(config.min_step_ms)
}
