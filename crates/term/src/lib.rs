//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer that is then
//! flushed to the terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Render from snapshots only, never from live engine state
//! - Square-ish cells (2 columns per grid cell)

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
