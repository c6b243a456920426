//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benchmark share one import path:
//! `tui_snake::{core, input, store, term, types}`.

pub mod config;
pub mod logging;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_store as store;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::AppConfig;
