//! Scheduler seam
//!
//! The engine does not own a timer. The host runs a repeating callback (a
//! frame loop, an animation-frame hook, a test harness) and calls
//! [`GameEngine::tick`](crate::GameEngine::tick) while the scheduler is
//! engaged. The engine engages it on start/resume and halts it on pause,
//! game over and reset; halting is synchronous.

use std::cell::Cell;
use std::rc::Rc;

pub trait Scheduler {
    /// Begin delivering ticks
    fn engage(&mut self);

    /// Stop delivering ticks
    fn halt(&mut self);

    fn is_engaged(&self) -> bool;
}

/// Shared on/off flag checked by a single-threaded frame loop.
///
/// Clones share the same flag: hand one clone to the engine and keep one in
/// the loop that decides whether to call `tick`.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    engaged: Rc<Cell<bool>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FrameScheduler {
    fn engage(&mut self) {
        self.engaged.set(true);
    }

    fn halt(&mut self) {
        self.engaged.set(false);
    }

    fn is_engaged(&self) -> bool {
        self.engaged.get()
    }
}
