//! Frame pacing for a mostly static screen.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// A fingerprint change always renders. An unchanged screen re-renders at
    /// most once per `min_static_interval_ms` (keeps the terminal fresh after
    /// it was scribbled over, without spinning while waiting or paused).
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        if !self.has_rendered || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }

    /// Forget the last frame so the next call renders.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}
