use crate::core::FrameSnapshot;

/// Skips redundant redraws of a frozen (game-over) screen.
///
/// Running frames always draw. A static frame draws immediately when its
/// fingerprint changes, otherwise at most once per `min_static_interval_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_draw(&mut self, now_ms: u64, frame: &FrameSnapshot) -> bool {
        self.should_render(now_ms, frame.fingerprint(), !frame.playable())
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let due = match self.last_fingerprint {
            None => true,
            Some(_) if !is_static => true,
            Some(last) if last != fingerprint => true,
            Some(_) => now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms,
        };
        if due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
        }
        due
    }

    /// Forget history; the next frame always draws.
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}
