//! Frame pacing.
//!
//! Pure bookkeeping over a monotonic millisecond counter supplied by the
//! caller, so the loop's timing math can be tested without sleeping.

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_ms: u32,
    frame_start_ms: Option<u64>,
}

impl FrameClock {
    pub fn new(frame_ms: u32) -> Self {
        Self {
            frame_ms,
            frame_start_ms: None,
        }
    }

    /// Mark the start of a frame at `now_ms`.
    ///
    /// Returns the milliseconds since the previous frame started (0 for the
    /// very first frame).
    pub fn begin_frame(&mut self, now_ms: u64) -> u32 {
        let elapsed = match self.frame_start_ms {
            Some(prev) => now_ms.saturating_sub(prev).min(u32::MAX as u64) as u32,
            None => 0,
        };
        self.frame_start_ms = Some(now_ms);
        elapsed
    }

    /// Budget left in the current frame at `now_ms`; the loop sleeps this long.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.frame_start_ms {
            Some(start) => (self.frame_ms as u64).saturating_sub(now_ms.saturating_sub(start)),
            None => 0,
        }
    }
}
