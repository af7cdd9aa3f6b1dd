//! Seams to the outside world: where commands come from and where frames go.

use anyhow::Result;
use arrayvec::ArrayVec;

use crate::snapshot::FrameSnapshot;
use crate::types::GameAction;

/// Max commands accepted per frame; extras are dropped.
pub const ACTION_BUFFER_CAP: usize = 32;

pub type ActionBuffer = ArrayVec<GameAction, ACTION_BUFFER_CAP>;

/// Non-blocking command source, drained once per frame.
pub trait InputSource {
    /// Append everything that arrived since the last poll, oldest first.
    fn poll(&mut self, out: &mut ActionBuffer) -> Result<()>;
}

/// Frame presenter. The session calls exactly one method per frame.
pub trait RenderSink {
    fn draw_frame(&mut self, frame: &FrameSnapshot) -> Result<()>;

    fn draw_game_over(&mut self, frame: &FrameSnapshot) -> Result<()>;
}

/// Scripted input, useful for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<Vec<GameAction>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the actions to deliver on the next unscripted frame.
    pub fn push_frame(&mut self, actions: &[GameAction]) {
        self.frames.push_back(actions.to_vec());
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, out: &mut ActionBuffer) -> Result<()> {
        if let Some(actions) = self.frames.pop_front() {
            for action in actions {
                if out.try_push(action).is_err() {
                    break;
                }
            }
        }
        Ok(())
    }
}
