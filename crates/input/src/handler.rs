//! Non-blocking per-frame input for terminal environments.
//!
//! Drains every pending crossterm event without waiting and turns key
//! presses into [`GameAction`]s in arrival order. Key repeats count as
//! presses (a held arrow keeps steering); releases are ignored.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::{ActionBuffer, InputSource};
use crate::map::handle_key_event;
use crate::types::GameAction;

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    dropped: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands discarded because a frame's buffer was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Translate one terminal event, appending the resulting action (if any).
    pub fn handle_event(&mut self, event: Event, out: &mut ActionBuffer) -> Option<GameAction> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let action = handle_key_event(key)?;
        if out.is_full() {
            self.dropped = self.dropped.saturating_add(1);
            if action != GameAction::Quit {
                return None;
            }
            // A full frame still has to honor quit; it displaces the newest move.
            out.pop();
        }
        out.push(action);
        Some(action)
    }
}

impl InputSource for InputHandler {
    fn poll(&mut self, out: &mut ActionBuffer) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if self.handle_event(ev, out) == Some(GameAction::Quit) {
                // Nothing after a quit matters.
                break;
            }
        }
        Ok(())
    }
}
