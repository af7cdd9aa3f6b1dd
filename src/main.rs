//! Terminal racer (default binary).
//!
//! Fixed-rate loop: poll input without blocking, step the session, draw,
//! sleep off the rest of the frame. Rendering goes through a custom
//! framebuffer renderer on crossterm.

mod file_log;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::info;

use tui_racer::core::{ActionBuffer, Flow, FrameClock, FrameSnapshot, GameState, InputSource};
use tui_racer::input::InputHandler;
use tui_racer::term::TerminalSink;
use tui_racer::types::{GameConfig, TICK_MS};

fn main() -> Result<()> {
    file_log::init_from_env()?;
    let config = GameConfig::from_env()?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("starting: {} lanes, seed {}", config.lane_count, seed);

    let mut sink = TerminalSink::new();
    sink.enter()?;

    let result = run(GameState::new(config, seed), &mut sink);

    // Always try to restore terminal state.
    let restored = sink.exit();
    result.and(restored)
}

fn run(mut session: GameState, sink: &mut TerminalSink) -> Result<()> {
    let mut input = InputHandler::new();
    let mut actions = ActionBuffer::new();
    let mut scratch = FrameSnapshot::default();
    let mut clock = FrameClock::new(TICK_MS);
    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    loop {
        // The first frame reports 0 ms; later frames report the real gap.
        let elapsed = clock.begin_frame(now_ms());

        actions.clear();
        input.poll(&mut actions)?;
        if session.step(&actions, elapsed) == Flow::Quit {
            break;
        }

        session.present(&mut scratch, sink)?;

        let remaining = clock.remaining_ms(now_ms());
        if remaining > 0 {
            std::thread::sleep(Duration::from_millis(remaining));
        }
    }

    info!(
        "quit: episode {} score {} ({} inputs dropped)",
        session.episode_id(),
        session.score(),
        input.dropped()
    );
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
