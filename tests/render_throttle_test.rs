use tui_racer::core::{FrameSnapshot, GameState, Obstacle};
use tui_racer::term::RenderThrottle;
use tui_racer::types::{GameAction, GameConfig, CAR_HEIGHT, CAR_WIDTH, TICK_MS};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
    assert!(!t.should_render(251, 1, true));
}

#[test]
fn render_throttle_running_frames_always_render() {
    let mut t = RenderThrottle::new(250);
    for now in 0..5 {
        assert!(t.should_render(now, 1, false));
    }
}

#[test]
fn render_throttle_reset_forces_next_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(1, 1, true));
    t.reset();
    assert!(t.should_render(2, 1, true));
}

fn crashed_game() -> GameState {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.insert_obstacle(Obstacle {
        x: 240.0,
        y: 560.0,
        speed: 6.0,
        width: CAR_WIDTH,
        height: CAR_HEIGHT,
    });
    game.update(TICK_MS);
    assert!(game.game_over());
    game
}

#[test]
fn render_throttle_holds_frozen_game_over_screen() {
    let mut game = crashed_game();
    let mut snap = FrameSnapshot::default();
    let mut t = RenderThrottle::new(250);

    game.snapshot_into(&mut snap);
    assert!(t.should_draw(0, &snap));
    for now in (16..240).step_by(16) {
        game.update(TICK_MS);
        game.snapshot_into(&mut snap);
        assert!(!t.should_draw(now, &snap));
    }

    // Restart changes the fingerprint and the phase.
    game.step(&[GameAction::Restart], TICK_MS);
    game.snapshot_into(&mut snap);
    assert!(t.should_draw(241, &snap));
    assert!(t.should_draw(242, &snap));
}
