use tui_racer::core::{
    ActionBuffer, Flow, FrameSnapshot, GameState, InputSource, Obstacle, RenderSink,
    ScriptedInput, Sprite,
};
use tui_racer::types::{GameAction, GameConfig, GamePhase, CAR_HEIGHT, CAR_WIDTH, TICK_MS};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn obstacle_at(x: f32, y: f32, speed: f32) -> Obstacle {
    Obstacle {
        x,
        y,
        speed,
        width: CAR_WIDTH,
        height: CAR_HEIGHT,
    }
}

#[test]
fn test_new_session_starts_in_middle_lane() {
    let game = GameState::new(GameConfig::default(), 1);

    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.speed(), 6.0);
    assert_eq!(game.player().lane_index(), 1);
    assert!(approx(game.player().x(), 240.0));
    assert_eq!(game.player().y(), 580.0);
    assert!(game.obstacles().is_empty());
}

#[test]
fn test_obstacle_in_player_lane_ends_the_run() {
    let mut game = GameState::new(GameConfig::default(), 1);
    // Bottom edge exactly touching the player's top edge.
    game.insert_obstacle(obstacle_at(240.0, 500.0, 6.0));
    assert!(!game.check_collision());

    assert!(game.update(TICK_MS));
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.game_over());
}

#[test]
fn test_obstacle_in_other_lane_passes_by() {
    let mut game = GameState::new(GameConfig::default(), 1);
    let left = game.lanes().centers()[0];
    game.insert_obstacle(obstacle_at(left, 560.0, 6.0));

    for _ in 0..30 {
        game.update(TICK_MS);
    }
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn test_obstacles_leave_past_the_bottom() {
    let mut game = GameState::new(GameConfig::default(), 1);
    let left = game.lanes().centers()[0];
    game.insert_obstacle(obstacle_at(left, 690.0, 6.0));

    game.update(TICK_MS);
    assert_eq!(game.obstacles().len(), 1, "top at 696 is still on the road");
    game.update(TICK_MS);
    assert!(game.obstacles().is_empty());
}

#[test]
fn test_game_over_freezes_the_world() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.insert_obstacle(obstacle_at(240.0, 560.0, 6.0));
    assert!(game.update(TICK_MS));

    let frozen = game.snapshot();
    for _ in 0..100 {
        assert!(!game.update(TICK_MS));
    }
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn test_moves_ignored_after_game_over_but_quit_works() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.insert_obstacle(obstacle_at(240.0, 560.0, 6.0));
    game.update(TICK_MS);

    assert_eq!(game.handle_action(GameAction::MoveLeft), Flow::Continue);
    assert_eq!(game.player().lane_index(), 1);
    assert_eq!(game.handle_action(GameAction::Quit), Flow::Quit);
}

#[test]
fn test_restart_only_applies_after_game_over() {
    let mut game = GameState::new(GameConfig::default(), 1);
    for _ in 0..10 {
        game.update(TICK_MS);
    }
    let score = game.score();
    game.handle_action(GameAction::Restart);
    assert_eq!(game.score(), score);
    assert_eq!(game.episode_id(), 0);

    game.insert_obstacle(obstacle_at(240.0, 560.0, 6.0));
    game.update(TICK_MS);
    assert!(game.game_over());

    assert_eq!(game.step(&[GameAction::Restart], TICK_MS), Flow::Continue);
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.speed(), 6.0);
    assert_eq!(game.player().lane_index(), 1);
    assert!(game.obstacles().is_empty());
    // The restart frame itself was simulated: 16ms is one point.
    assert_eq!(game.score(), 1);
}

#[test]
fn test_lane_change_glides_then_lands_on_center() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.step(&[GameAction::MoveLeft], TICK_MS);
    assert_eq!(game.player().lane_index(), 0);
    assert!(approx(game.player().x(), 240.0 - 12.0));

    for _ in 0..11 {
        game.update(TICK_MS);
    }
    assert!(game.player().is_aligned());
    assert_eq!(game.player().x(), game.lanes().centers()[0]);

    // Already in the leftmost lane.
    game.step(&[GameAction::MoveLeft], TICK_MS);
    assert_eq!(game.player().lane_index(), 0);
}

#[test]
fn test_commands_apply_in_arrival_order() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.step(
        &[
            GameAction::MoveRight,
            GameAction::MoveLeft,
            GameAction::MoveLeft,
        ],
        TICK_MS,
    );
    assert_eq!(game.player().lane_index(), 0);
}

#[test]
fn test_quit_stops_before_simulating() {
    let mut game = GameState::new(GameConfig::default(), 1);
    assert_eq!(
        game.step(&[GameAction::Quit, GameAction::MoveLeft], TICK_MS),
        Flow::Quit
    );
    assert_eq!(game.frames(), 0);
    assert_eq!(game.player().lane_index(), 1);
}

#[test]
fn test_first_spawn_after_one_second() {
    let mut game = GameState::new(GameConfig::default(), 7);

    for _ in 0..62 {
        game.update(TICK_MS);
    }
    assert!(game.obstacles().is_empty());
    assert_eq!(game.spawn_timer_ms(), 992);

    game.update(TICK_MS);
    assert_eq!(game.obstacles().len(), 1);
    assert_eq!(game.spawn_timer_ms(), 0);

    let spawned = game.obstacles()[0];
    assert!(game.lanes().centers().contains(&spawned.x));
    assert!((6.0..=9.0).contains(&spawned.speed));
    // Spawned at -100 and moved once in the same frame.
    assert_eq!(spawned.y, -100.0 + spawned.speed);
    assert_eq!(game.score(), 100);
}

#[test]
fn test_long_frame_spawns_only_once() {
    let mut game = GameState::new(GameConfig::default(), 3);
    game.update(5_000);
    assert_eq!(game.obstacles().len(), 1);
    assert_eq!(game.spawn_timer_ms(), 0);
}

#[test]
fn test_score_is_independent_of_frame_pacing() {
    let mut fine = GameState::new(GameConfig::default(), 1);
    let mut coarse = GameState::new(GameConfig::default(), 1);

    // 960ms either way.
    for _ in 0..60 {
        fine.update(16);
    }
    for _ in 0..30 {
        coarse.update(32);
    }
    assert_eq!(fine.score(), 96);
    assert_eq!(coarse.score(), 96);
}

#[test]
fn test_speed_rises_with_score_and_is_capped() {
    let config = GameConfig {
        score_threshold: 10,
        difficulty_increment: 1.0,
        max_speed: 8.5,
        spawn_delay_ms: 1_000_000,
        ..GameConfig::default()
    };
    let mut game = GameState::try_new(config, 1).unwrap();

    game.update(100); // score 10
    assert_eq!(game.speed(), 7.0);
    game.update(100); // score 20
    assert_eq!(game.speed(), 8.0);
    game.update(500); // score 70
    assert_eq!(game.speed(), 8.5);
    // The road scrolls at the speed in effect when each frame started.
    assert_eq!(game.road_offset(), 6.0 + 7.0 + 8.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        lane_count: 12,
        ..GameConfig::default()
    };
    assert!(GameState::try_new(config, 1).is_err());
}

#[test]
fn test_same_seed_same_inputs_same_run() {
    let pattern = [
        &[][..],
        &[GameAction::MoveLeft][..],
        &[][..],
        &[GameAction::MoveRight, GameAction::MoveRight][..],
        &[GameAction::Restart][..],
    ];

    let mut a = GameState::new(GameConfig::default(), 4242);
    let mut b = GameState::new(GameConfig::default(), 4242);
    for frame in 0..3_000 {
        let actions = pattern[(frame / 20) % pattern.len()];
        a.step(actions, TICK_MS);
        b.step(actions, TICK_MS);
        assert_eq!(a.snapshot(), b.snapshot(), "diverged at frame {frame}");
    }
}

#[test]
fn test_spawned_traffic_always_uses_lane_centers() {
    let config = GameConfig {
        lane_count: 5,
        ..GameConfig::default()
    };
    let mut game = GameState::try_new(config, 99).unwrap();
    let centers: Vec<f32> = game.lanes().centers().to_vec();

    for _ in 0..5_000 {
        if game.game_over() {
            game.handle_action(GameAction::Restart);
        }
        game.update(TICK_MS);
        for o in game.obstacles() {
            assert!(centers.contains(&o.x));
            assert!(o.bounds().top() <= 700.0);
        }
    }
}

#[derive(Default)]
struct CountingSink {
    running: u32,
    game_over: u32,
    last_score: u32,
}

impl RenderSink for CountingSink {
    fn draw_frame(&mut self, frame: &FrameSnapshot) -> anyhow::Result<()> {
        assert!(frame.playable());
        self.running += 1;
        self.last_score = frame.score;
        Ok(())
    }

    fn draw_game_over(&mut self, frame: &FrameSnapshot) -> anyhow::Result<()> {
        assert_eq!(frame.phase, GamePhase::GameOver);
        self.game_over += 1;
        self.last_score = frame.score;
        Ok(())
    }
}

#[test]
fn test_scripted_session_drives_the_render_sink() {
    let mut game = GameState::new(GameConfig::default(), 1);
    let mut input = ScriptedInput::new();
    let mut sink = CountingSink::default();
    let mut scratch = FrameSnapshot::default();

    input.push_frame(&[GameAction::MoveRight]);
    input.push_frame(&[]);
    input.push_frame(&[GameAction::Quit]);

    let mut actions = ActionBuffer::new();
    let mut frames = 0;
    loop {
        actions.clear();
        input.poll(&mut actions).unwrap();
        if game.step(&actions, TICK_MS) == Flow::Quit {
            break;
        }
        game.present(&mut scratch, &mut sink).unwrap();
        frames += 1;

        if frames == 2 {
            let lane = game.player().x();
            game.insert_obstacle(obstacle_at(lane, 560.0, 6.0));
        }
    }

    assert!(input.is_exhausted());
    assert_eq!(game.player().lane_index(), 2);
    assert_eq!(frames, 2);
    assert_eq!(sink.running, 2);
    assert_eq!(sink.game_over, 0);

    // Crash, then render the frozen frame.
    game.update(TICK_MS);
    assert!(game.game_over());
    game.present(&mut scratch, &mut sink).unwrap();
    assert_eq!(sink.game_over, 1);
    assert_eq!(sink.last_score, game.score());
}
