use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tui_racer::core::{ActionBuffer, Flow, GameState};
use tui_racer::input::{handle_key_event, should_quit, InputHandler};
use tui_racer::types::{GameAction, GameConfig, TICK_MS};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

#[test]
fn test_key_bindings() {
    let cases = [
        (KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Char('a'), GameAction::MoveLeft),
        (KeyCode::Char('h'), GameAction::MoveLeft),
        (KeyCode::Right, GameAction::MoveRight),
        (KeyCode::Char('d'), GameAction::MoveRight),
        (KeyCode::Char('l'), GameAction::MoveRight),
        (KeyCode::Char('r'), GameAction::Restart),
        (KeyCode::Char('q'), GameAction::Quit),
        (KeyCode::Esc, GameAction::Quit),
    ];
    for (code, action) in cases {
        assert_eq!(
            handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)),
            Some(action),
            "{code:?}"
        );
    }

    assert_eq!(
        handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
        None
    );
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
}

#[test]
fn test_terminal_events_drive_a_session() {
    let mut game = GameState::new(GameConfig::default(), 1);
    let mut handler = InputHandler::new();
    let mut actions = ActionBuffer::new();

    for ev in [
        press(KeyCode::Right),
        Event::Resize(100, 40),
        press(KeyCode::Char('x')),
    ] {
        handler.handle_event(ev, &mut actions);
    }
    assert_eq!(actions.as_slice(), &[GameAction::MoveRight]);
    assert_eq!(game.step(&actions, TICK_MS), Flow::Continue);
    assert_eq!(game.player().lane_index(), 2);

    actions.clear();
    handler.handle_event(press(KeyCode::Char('q')), &mut actions);
    assert_eq!(game.step(&actions, TICK_MS), Flow::Quit);
}
