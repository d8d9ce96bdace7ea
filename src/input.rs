use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::direction::Direction;
use crate::game::GameMode;

/// High-level input events consumed by the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Steer { agent: usize, direction: Direction },
    Start,
    TogglePause,
    Restart,
    ToggleTheme,
    Quit,
}

/// Which key set a steering key belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum KeySet {
    Letters,
    Arrows,
}

fn steering_key(code: KeyCode) -> Option<(KeySet, Direction)> {
    let entry = match code {
        KeyCode::Char('w' | 'W') => (KeySet::Letters, Direction::Up),
        KeyCode::Char('s' | 'S') => (KeySet::Letters, Direction::Down),
        KeyCode::Char('a' | 'A') => (KeySet::Letters, Direction::Left),
        KeyCode::Char('d' | 'D') => (KeySet::Letters, Direction::Right),
        KeyCode::Up => (KeySet::Arrows, Direction::Up),
        KeyCode::Down => (KeySet::Arrows, Direction::Down),
        KeyCode::Left => (KeySet::Arrows, Direction::Left),
        KeyCode::Right => (KeySet::Arrows, Direction::Right),
        _ => return None,
    };
    Some(entry)
}

/// Maps a key to a command.
///
/// In single mode both key sets steer the only snake. In multi mode the
/// letters steer agent 0 (spawned on the left) and the arrows agent 1.
#[must_use]
pub fn command_for_key(mode: GameMode, code: KeyCode) -> Option<Command> {
    if let Some((set, direction)) = steering_key(code) {
        let agent = match (mode, set) {
            (GameMode::Single, _) | (GameMode::Multi, KeySet::Letters) => 0,
            (GameMode::Multi, KeySet::Arrows) => 1,
        };
        return Some(Command::Steer { agent, direction });
    }

    match code {
        KeyCode::Char(' ' | 'p' | 'P') => Some(Command::TogglePause),
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('r' | 'R') => Some(Command::Restart),
        KeyCode::Char('t' | 'T') => Some(Command::ToggleTheme),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Waits up to `timeout` for a key press and maps it to a command.
pub fn poll_command(mode: GameMode, timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Ok(command_for_key(mode, code)),
        _ => Ok(None),
    }
}
