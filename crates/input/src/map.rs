//! Key mapping from terminal events to session commands.

use crate::types::{Command, PlayerSlot};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to a single-player command.
///
/// `a`/`d`/`s` and the arrow keys move, `w` or Space hard-drops, `z` and
/// Up rotate, `q` quits.
pub fn solo_command(key: KeyEvent) -> Option<Command> {
    if is_release(key) {
        return None;
    }
    if should_quit(key) {
        return Some(Command::Quit);
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Command::RotateLeft),
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::RotateRight),

        // Actions
        KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::HardDrop),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),

        _ => None,
    }
}

/// Map a key to a command for one side of a shared keyboard.
///
/// Player one uses `a d s w q e`, player two `j l k i u o` (left, right,
/// soft drop, hard drop, rotate left, rotate right). Esc or Ctrl-C quits the
/// match and is reported for player one.
pub fn versus_command(key: KeyEvent) -> Option<(PlayerSlot, Command)> {
    if is_release(key) {
        return None;
    }
    if should_quit(key) {
        return Some((PlayerSlot::One, Command::Quit));
    }
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let slot_command = match c.to_ascii_lowercase() {
        'a' => (PlayerSlot::One, Command::MoveLeft),
        'd' => (PlayerSlot::One, Command::MoveRight),
        's' => (PlayerSlot::One, Command::SoftDrop),
        'w' => (PlayerSlot::One, Command::HardDrop),
        'q' => (PlayerSlot::One, Command::RotateLeft),
        'e' => (PlayerSlot::One, Command::RotateRight),

        'j' => (PlayerSlot::Two, Command::MoveLeft),
        'l' => (PlayerSlot::Two, Command::MoveRight),
        'k' => (PlayerSlot::Two, Command::SoftDrop),
        'i' => (PlayerSlot::Two, Command::HardDrop),
        'u' => (PlayerSlot::Two, Command::RotateLeft),
        'o' => (PlayerSlot::Two, Command::RotateRight),

        _ => return None,
    };
    Some(slot_command)
}

/// Esc or Ctrl-C: leave the game in either layout.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn is_release(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Release
}
