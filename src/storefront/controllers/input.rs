//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    FocusNext,
    FocusPrevious,
    Activate,
    Type(char),
    Backspace,
    CloseModal,
    Quit,
    Ignore,
}

/// Map a key press; `editing` is true while a text input has focus
pub fn map_key(key: KeyEvent, editing: bool) -> InputCommand {
    if key.kind == KeyEventKind::Release {
        return InputCommand::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputCommand::Quit;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => InputCommand::FocusNext,
        KeyCode::BackTab | KeyCode::Up => InputCommand::FocusPrevious,
        KeyCode::Enter => InputCommand::Activate,
        KeyCode::Esc => InputCommand::CloseModal,
        KeyCode::Backspace if editing => InputCommand::Backspace,
        KeyCode::Char(ch) if editing => InputCommand::Type(ch),
        KeyCode::Char(' ') => InputCommand::Activate,
        KeyCode::Char('j') => InputCommand::FocusNext,
        KeyCode::Char('k') => InputCommand::FocusPrevious,
        KeyCode::Char('q') => InputCommand::Quit,
        _ => InputCommand::Ignore,
    }
}
