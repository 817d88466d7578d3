// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// orchestrator, or into local ViewState mutations (picker movement, Shots
// focus and filtering).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::UserCommand;

/// Rows moved by PageUp/PageDown in the picker.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator. Returns `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm reports Release and Repeat on some platforms.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            move_cursor_up(view_state, 1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_cursor_down(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            move_cursor_up(view_state, PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            move_cursor_down(view_state, PAGE_SIZE);
            None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            view_state.cursor = 0;
            None
        }
        KeyCode::End | KeyCode::Char('G') => {
            view_state.cursor = view_state.filtered_players().len().saturating_sub(1);
            None
        }

        KeyCode::Left | KeyCode::Char('h') => {
            view_state.shift_shot_focus(false);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            view_state.shift_shot_focus(true);
            None
        }

        KeyCode::Enter => view_state
            .highlighted()
            .map(|key| UserCommand::Select(key.to_string())),

        KeyCode::Char('/') => {
            view_state.filter_mode = true;
            None
        }
        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.clamp_cursor();
            None
        }

        KeyCode::Char('r') => Some(UserCommand::Refresh),
        KeyCode::Char('q') => Some(UserCommand::Quit),

        _ => None,
    }
}

/// Handle key events while in filter mode.
///
/// - Printable characters are appended to filter_text
/// - Backspace removes the last character
/// - Enter keeps the text and returns to the picker
/// - Esc clears the text and returns to the picker
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
        }
        KeyCode::Enter => {
            view_state.filter_mode = false;
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
            view_state.cursor = 0;
        }
        _ => return None,
    }
    view_state.clamp_cursor();
    None
}

fn move_cursor_up(view_state: &mut ViewState, rows: usize) {
    view_state.cursor = view_state.cursor.saturating_sub(rows);
}

fn move_cursor_down(view_state: &mut ViewState, rows: usize) {
    view_state.cursor = view_state.cursor.saturating_add(rows);
    view_state.clamp_cursor();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
