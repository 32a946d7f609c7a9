//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Dashboard;

/// Handle a [`KeyEvent`]. Returns true if the dashboard should close.
pub fn handle_key_event_or_break(event: KeyEvent, dashboard: &mut Dashboard) -> bool {
    // Windows reports releases as well as presses.
    if event.kind == KeyEventKind::Release {
        return false;
    }

    if event.modifiers.is_empty() || event.modifiers == KeyModifiers::SHIFT {
        match event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char(' ') => {
                dashboard.toggle_frozen();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => dashboard.reset_instruments(),
            _ => {}
        }
    } else if let KeyModifiers::CONTROL = event.modifiers {
        match event.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('r') => dashboard.reset_instruments(),
            _ => {}
        }
    }

    false
}
