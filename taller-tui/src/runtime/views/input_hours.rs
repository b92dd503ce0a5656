use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use taller_core::daily::{self, HOUR_OPTIONS};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

/// The hour menu is a 3x3 grid; arrows move the cursor, Enter registers.
/// Increments above the remaining allowance are rendered disabled and
/// Enter on them is a no-op.
pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.hour_index = app.hour_index.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.hour_index + 1 < HOUR_OPTIONS.len() {
                app.hour_index += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.hour_index = app.hour_index.saturating_sub(3);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.hour_index = (app.hour_index + 3).min(HOUR_OPTIONS.len() - 1);
        }
        KeyCode::Enter => {
            let hours = HOUR_OPTIONS[app.hour_index];
            if daily::is_selectable(hours, app.hours_today()) {
                enqueue_action(action_tx, Action::RegisterHours { hours });
            }
        }
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}
