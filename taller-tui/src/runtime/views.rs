use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, NoticeAction, View};

use super::action_queue::{Action, ActionTx};

mod admin;
mod input_hours;
mod select_project;
mod select_worker;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // The full-screen completion notice swallows input until it expires.
    if app
        .notice
        .as_ref()
        .is_some_and(|n| n.action == NoticeAction::ResetToWorkerSelect)
    {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.quit();
            return;
        }
        KeyCode::F(2) if app.current_view != View::Admin => {
            app.enter_admin();
            enqueue_action(action_tx, Action::LoadData);
            return;
        }
        _ => {}
    }

    match app.current_view {
        View::SelectWorker => select_worker::handle_key(key, app),
        View::SelectProject => select_project::handle_key(key, app),
        View::InputHours => input_hours::handle_key(key, app, action_tx),
        View::Admin => admin::handle_key(key, app, action_tx),
    }
}

/// Shared input handling for the two selection views: typing filters, Tab
/// moves focus to the result list, arrows (and j/k while the list is
/// focused) navigate. Returns true when the key was consumed.
fn handle_selection_input_key(
    key: KeyEvent,
    app: &mut App,
    list_index: usize,
    list_len: usize,
    ops: SelectionInputOps,
) -> bool {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            (ops.clear_input)(app);
            true
        }
        KeyCode::Tab => {
            app.selection_list_focused = true;
            true
        }
        KeyCode::BackTab => {
            app.selection_list_focused = false;
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.selection_list_focused && c == 'j' {
                if list_index + 1 >= list_len {
                    app.selection_list_focused = false;
                } else {
                    app.select_next();
                }
            } else if app.selection_list_focused && c == 'k' {
                if list_index == 0 {
                    app.selection_list_focused = false;
                } else {
                    app.select_previous();
                }
            } else if !app.selection_list_focused {
                (ops.input_char)(app, c);
            }
            true
        }
        KeyCode::Backspace => {
            (ops.input_backspace)(app);
            true
        }
        KeyCode::Up => {
            if app.selection_list_focused && list_index == 0 {
                app.selection_list_focused = false;
            } else {
                app.select_previous();
            }
            true
        }
        KeyCode::Down => {
            if app.selection_list_focused && list_index + 1 >= list_len {
                app.selection_list_focused = false;
            } else {
                app.select_next();
            }
            true
        }
        KeyCode::Left => {
            if !app.selection_list_focused {
                (ops.move_cursor)(app, true);
            }
            true
        }
        KeyCode::Right => {
            if !app.selection_list_focused {
                (ops.move_cursor)(app, false);
            }
            true
        }
        _ => false,
    }
}

#[derive(Clone, Copy)]
struct SelectionInputOps {
    clear_input: fn(&mut App),
    input_char: fn(&mut App, char),
    input_backspace: fn(&mut App),
    move_cursor: fn(&mut App, bool),
}
