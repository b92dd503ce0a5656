use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::{handle_selection_input_key, SelectionInputOps};

pub(super) fn handle_key(key: KeyEvent, app: &mut App) {
    if handle_selection_input_key(
        key,
        app,
        app.filtered_project_index,
        app.filtered_projects.len(),
        SelectionInputOps {
            clear_input: App::project_search_clear,
            input_char: App::project_search_char,
            input_backspace: App::project_search_backspace,
            move_cursor: App::project_search_move_cursor,
        },
    ) {
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if let Some(project) = app.filtered_projects.get(app.filtered_project_index).cloned() {
                app.select_project(project);
            }
        }
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}
