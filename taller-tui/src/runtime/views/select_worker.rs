use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::{handle_selection_input_key, SelectionInputOps};

pub(super) fn handle_key(key: KeyEvent, app: &mut App) {
    if handle_selection_input_key(
        key,
        app,
        app.filtered_worker_index,
        app.filtered_workers.len(),
        SelectionInputOps {
            clear_input: App::worker_search_clear,
            input_char: App::worker_search_char,
            input_backspace: App::worker_search_backspace,
            move_cursor: App::worker_search_move_cursor,
        },
    ) {
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if let Some(worker) = app.filtered_workers.get(app.filtered_worker_index).cloned() {
                app.select_worker(worker);
            }
        }
        // Initial screen: Esc has nowhere to go back to.
        KeyCode::Esc => {}
        _ => {}
    }
}
