use crate::app::{AdminTab, App, ConfirmAction, EditDialog, RosterKind, TextInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let (authorized, has_edit, has_confirm) = match app.admin.as_ref() {
        Some(admin) => (admin.authorized, admin.edit.is_some(), admin.confirm.is_some()),
        None => return,
    };

    if !authorized {
        handle_passphrase_key(key, app, action_tx);
    } else if has_edit {
        handle_edit_dialog_key(key, app, action_tx);
    } else if has_confirm {
        handle_confirm_key(key, app, action_tx);
    } else {
        handle_panel_key(key, app, action_tx);
    }
}

fn handle_passphrase_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(admin) = app.admin.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            admin.passphrase_input.insert(c);
        }
        KeyCode::Backspace => admin.passphrase_input.backspace(),
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitPassphrase),
        KeyCode::Esc => enqueue_action(action_tx, Action::ExitAdmin),
        _ => {}
    }
}

fn handle_edit_dialog_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(dialog) = app.admin.as_mut().and_then(|a| a.edit.as_mut()) else {
        return;
    };
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            dialog.name.insert(c);
        }
        KeyCode::Backspace => dialog.name.backspace(),
        KeyCode::Left => dialog.name.move_left(),
        KeyCode::Right => dialog.name.move_right(),
        KeyCode::Enter => enqueue_action(action_tx, Action::ConfirmEdit),
        KeyCode::Esc => {
            if let Some(admin) = app.admin.as_mut() {
                admin.edit = None;
            }
        }
        _ => {}
    }
}

fn handle_confirm_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            enqueue_action(action_tx, Action::ConfirmPending);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            if let Some(admin) = app.admin.as_mut() {
                admin.confirm = None;
            }
        }
        _ => {}
    }
}

fn handle_panel_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let list_len = app.admin_list_len();
    let Some(admin) = app.admin.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => enqueue_action(action_tx, Action::ExitAdmin),
        KeyCode::Tab => {
            admin.tab = admin.tab.next();
            admin.selected_index = 0;
        }
        KeyCode::BackTab => {
            admin.tab = admin.tab.previous();
            admin.selected_index = 0;
        }
        KeyCode::Char('1') => {
            admin.tab = AdminTab::Logs;
            admin.selected_index = 0;
        }
        KeyCode::Char('2') => {
            admin.tab = AdminTab::Workers;
            admin.selected_index = 0;
        }
        KeyCode::Char('3') => {
            admin.tab = AdminTab::Projects;
            admin.selected_index = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            admin.selected_index = admin.selected_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if admin.selected_index + 1 < list_len {
                admin.selected_index += 1;
            }
        }
        _ => match admin.tab {
            AdminTab::Logs => match key.code {
                KeyCode::Char('e') => enqueue_action(action_tx, Action::ExportReport),
                KeyCode::Char('r') => admin.confirm = Some(ConfirmAction::ResetLogs),
                _ => {}
            },
            AdminTab::Workers => match key.code {
                KeyCode::Char('a') => {
                    admin.edit = Some(EditDialog {
                        target: RosterKind::Workers,
                        id: None,
                        name: TextInput::new(),
                    });
                }
                KeyCode::Char('e') | KeyCode::Enter => {
                    if let Some(worker) = app.workers.get(admin.selected_index) {
                        admin.edit = Some(EditDialog {
                            target: RosterKind::Workers,
                            id: Some(worker.id.clone()),
                            name: TextInput::from_str(&worker.name),
                        });
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(worker) = app.workers.get(admin.selected_index) {
                        admin.confirm = Some(ConfirmAction::DeleteWorker(worker.id.clone()));
                    }
                }
                _ => {}
            },
            AdminTab::Projects => match key.code {
                KeyCode::Char('a') => {
                    admin.edit = Some(EditDialog {
                        target: RosterKind::Projects,
                        id: None,
                        name: TextInput::new(),
                    });
                }
                KeyCode::Char('e') | KeyCode::Enter => {
                    if let Some(project) = app.projects.get(admin.selected_index) {
                        admin.edit = Some(EditDialog {
                            target: RosterKind::Projects,
                            id: Some(project.id.clone()),
                            name: TextInput::from_str(&project.name),
                        });
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(project) = app.projects.get(admin.selected_index) {
                        admin.confirm = Some(ConfirmAction::DeleteProject(project.id.clone()));
                    }
                }
                KeyCode::Char('t') => {
                    if let Some(project) = app.projects.get(admin.selected_index) {
                        enqueue_action(
                            action_tx,
                            Action::ToggleProjectActive {
                                id: project.id.clone(),
                            },
                        );
                    }
                }
                _ => {}
            },
        },
    }
}
