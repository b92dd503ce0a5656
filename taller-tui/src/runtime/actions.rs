use std::path::Path;

use anyhow::Result;
use time::OffsetDateTime;
use tracing::info;

use taller_core::domain::{Project, TimeLog, Worker};
use taller_core::{daily, report, CollectionStore, ReportError, Repository};

use crate::app::{App, ConfirmAction, NoticeAction, RosterKind};

use super::action_queue::Action;

pub(super) fn run_action<S: CollectionStore>(
    action: Action,
    app: &mut App,
    repo: &mut Repository<S>,
) -> Result<()> {
    match action {
        Action::LoadData => load_data(app, repo),
        Action::RegisterHours { hours } => register_hours(app, repo, hours),
        Action::SubmitPassphrase => submit_passphrase(app, repo),
        Action::ConfirmEdit => confirm_edit(app, repo),
        Action::ConfirmPending => confirm_pending(app, repo),
        Action::ToggleProjectActive { id } => toggle_project_active(app, repo, &id),
        Action::ExportReport => export_report(app),
        Action::ExitAdmin => exit_admin(app, repo),
    }
}

fn load_data<S: CollectionStore>(app: &mut App, repo: &mut Repository<S>) -> Result<()> {
    let workers = repo.workers()?;
    let projects = repo.projects()?;
    let logs = repo.logs()?;
    app.set_data(workers, projects, logs);
    Ok(())
}

fn register_hours<S: CollectionStore>(
    app: &mut App,
    repo: &mut Repository<S>,
    hours: f64,
) -> Result<()> {
    let (Some(worker), Some(project)) = (app.selected_worker.clone(), app.selected_project.clone())
    else {
        return Ok(());
    };

    let offset = daily::local_offset();
    let now = OffsetDateTime::now_utc().to_offset(offset);
    let log = TimeLog::register(&worker, &project, hours, now);
    repo.save_log(log.clone())?;
    app.logs.push(log);
    info!("registered {hours}h for {} on {}", worker.name, project.name);

    let total = daily::hours_on_date(&worker.id, now.date(), offset, &app.logs);
    app.finish_registration(total);
    Ok(())
}

fn submit_passphrase<S: CollectionStore>(app: &mut App, repo: &mut Repository<S>) -> Result<()> {
    let Some(admin) = app.admin.as_mut() else {
        return Ok(());
    };
    if app.gate.authorize(&admin.passphrase_input.value) {
        admin.authorized = true;
        admin.auth_error = None;
        admin.passphrase_input.clear();
        load_data(app, repo)?;
    } else {
        admin.auth_error = Some("Contraseña incorrecta".to_string());
    }
    Ok(())
}

/// Confirm the add/rename dialog. A blank trimmed name is silently
/// ignored: the dialog stays open and nothing is persisted.
fn confirm_edit<S: CollectionStore>(app: &mut App, repo: &mut Repository<S>) -> Result<()> {
    let Some(dialog) = app.admin.as_ref().and_then(|a| a.edit.clone()) else {
        return Ok(());
    };
    let name = dialog.name.value.trim().to_string();
    if name.is_empty() {
        return Ok(());
    }

    match dialog.target {
        RosterKind::Workers => {
            let mut workers = app.workers.clone();
            match &dialog.id {
                Some(id) => {
                    if let Some(worker) = workers.iter_mut().find(|w| &w.id == id) {
                        worker.name = name;
                    }
                }
                None => workers.push(Worker::new(name)),
            }
            repo.save_workers(&workers)?;
            app.workers = workers;
            app.filter_workers();
        }
        RosterKind::Projects => {
            let mut projects = app.projects.clone();
            match &dialog.id {
                Some(id) => {
                    if let Some(project) = projects.iter_mut().find(|p| &p.id == id) {
                        project.name = name;
                    }
                }
                None => projects.push(Project::new(name)),
            }
            repo.save_projects(&projects)?;
            app.projects = projects;
            app.filter_projects();
        }
    }

    if let Some(admin) = app.admin.as_mut() {
        admin.edit = None;
    }
    app.show_notice("Sincronizado permanentemente", NoticeAction::Dismiss);
    Ok(())
}

fn confirm_pending<S: CollectionStore>(app: &mut App, repo: &mut Repository<S>) -> Result<()> {
    let Some(action) = app.admin.as_ref().and_then(|a| a.confirm.clone()) else {
        return Ok(());
    };

    match action {
        ConfirmAction::DeleteWorker(id) => {
            let mut workers = app.workers.clone();
            workers.retain(|w| w.id != id);
            repo.save_workers(&workers)?;
            app.workers = workers;
            app.filter_workers();
        }
        ConfirmAction::DeleteProject(id) => {
            let mut projects = app.projects.clone();
            projects.retain(|p| p.id != id);
            repo.save_projects(&projects)?;
            app.projects = projects;
            app.filter_projects();
        }
        ConfirmAction::ResetLogs => {
            repo.reset_logs()?;
            app.logs.clear();
        }
    }

    let list_len = app.admin_list_len();
    if let Some(admin) = app.admin.as_mut() {
        admin.confirm = None;
        admin.selected_index = admin.selected_index.min(list_len.saturating_sub(1));
    }
    app.show_notice("Sincronizado permanentemente", NoticeAction::Dismiss);
    Ok(())
}

/// Flips a project between active and closed. Immediate, no confirmation
/// step.
fn toggle_project_active<S: CollectionStore>(
    app: &mut App,
    repo: &mut Repository<S>,
    id: &str,
) -> Result<()> {
    let mut projects = app.projects.clone();
    if let Some(project) = projects.iter_mut().find(|p| p.id == id) {
        project.active = !project.active;
    }
    repo.save_projects(&projects)?;
    app.projects = projects;
    app.filter_projects();
    app.show_notice("Sincronizado permanentemente", NoticeAction::Dismiss);
    Ok(())
}

fn export_report(app: &mut App) -> Result<()> {
    let offset = daily::local_offset();
    let now = OffsetDateTime::now_utc().to_offset(offset);
    match report::export_to_dir(&app.logs, offset, now, Path::new(".")) {
        Ok(path) => {
            app.show_notice(
                format!("Reporte exportado: {}", path.display()),
                NoticeAction::Dismiss,
            );
        }
        Err(ReportError::NoLogs) => {
            app.set_status("No hay registros para exportar");
        }
        Err(e) => {
            app.set_status(format!("Error al exportar: {e}"));
        }
    }
    Ok(())
}

fn exit_admin<S: CollectionStore>(app: &mut App, repo: &mut Repository<S>) -> Result<()> {
    app.go_back();
    load_data(app, repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{EditDialog, TextInput, View};
    use taller_core::{AdminGate, MemoryStore};

    fn fixture() -> (App, Repository<MemoryStore>) {
        let mut repo = Repository::new(MemoryStore::new());
        let mut app = App::new(AdminGate::default());
        load_data(&mut app, &mut repo).unwrap();
        (app, repo)
    }

    fn authorized_admin(app: &mut App) {
        app.enter_admin();
        app.admin.as_mut().unwrap().authorized = true;
    }

    #[test]
    fn register_hours_persists_and_advances_the_flow() {
        let (mut app, mut repo) = fixture();
        let worker = app.workers[0].clone();
        let project = app.projects[0].clone();
        app.select_worker(worker.clone());
        app.select_project(project);

        run_action(Action::RegisterHours { hours: 3.0 }, &mut app, &mut repo).unwrap();

        assert_eq!(repo.logs().unwrap().len(), 1);
        assert_eq!(app.current_view, View::SelectProject);
        assert!(app.selected_project.is_none());
        assert_eq!(app.hours_today(), 3.0);
    }

    #[test]
    fn registering_up_to_the_limit_queues_the_completion_notice() {
        let (mut app, mut repo) = fixture();
        let worker = app.workers[0].clone();
        let project = app.projects[0].clone();
        app.select_worker(worker);
        app.select_project(project.clone());

        run_action(Action::RegisterHours { hours: 8.0 }, &mut app, &mut repo).unwrap();

        assert!(app.notice.is_some());
        assert_eq!(app.current_view, View::InputHours);
    }

    #[test]
    fn wrong_passphrase_keeps_the_gate_closed() {
        let (mut app, mut repo) = fixture();
        app.enter_admin();
        app.admin.as_mut().unwrap().passphrase_input = TextInput::from_str("nope");

        run_action(Action::SubmitPassphrase, &mut app, &mut repo).unwrap();

        let admin = app.admin.as_ref().unwrap();
        assert!(!admin.authorized);
        assert!(admin.auth_error.is_some());
    }

    #[test]
    fn correct_passphrase_authorizes_and_reloads() {
        let (mut app, mut repo) = fixture();
        app.workers.clear();
        app.enter_admin();
        app.admin.as_mut().unwrap().passphrase_input = TextInput::from_str("admin123");

        run_action(Action::SubmitPassphrase, &mut app, &mut repo).unwrap();

        assert!(app.admin.as_ref().unwrap().authorized);
        // The reload restored the roster cleared above.
        assert_eq!(app.workers.len(), 8);
    }

    #[test]
    fn blank_edit_name_is_silently_ignored() {
        let (mut app, mut repo) = fixture();
        authorized_admin(&mut app);
        app.admin.as_mut().unwrap().edit = Some(EditDialog {
            target: RosterKind::Workers,
            id: None,
            name: TextInput::from_str("   "),
        });

        run_action(Action::ConfirmEdit, &mut app, &mut repo).unwrap();

        assert_eq!(app.workers.len(), 8);
        // The dialog stays open for the user to fix the name.
        assert!(app.admin.as_ref().unwrap().edit.is_some());
    }

    #[test]
    fn add_appends_a_trimmed_record() {
        let (mut app, mut repo) = fixture();
        authorized_admin(&mut app);
        app.admin.as_mut().unwrap().edit = Some(EditDialog {
            target: RosterKind::Projects,
            id: None,
            name: TextInput::from_str("  DAF XF - GRÚA NUEVA  "),
        });

        run_action(Action::ConfirmEdit, &mut app, &mut repo).unwrap();

        let projects = repo.projects().unwrap();
        let added = projects.last().unwrap();
        assert_eq!(added.name, "DAF XF - GRÚA NUEVA");
        assert!(added.active);
        assert!(app.admin.as_ref().unwrap().edit.is_none());
    }

    #[test]
    fn rename_keeps_position_and_other_fields() {
        let (mut app, mut repo) = fixture();
        authorized_admin(&mut app);
        let target = app.projects[2].clone();
        app.admin.as_mut().unwrap().edit = Some(EditDialog {
            target: RosterKind::Projects,
            id: Some(target.id.clone()),
            name: TextInput::from_str("RENOMBRADO"),
        });

        run_action(Action::ConfirmEdit, &mut app, &mut repo).unwrap();

        let projects = repo.projects().unwrap();
        assert_eq!(projects[2].id, target.id);
        assert_eq!(projects[2].name, "RENOMBRADO");
        assert_eq!(projects[2].active, target.active);
        assert_eq!(projects.len(), 7);
    }

    #[test]
    fn confirmed_delete_removes_only_the_record() {
        let (mut app, mut repo) = fixture();
        let worker = app.workers[0].clone();
        let project = app.projects[0].clone();
        app.select_worker(worker.clone());
        app.select_project(project);
        run_action(Action::RegisterHours { hours: 2.0 }, &mut app, &mut repo).unwrap();

        authorized_admin(&mut app);
        app.admin.as_mut().unwrap().confirm = Some(ConfirmAction::DeleteWorker(worker.id.clone()));
        run_action(Action::ConfirmPending, &mut app, &mut repo).unwrap();

        assert_eq!(app.workers.len(), 7);
        assert!(app.workers.iter().all(|w| w.id != worker.id));
        // Referencing logs stay intact.
        let logs = repo.logs().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].worker_id, worker.id);
    }

    #[test]
    fn confirmed_reset_clears_the_logs() {
        let (mut app, mut repo) = fixture();
        let worker = app.workers[0].clone();
        let project = app.projects[0].clone();
        app.select_worker(worker);
        app.select_project(project);
        run_action(Action::RegisterHours { hours: 2.0 }, &mut app, &mut repo).unwrap();

        authorized_admin(&mut app);
        app.admin.as_mut().unwrap().confirm = Some(ConfirmAction::ResetLogs);
        run_action(Action::ConfirmPending, &mut app, &mut repo).unwrap();

        assert!(app.logs.is_empty());
        assert!(repo.logs().unwrap().is_empty());
    }

    #[test]
    fn toggle_flips_active_without_confirmation() {
        let (mut app, mut repo) = fixture();
        authorized_admin(&mut app);
        let id = app.projects[0].id.clone();

        run_action(
            Action::ToggleProjectActive { id: id.clone() },
            &mut app,
            &mut repo,
        )
        .unwrap();
        assert!(!repo.projects().unwrap()[0].active);

        run_action(Action::ToggleProjectActive { id }, &mut app, &mut repo).unwrap();
        assert!(repo.projects().unwrap()[0].active);
    }

    #[test]
    fn export_of_empty_logs_surfaces_an_error() {
        let (mut app, mut repo) = fixture();
        authorized_admin(&mut app);

        run_action(Action::ExportReport, &mut app, &mut repo).unwrap();

        assert_eq!(
            app.status_message.as_deref(),
            Some("No hay registros para exportar")
        );
    }
}
