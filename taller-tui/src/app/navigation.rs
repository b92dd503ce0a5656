use std::time::Instant;

use taller_core::daily::DAILY_HOUR_LIMIT;
use taller_core::domain::{Project, Worker};

use super::state::{AdminState, NoticeAction, View};
use super::App;

impl App {
    /// Switch views. Clears the status line and any pending notice, so a
    /// manual transition always invalidates a delayed reset that has not
    /// fired yet.
    pub fn navigate_to(&mut self, view: View) {
        self.notice = None;
        self.status_message = None;
        self.selection_list_focused = false;
        self.current_view = view;
    }

    pub fn select_worker(&mut self, worker: Worker) {
        self.selected_worker = Some(worker);
        self.project_search_input.clear();
        self.filter_projects();
        self.navigate_to(View::SelectProject);
    }

    pub fn select_project(&mut self, project: Project) {
        self.selected_project = Some(project);
        self.hour_index = 0;
        self.navigate_to(View::InputHours);
    }

    /// Backward navigation rules: worker selection forgets the worker,
    /// hour entry keeps the project until overwritten, admin drops its
    /// whole sub-state.
    pub fn go_back(&mut self) {
        match self.current_view {
            View::SelectWorker => {}
            View::SelectProject => {
                self.selected_worker = None;
                self.worker_search_input.clear();
                self.filter_workers();
                self.navigate_to(View::SelectWorker);
            }
            View::InputHours => {
                self.navigate_to(View::SelectProject);
            }
            View::Admin => {
                self.admin = None;
                self.selected_worker = None;
                self.selected_project = None;
                self.navigate_to(View::SelectWorker);
            }
        }
    }

    /// Enter the admin panel, unauthorized, from any state.
    pub fn enter_admin(&mut self) {
        self.admin = Some(AdminState::new());
        self.navigate_to(View::Admin);
    }

    /// Decide where the flow goes after a registration left the worker at
    /// `new_total` hours for today.
    pub fn finish_registration(&mut self, new_total: f64) {
        if new_total >= DAILY_HOUR_LIMIT {
            self.show_notice(
                "¡Tiempo registrado! Jornada de 8 horas completada.",
                NoticeAction::ResetToWorkerSelect,
            );
        } else {
            self.selected_project = None;
            self.navigate_to(View::SelectProject);
        }
    }

    /// Apply an expired notice. Called once per event-loop tick; a notice
    /// cancelled by navigation never reaches this point.
    pub fn tick(&mut self, now: Instant) {
        let Some(notice) = &self.notice else {
            return;
        };
        if now < notice.expires_at {
            return;
        }
        let action = notice.action;
        self.notice = None;
        match action {
            NoticeAction::ResetToWorkerSelect => {
                self.selected_worker = None;
                self.selected_project = None;
                self.worker_search_input.clear();
                self.filter_workers();
                self.navigate_to(View::SelectWorker);
            }
            NoticeAction::Dismiss => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NOTICE_DURATION;
    use taller_core::AdminGate;

    fn app_with_selection() -> App {
        let mut app = App::new(AdminGate::default());
        let worker = Worker::new("Juan");
        let project = Project::new("SCANIA R450");
        app.set_data(vec![worker.clone()], vec![project.clone()], vec![]);
        app.select_worker(worker);
        app.select_project(project);
        app
    }

    #[test]
    fn registration_below_limit_returns_to_project_selection() {
        let mut app = app_with_selection();
        app.finish_registration(5.0);

        assert_eq!(app.current_view, View::SelectProject);
        assert!(app.selected_worker.is_some());
        assert!(app.selected_project.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn registration_at_limit_shows_notice_then_resets() {
        let mut app = app_with_selection();
        app.finish_registration(8.0);

        // Until the notice expires the view is unchanged and both
        // selections are retained.
        assert_eq!(app.current_view, View::InputHours);
        assert!(app.notice.is_some());

        app.tick(Instant::now() + NOTICE_DURATION);
        assert_eq!(app.current_view, View::SelectWorker);
        assert!(app.selected_worker.is_none());
        assert!(app.selected_project.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn notice_does_not_fire_before_its_deadline() {
        let mut app = app_with_selection();
        app.finish_registration(9.5);

        app.tick(Instant::now());
        assert_eq!(app.current_view, View::InputHours);
        assert!(app.notice.is_some());
    }

    #[test]
    fn navigation_cancels_a_pending_notice() {
        let mut app = app_with_selection();
        app.finish_registration(8.0);

        // The user navigates away during the 1.5 s window; the delayed
        // reset must not fire afterwards.
        app.go_back();
        assert_eq!(app.current_view, View::SelectProject);

        app.tick(Instant::now() + NOTICE_DURATION);
        assert_eq!(app.current_view, View::SelectProject);
        assert!(app.selected_worker.is_some());
    }

    #[test]
    fn back_from_project_selection_clears_the_worker() {
        let mut app = app_with_selection();
        app.navigate_to(View::SelectProject);

        app.go_back();
        assert_eq!(app.current_view, View::SelectWorker);
        assert!(app.selected_worker.is_none());
    }

    #[test]
    fn back_from_hour_entry_keeps_the_project() {
        let mut app = app_with_selection();

        app.go_back();
        assert_eq!(app.current_view, View::SelectProject);
        assert!(app.selected_worker.is_some());
        assert!(app.selected_project.is_some());
    }

    #[test]
    fn admin_exit_resets_the_flow_and_drops_authorization() {
        let mut app = app_with_selection();
        app.enter_admin();
        app.admin.as_mut().unwrap().authorized = true;

        app.go_back();
        assert_eq!(app.current_view, View::SelectWorker);
        assert!(app.admin.is_none());
        assert!(app.selected_worker.is_none());

        // Re-entering starts unauthorized again.
        app.enter_admin();
        assert!(!app.admin.as_ref().unwrap().authorized);
    }

    #[test]
    fn only_active_projects_are_offered() {
        let mut app = App::new(AdminGate::default());
        let mut closed = Project::new("CERRADO");
        closed.active = false;
        app.set_data(
            vec![Worker::new("Juan")],
            vec![Project::new("ABIERTO"), closed],
            vec![],
        );

        let names: Vec<&str> = app.filtered_projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ABIERTO"]);
    }
}
