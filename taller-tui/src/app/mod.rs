use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::Instant;
use taller_core::domain::{Project, TimeLog, Worker};
use taller_core::{daily, AdminGate};

mod navigation;
mod state;

pub use state::{
    AdminState, AdminTab, ConfirmAction, EditDialog, Notice, NoticeAction, RosterKind, TextInput,
    View, NOTICE_DURATION,
};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // Rosters and history, reloaded whenever the admin panel is entered or
    // left.
    pub workers: Vec<Worker>,
    pub projects: Vec<Project>,
    pub logs: Vec<TimeLog>,

    // Main flow selections
    pub selected_worker: Option<Worker>,
    pub selected_project: Option<Project>,

    // Worker selection list
    pub worker_search_input: TextInput,
    pub filtered_workers: Vec<Worker>,
    pub filtered_worker_index: usize,

    // Project selection list (active projects only)
    pub project_search_input: TextInput,
    pub filtered_projects: Vec<Project>,
    pub filtered_project_index: usize,

    // Whether focus is on the result list (vs the search input) in the
    // selection views
    pub selection_list_focused: bool,

    // Cursor into the hour-increment menu
    pub hour_index: usize,

    // Transient overlay with its pending transition
    pub notice: Option<Notice>,

    // Admin panel; Some(_) only while on the Admin view
    pub admin: Option<AdminState>,

    pub gate: AdminGate,
    matcher: SkimMatcherV2,
}

impl App {
    pub fn new(gate: AdminGate) -> Self {
        Self {
            running: true,
            current_view: View::SelectWorker,
            status_message: None,
            workers: Vec::new(),
            projects: Vec::new(),
            logs: Vec::new(),
            selected_worker: None,
            selected_project: None,
            worker_search_input: TextInput::new(),
            filtered_workers: Vec::new(),
            filtered_worker_index: 0,
            project_search_input: TextInput::new(),
            filtered_projects: Vec::new(),
            filtered_project_index: 0,
            selection_list_focused: false,
            hour_index: 0,
            notice: None,
            admin: None,
            gate,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Replace rosters and history with freshly loaded data and rebuild the
    /// filtered lists.
    pub fn set_data(&mut self, workers: Vec<Worker>, projects: Vec<Project>, logs: Vec<TimeLog>) {
        self.workers = workers;
        self.projects = projects;
        self.logs = logs;
        self.filter_workers();
        self.filter_projects();
    }

    /// Hours the selected worker has logged today, at the kiosk's local
    /// offset.
    pub fn hours_today(&self) -> f64 {
        let Some(worker) = &self.selected_worker else {
            return 0.0;
        };
        let offset = daily::local_offset();
        daily::hours_on_date(&worker.id, daily::today(offset), offset, &self.logs)
    }

    pub fn filter_workers(&mut self) {
        let query = self.worker_search_input.value.trim().to_string();
        let filtered: Vec<Worker> = if query.is_empty() {
            self.workers.clone()
        } else {
            self.workers
                .iter()
                .filter(|w| self.matcher.fuzzy_match(&w.name, &query).is_some())
                .cloned()
                .collect()
        };
        self.filtered_workers = filtered;
        self.filtered_worker_index = self
            .filtered_worker_index
            .min(self.filtered_workers.len().saturating_sub(1));
    }

    /// Only active projects are offered during time entry.
    pub fn filter_projects(&mut self) {
        let query = self.project_search_input.value.trim().to_string();
        let filtered: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| p.active)
            .filter(|p| query.is_empty() || self.matcher.fuzzy_match(&p.name, &query).is_some())
            .cloned()
            .collect();
        self.filtered_projects = filtered;
        self.filtered_project_index = self
            .filtered_project_index
            .min(self.filtered_projects.len().saturating_sub(1));
    }

    // Search input plumbing for the selection views; referenced by fn
    // pointer from the shared key handler.
    pub fn worker_search_clear(&mut self) {
        self.worker_search_input.clear();
        self.filter_workers();
    }

    pub fn worker_search_char(&mut self, c: char) {
        self.worker_search_input.insert(c);
        self.filter_workers();
    }

    pub fn worker_search_backspace(&mut self) {
        self.worker_search_input.backspace();
        self.filter_workers();
    }

    pub fn worker_search_move_cursor(&mut self, left: bool) {
        if left {
            self.worker_search_input.move_left();
        } else {
            self.worker_search_input.move_right();
        }
    }

    pub fn project_search_clear(&mut self) {
        self.project_search_input.clear();
        self.filter_projects();
    }

    pub fn project_search_char(&mut self, c: char) {
        self.project_search_input.insert(c);
        self.filter_projects();
    }

    pub fn project_search_backspace(&mut self) {
        self.project_search_input.backspace();
        self.filter_projects();
    }

    pub fn project_search_move_cursor(&mut self, left: bool) {
        if left {
            self.project_search_input.move_left();
        } else {
            self.project_search_input.move_right();
        }
    }

    pub fn select_next(&mut self) {
        match self.current_view {
            View::SelectWorker => {
                if self.filtered_worker_index + 1 < self.filtered_workers.len() {
                    self.filtered_worker_index += 1;
                }
            }
            View::SelectProject => {
                if self.filtered_project_index + 1 < self.filtered_projects.len() {
                    self.filtered_project_index += 1;
                }
            }
            _ => {}
        }
    }

    pub fn select_previous(&mut self) {
        match self.current_view {
            View::SelectWorker => {
                self.filtered_worker_index = self.filtered_worker_index.saturating_sub(1);
            }
            View::SelectProject => {
                self.filtered_project_index = self.filtered_project_index.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Admin log listing: newest first by timestamp.
    pub fn admin_logs(&self) -> Vec<&TimeLog> {
        let mut logs: Vec<&TimeLog> = self.logs.iter().collect();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs
    }

    /// Length of the list backing the current admin tab.
    pub fn admin_list_len(&self) -> usize {
        match self.admin.as_ref().map(|a| a.tab) {
            Some(AdminTab::Logs) => self.logs.len(),
            Some(AdminTab::Workers) => self.workers.len(),
            Some(AdminTab::Projects) => self.projects.len(),
            None => 0,
        }
    }

    pub fn show_notice(&mut self, message: impl Into<String>, action: NoticeAction) {
        self.notice = Some(Notice {
            message: message.into(),
            expires_at: Instant::now() + NOTICE_DURATION,
            action,
        });
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
