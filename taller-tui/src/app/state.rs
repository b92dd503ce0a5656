use std::time::{Duration, Instant};

/// How long transient overlays (completion notice, save acknowledgment)
/// stay on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    SelectWorker,
    SelectProject,
    InputHours,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdminTab {
    Logs,
    Workers,
    Projects,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Logs, AdminTab::Workers, AdminTab::Projects];

    pub fn title(self) -> &'static str {
        match self {
            AdminTab::Logs => "Historial",
            AdminTab::Workers => "Personal",
            AdminTab::Projects => "Unidades",
        }
    }

    pub fn next(self) -> Self {
        match self {
            AdminTab::Logs => AdminTab::Workers,
            AdminTab::Workers => AdminTab::Projects,
            AdminTab::Projects => AdminTab::Logs,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            AdminTab::Logs => AdminTab::Projects,
            AdminTab::Workers => AdminTab::Logs,
            AdminTab::Projects => AdminTab::Workers,
        }
    }
}

/// What a transient notice does once its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeAction {
    /// Completion notice: reset the flow to worker selection with nothing
    /// selected.
    ResetToWorkerSelect,
    /// Save acknowledgment: just disappear.
    Dismiss,
}

/// A transient overlay with a deadline and a follow-up transition. Any
/// manual navigation clears the pending notice, so a state change always
/// wins over the delayed reset.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
    pub action: NoticeAction,
}

/// Which roster an admin dialog is acting on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RosterKind {
    Workers,
    Projects,
}

/// State of the add/rename dialog. `id: None` adds a new record.
#[derive(Debug, Clone)]
pub struct EditDialog {
    pub target: RosterKind,
    pub id: Option<String>,
    pub name: TextInput,
}

/// Target of the two-step confirmation dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteWorker(String),
    DeleteProject(String),
    ResetLogs,
}

/// Admin panel sub-state. Dropped wholesale when leaving the admin view,
/// so authorization never outlives the visit.
#[derive(Debug)]
pub struct AdminState {
    pub authorized: bool,
    pub passphrase_input: TextInput,
    pub auth_error: Option<String>,
    pub tab: AdminTab,
    pub selected_index: usize,
    pub edit: Option<EditDialog>,
    pub confirm: Option<ConfirmAction>,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            authorized: false,
            passphrase_input: TextInput::new(),
            auth_error: None,
            tab: AdminTab::Logs,
            selected_index: 0,
            edit: None,
            confirm: None,
        }
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}
