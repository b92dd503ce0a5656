use std::sync::mpsc::{self, Receiver, Sender};

/// Repository-touching work queued by the key handlers and drained by the
/// event loop after input handling.
#[derive(Debug, Clone)]
pub(super) enum Action {
    /// Reload workers, projects and logs from the repository.
    LoadData,
    RegisterHours { hours: f64 },
    SubmitPassphrase,
    ConfirmEdit,
    ConfirmPending,
    ToggleProjectActive { id: String },
    ExportReport,
    ExitAdmin,
}

pub(super) type ActionTx = Sender<Action>;
pub(super) type ActionRx = Receiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::channel()
}
