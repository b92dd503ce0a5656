use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{Project, Worker};

/// An immutable record of hours worked by a worker on a project.
///
/// `worker_name` and `project_name` are copies captured at registration
/// time, so later roster renames never rewrite historical reports. The
/// serialized field names match the historical persisted layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: String,
    pub worker_id: String,
    pub worker_name: String,
    pub project_id: String,
    pub project_name: String,
    pub hours: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl TimeLog {
    /// Build a new log with a fresh identifier for the given registration.
    pub fn register(
        worker: &Worker,
        project: &Project,
        hours: f64,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            worker_id: worker.id.clone(),
            worker_name: worker.name.clone(),
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            hours,
            timestamp,
        }
    }
}
