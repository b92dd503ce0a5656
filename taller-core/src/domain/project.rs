use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work hours can be charged against: a truck/crane mounting unit
/// or a workshop maintenance task. Closed projects stay in the roster but
/// are not offered during time entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub active: bool,
}

impl Project {
    /// Create an active project with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            active: true,
        }
    }
}
