use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person who can log hours at the kiosk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
}

impl Worker {
    /// Create a worker with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}
