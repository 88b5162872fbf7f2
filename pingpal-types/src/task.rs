use serde::{Deserialize, Serialize};

use crate::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub text: String,
}

impl Task {
    pub fn new(id: RecordId, text: String) -> Self {
        Self { id, text }
    }
}
