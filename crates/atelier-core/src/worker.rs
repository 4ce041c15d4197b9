//! Worker summary as listed on the owner dashboard.

use crate::{WorkerId, WorkerStatus};
use serde::{Deserialize, Serialize};

/// Point-in-time summary of a worker, owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSummary {
    /// Unique worker identifier.
    pub id: WorkerId,

    /// Display name.
    pub name: String,

    /// Role label (e.g. "carpenter").
    #[serde(default)]
    pub role: String,

    /// Availability.
    #[serde(default)]
    pub status: WorkerStatus,

    /// Number of tasks currently assigned and not finished.
    #[serde(default)]
    pub active_task_count: u32,

    /// Skill labels, in backend order.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl WorkerSummary {
    /// Create a free worker with no role, tasks or skills.
    pub fn new(id: impl Into<WorkerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            status: WorkerStatus::Free,
            active_task_count: 0,
            skills: Vec::new(),
        }
    }

    /// First character of the name, used as the avatar.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Builder method to set the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: WorkerStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the active task count.
    pub fn with_active_tasks(mut self, count: u32) -> Self {
        self.active_task_count = count;
        self
    }

    /// Builder method to add a skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }
}
