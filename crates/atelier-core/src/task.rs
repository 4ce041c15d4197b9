//! Unassigned tasks and assignment requests.

use crate::{CoreError, TaskId, WorkerId};
use serde::{Deserialize, Serialize};

/// Reason recorded for assignments made from the worker list.
pub const MANUAL_ASSIGNMENT_REASON: &str = "Manual assignment from worker list";

/// A task not currently linked to any worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedTask {
    /// Unique task identifier.
    pub id: TaskId,

    /// Human-readable title.
    pub title: String,
}

impl UnassignedTask {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Request to link a task to a worker with a recorded reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTaskRequest {
    pub task_id: TaskId,
    pub worker_id: WorkerId,
    pub reason: String,
}

impl AssignTaskRequest {
    /// Build a request, rejecting empty identifiers.
    pub fn new(
        task_id: TaskId,
        worker_id: WorkerId,
        reason: impl Into<String>,
    ) -> Result<Self, CoreError> {
        if task_id.as_str().trim().is_empty() {
            return Err(CoreError::InvalidInput("task id is empty".to_string()));
        }
        if worker_id.as_str().trim().is_empty() {
            return Err(CoreError::InvalidInput("worker id is empty".to_string()));
        }
        Ok(Self {
            task_id,
            worker_id,
            reason: reason.into(),
        })
    }

    /// Build a request carrying the manual-assignment reason.
    pub fn manual(task_id: TaskId, worker_id: WorkerId) -> Result<Self, CoreError> {
        Self::new(task_id, worker_id, MANUAL_ASSIGNMENT_REASON)
    }

    /// JSON body posted to the task's assign endpoint.
    pub fn body(&self) -> AssignTaskBody<'_> {
        AssignTaskBody {
            worker_id: self.worker_id.as_str(),
            reason: &self.reason,
        }
    }
}

/// Wire body of an assignment request. The task id travels in the path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskBody<'a> {
    pub worker_id: &'a str,
    pub reason: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_request_reason() {
        let req = AssignTaskRequest::manual("t1".into(), "w1".into()).unwrap();
        assert_eq!(req.reason, "Manual assignment from worker list");
    }

    #[test]
    fn test_empty_ids_rejected() {
        let err = AssignTaskRequest::manual("".into(), "w1".into()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));

        let err = AssignTaskRequest::manual("t1".into(), "  ".into()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_body_shape() {
        let req = AssignTaskRequest::manual("t1".into(), "w1".into()).unwrap();
        let json = serde_json::to_value(req.body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "workerId": "w1",
                "reason": "Manual assignment from worker list"
            })
        );
    }
}
