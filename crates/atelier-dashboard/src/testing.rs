//! In-memory owner backend for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use atelier_admin_client::{ClientError, OwnerApi};
use atelier_core::{AssignTaskRequest, UnassignedTask, WorkerStatus, WorkerSummary};

/// Fake owner backend that records assignment calls.
#[derive(Default)]
pub struct FakeOwnerApi {
    pub workers: Vec<WorkerSummary>,
    pub tasks: Vec<UnassignedTask>,
    pub fail_workers: bool,
    pub fail_tasks: bool,
    pub fail_assign: bool,
    pub assigned: Mutex<Vec<AssignTaskRequest>>,
}

impl FakeOwnerApi {
    /// One free worker "Ana" skilled in wood, and one task "Carve leg".
    pub fn scenario() -> Self {
        Self {
            workers: vec![WorkerSummary::new("w1", "Ana")
                .with_status(WorkerStatus::Free)
                .with_skill("wood")],
            tasks: vec![UnassignedTask::new("t1", "Carve leg")],
            ..Self::default()
        }
    }

    pub fn assigned(&self) -> Vec<AssignTaskRequest> {
        self.assigned.lock().unwrap().clone()
    }
}

fn unavailable(what: &str) -> ClientError {
    ClientError::Status {
        status: 503,
        path: what.to_string(),
    }
}

#[async_trait]
impl OwnerApi for FakeOwnerApi {
    async fn list_workers(&self) -> Result<Vec<WorkerSummary>, ClientError> {
        if self.fail_workers {
            return Err(unavailable("/owner/workers"));
        }
        Ok(self.workers.clone())
    }

    async fn get_unassigned_tasks(&self) -> Result<Vec<UnassignedTask>, ClientError> {
        if self.fail_tasks {
            return Err(unavailable("/owner/tasks/unassigned"));
        }
        Ok(self.tasks.clone())
    }

    async fn assign_task(&self, request: &AssignTaskRequest) -> Result<(), ClientError> {
        self.assigned.lock().unwrap().push(request.clone());
        if self.fail_assign {
            return Err(unavailable("/owner/tasks/assign"));
        }
        Ok(())
    }
}
