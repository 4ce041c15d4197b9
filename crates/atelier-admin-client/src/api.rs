//! The owner backend contract consumed by the dashboard.

use async_trait::async_trait;

use atelier_core::{AssignTaskRequest, UnassignedTask, WorkerSummary};

use crate::error::ClientError;

/// Operations the dashboard needs from the owner backend.
///
/// Implemented over HTTP by [`crate::HttpClient`]; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait OwnerApi: Send + Sync {
    /// List all workers, in backend order.
    async fn list_workers(&self) -> Result<Vec<WorkerSummary>, ClientError>;

    /// List tasks not linked to any worker, in backend order.
    async fn get_unassigned_tasks(&self) -> Result<Vec<UnassignedTask>, ClientError>;

    /// Link a task to a worker. No payload is returned.
    async fn assign_task(&self, request: &AssignTaskRequest) -> Result<(), ClientError>;
}
