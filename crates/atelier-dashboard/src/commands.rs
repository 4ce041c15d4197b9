//! One-shot subcommands that talk to the owner API without the TUI.

use tracing::info;

use atelier_admin_client::OwnerApi;
use atelier_core::{AssignTaskRequest, TaskId, WorkerId};

use crate::error::DashboardError;

/// Workers as pretty-printed JSON.
pub async fn list_workers(api: &dyn OwnerApi) -> Result<String, DashboardError> {
    let workers = api.list_workers().await?;
    Ok(serde_json::to_string_pretty(&workers)?)
}

/// Unassigned tasks as pretty-printed JSON.
pub async fn list_unassigned(api: &dyn OwnerApi) -> Result<String, DashboardError> {
    let tasks = api.get_unassigned_tasks().await?;
    Ok(serde_json::to_string_pretty(&tasks)?)
}

/// Assign a task and return a confirmation line.
pub async fn assign(
    api: &dyn OwnerApi,
    task_id: String,
    worker_id: String,
    reason: String,
) -> Result<String, DashboardError> {
    let request = AssignTaskRequest::new(TaskId::from(task_id), WorkerId::from(worker_id), reason)?;
    api.assign_task(&request).await?;
    info!(task_id = %request.task_id, worker_id = %request.worker_id, "Task assigned");
    Ok(format!(
        "Assigned task {} to worker {}",
        request.task_id, request.worker_id
    ))
}
