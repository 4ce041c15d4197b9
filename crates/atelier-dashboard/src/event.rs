//! Event types for communication between the backend task and the UI.

use atelier_core::{AssignTaskRequest, TaskId, UnassignedTask, WorkerId, WorkerSummary};

/// Events sent from the backend to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// Both lists fetched successfully.
    DataLoaded {
        generation: u64,
        workers: Vec<WorkerSummary>,
        tasks: Vec<UnassignedTask>,
    },

    /// At least one of the two fetches failed.
    DataLoadFailed { generation: u64, message: String },

    /// The backend accepted an assignment.
    AssignSucceeded { worker_id: WorkerId, task_id: TaskId },

    /// The backend rejected an assignment or could not be reached.
    AssignFailed {
        worker_id: WorkerId,
        task_id: TaskId,
        message: String,
    },
}

/// Commands sent from the UI to the backend.
#[derive(Debug, PartialEq, Eq)]
pub enum BackendCommand {
    /// Fetch workers and unassigned tasks together.
    FetchAll { generation: u64 },

    /// Link a task to a worker.
    AssignTask(AssignTaskRequest),

    /// Quit the backend loop.
    Quit,
}
