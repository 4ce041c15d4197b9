//! Core domain errors.

use thiserror::Error;

/// Core domain errors for the owner dashboard.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Worker not found in the current list.
    #[error("Worker not found: {0}")]
    WorkerNotFound(String),

    /// Task not found in the current unassigned list.
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
