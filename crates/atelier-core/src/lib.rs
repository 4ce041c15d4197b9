//! Atelier Core Domain Types
//!
//! Pure domain types for the owner dashboard, with no dependencies on
//! network clients or terminal rendering.

pub mod error;
pub mod ids;
pub mod status;
pub mod task;
pub mod worker;

// Re-export commonly used types
pub use error::CoreError;
pub use ids::{TaskId, WorkerId};
pub use status::WorkerStatus;
pub use task::{AssignTaskBody, AssignTaskRequest, UnassignedTask, MANUAL_ASSIGNMENT_REASON};
pub use worker::WorkerSummary;
