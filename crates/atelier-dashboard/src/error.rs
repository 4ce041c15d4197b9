//! Errors surfaced by the one-shot commands.

use thiserror::Error;

use atelier_admin_client::ClientError;
use atelier_core::CoreError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
