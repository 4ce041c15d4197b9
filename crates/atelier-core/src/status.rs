//! Worker availability status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability of a worker as reported by the backend.
///
/// Only two states are rendered. Anything the backend reports that is not
/// `BUSY` is treated as available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerStatus {
    /// Worker is occupied.
    Busy,
    /// Worker can take on more work. Unknown wire values land here.
    #[default]
    #[serde(other)]
    Free,
}

impl WorkerStatus {
    /// Wire label, also used as the badge text.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStatus::Free => "FREE",
            WorkerStatus::Busy => "BUSY",
        }
    }

    /// Whether the worker is shown as occupied.
    pub fn is_busy(&self) -> bool {
        matches!(self, WorkerStatus::Busy)
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        let busy: WorkerStatus = serde_json::from_str("\"BUSY\"").unwrap();
        let free: WorkerStatus = serde_json::from_str("\"FREE\"").unwrap();
        assert_eq!(busy, WorkerStatus::Busy);
        assert_eq!(free, WorkerStatus::Free);
    }

    #[test]
    fn test_unknown_status_is_free() {
        let status: WorkerStatus = serde_json::from_str("\"ON_BREAK\"").unwrap();
        assert_eq!(status, WorkerStatus::Free);
        assert!(!status.is_busy());
    }

    #[test]
    fn test_free_is_default_and_round_trips() {
        assert_eq!(WorkerStatus::default(), WorkerStatus::Free);
        assert_eq!(serde_json::to_string(&WorkerStatus::Busy).unwrap(), "\"BUSY\"");
        assert_eq!(serde_json::to_string(&WorkerStatus::Free).unwrap(), "\"FREE\"");
    }

    #[test]
    fn test_available_maps_to_free() {
        let status: WorkerStatus = serde_json::from_str("\"AVAILABLE\"").unwrap();
        assert_eq!(status, WorkerStatus::Free);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"FREE\"");
    }
}
