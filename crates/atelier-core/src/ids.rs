//! Newtype wrappers for identifiers handed out by the owner backend.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! backend_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier string issued by the backend.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string reference.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

backend_id!(
    /// Identifier of a worker (staff member).
    WorkerId
);

backend_id!(
    /// Identifier of a task.
    TaskId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TaskId::new("t1");
        assert_eq!(format!("{}", id), "t1");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = WorkerId::from("w1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"w1\"");

        let back: WorkerId = serde_json::from_str("\"w1\"").unwrap();
        assert_eq!(back, id);
    }
}
