// Error taxonomy shared by the store, persistence and command layers
// Serialized as { kind, message } when crossing into the UI

use std::path::{Path, PathBuf};

use serde::ser::SerializeStruct;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Description empty after trimming
    #[error("Task description cannot be empty")]
    Validation,

    /// Target task no longer exists
    #[error("Task '{id}' not found")]
    NotFound { id: String },

    /// Task or config file could not be read, parsed or written
    #[error("Error accessing {}: {reason}", .path.display())]
    Persistence { path: PathBuf, reason: String },
}

impl TaskError {
    pub fn notFound(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn persistence(path: &Path, reason: impl ToString) -> Self {
        Self::Persistence {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Stable kind tag used by the UI to pick a dialog
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound { .. } => "notFound",
            Self::Persistence { .. } => "persistence",
        }
    }
}

impl serde::Serialize for TaskError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TaskError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kind_and_message() {
        let err = TaskError::notFound("abc");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "notFound");
        assert_eq!(json["message"], "Task 'abc' not found");
    }

    #[test]
    fn test_persistence_message_includes_path() {
        let err = TaskError::persistence(Path::new("/tmp/tasks.json"), "bad json");
        assert_eq!(err.kind(), "persistence");
        assert!(err.to_string().contains("/tmp/tasks.json"));
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(TaskError::Validation.to_string(), "Task description cannot be empty");
    }
}
