// Task model
// UUID for stable identity, position in the store for ordering

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

/// One to-do item as stored in tasks.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,  // UUID - stable identifier, never reused
    pub description: String,
    #[serde(default)]
    pub complete: bool,
}

impl Task {
    /// New incomplete task with a fresh id. Rejects blank descriptions.
    pub fn new(description: &str) -> Result<Self> {
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            description: normalizeDescription(description)?,
            complete: false,
        })
    }
}

/// Trim user input, failing if nothing is left
pub fn normalizeDescription(description: &str) -> Result<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TaskError::Validation);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_incomplete_and_trimmed() {
        let task = Task::new("  buy milk \n").unwrap();
        assert_eq!(task.description, "buy milk");
        assert!(!task.complete);
        assert!(uuid::Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn test_new_task_ids_are_unique() {
        let a = Task::new("a").unwrap();
        let b = Task::new("a").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(Task::new("").unwrap_err(), TaskError::Validation);
        assert_eq!(Task::new(" \t ").unwrap_err(), TaskError::Validation);
    }
}
