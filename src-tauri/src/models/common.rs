// Common types shared by models, filter and commands

use serde::{Deserialize, Serialize};

/// Which slice of the task list is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [Self::All, Self::Completed, Self::Incomplete];

    /// Parse a dropdown label ("All", "completed", ...)
    pub fn fromLabel(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "completed" => Some(Self::Completed),
            "incomplete" => Some(Self::Incomplete),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Incomplete => "Incomplete",
        }
    }

    /// Whether a task with this completion flag is shown in this view
    pub fn includes(&self, complete: bool) -> bool {
        match self {
            Self::All => true,
            Self::Completed => complete,
            Self::Incomplete => !complete,
        }
    }
}
