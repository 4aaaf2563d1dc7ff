// Configuration model
// Stored as YAML frontmatter in ~/.tasklist/config.md

use serde::{Deserialize, Serialize};

use super::common::ViewMode;

/// App settings. Presentation state lives here, never in tasks.json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Override for the tasks file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataFile: Option<String>,
    /// View selected when the app was last used
    #[serde(default)]
    pub lastView: ViewMode,
}
