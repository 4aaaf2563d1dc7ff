// Models for the task list
// Field names are camelCase to match the JSON seen by the UI

pub mod common;
pub mod config;
pub mod task;

pub use common::ViewMode;
pub use config::Settings;
pub use task::Task;
