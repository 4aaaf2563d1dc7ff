// Commands module - the UI's entry points into the task store
// Plain functions take &AppState; the #[tauri::command] wrappers only exist with the "app" feature

pub mod settings;
pub mod task;
