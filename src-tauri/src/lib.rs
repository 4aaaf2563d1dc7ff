// Allow non-snake_case names for JSON serialization compatibility with the web UI
#![allow(non_snake_case)]

pub mod commands;
pub mod error;
pub mod filter;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;

pub use error::{Result, TaskError};
pub use models::{Settings, Task, ViewMode};
pub use state::AppState;
pub use store::TaskStore;

/// Install the fmt subscriber once; later calls are no-ops
pub fn initLogging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();
}

#[cfg(feature = "app")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    initLogging();

    tauri::Builder::default()
        .setup(|app| {
            use tauri::Manager;

            let state = state::initState();
            tracing::info!(tasks = state.store.lock().len(), "Task list ready");
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Tasks
            commands::task::getTasks,
            commands::task::addTask,
            commands::task::updateTask,
            commands::task::toggleTask,
            commands::task::deleteTask,
            // Settings
            commands::settings::getSettings,
            commands::settings::setView,
            commands::settings::takeStartupError,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

