// Application state
// The one TaskStore plus settings, built at startup and handed to the window

use parking_lot::{Mutex, RwLock};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Settings, ViewMode};
use crate::storage::{self, configPath, loadSettings, quarantinePath, saveSettings, tasksPath};
use crate::store::TaskStore;

pub struct AppState {
    pub store: Mutex<TaskStore>,
    pub settings: RwLock<Settings>,
    configPath: PathBuf,
    startupError: Mutex<Option<String>>,
}

impl AppState {
    /// Load settings and tasks from `configDir`.
    /// An unreadable tasks file is moved aside and the app starts empty.
    pub fn initialize(configDir: &Path) -> Self {
        let configPath = configPath(configDir);
        let settings = loadSettings(&configPath);
        let dataPath = tasksPath(configDir, &settings);
        tracing::debug!(config = %configPath.display(), data = %dataPath.display(), "Resolved paths");

        let (store, startupError) = match TaskStore::open(&dataPath) {
            Ok(store) => (store, None),
            Err(e) => {
                tracing::warn!(error = %e, "Error loading tasks, starting with an empty list");
                quarantine(&dataPath);
                (TaskStore::new(&dataPath), Some(e.to_string()))
            }
        };

        Self {
            store: Mutex::new(store),
            settings: RwLock::new(settings),
            configPath,
            startupError: Mutex::new(startupError),
        }
    }

    /// Load error from startup, reported once
    pub fn takeStartupError(&self) -> Option<String> {
        self.startupError.lock().take()
    }

    pub fn currentView(&self) -> ViewMode {
        self.settings.read().lastView
    }

    /// Remember the selected view across sessions
    pub fn setView(&self, view: ViewMode) -> Result<()> {
        let mut settings = self.settings.write();
        if settings.lastView == view {
            return Ok(());
        }
        let mut next = settings.clone();
        next.lastView = view;
        saveSettings(&self.configPath, &next)?;
        *settings = next;
        Ok(())
    }
}

/// Move an unreadable tasks file out of the way so the next save cannot overwrite it
fn quarantine(path: &Path) {
    if !path.is_file() {
        return;
    }
    let bakPath = quarantinePath(path);
    match fs::rename(path, &bakPath) {
        Ok(()) => tracing::warn!(from = %path.display(), to = %bakPath.display(), "Moved unreadable tasks file aside"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to move unreadable tasks file aside"),
    }
}

/// State rooted at the default config directory (~/.tasklist)
pub fn initState() -> AppState {
    AppState::initialize(&storage::configDir())
}
