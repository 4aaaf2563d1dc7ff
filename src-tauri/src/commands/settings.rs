// Settings commands

#[cfg(feature = "app")]
use tauri::State;

use crate::error::Result;
use crate::models::ViewMode;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SettingsInfo {
    pub lastView: ViewMode,
    pub dataFile: String,
}

pub fn getSettingsImpl(state: &AppState) -> SettingsInfo {
    SettingsInfo {
        lastView: state.currentView(),
        dataFile: state.store.lock().path().to_string_lossy().to_string(),
    }
}

pub fn setViewImpl(state: &AppState, view: ViewMode) -> Result<()> {
    tracing::debug!(view = view.label(), "Selected view");
    state.setView(view)
}

#[cfg(feature = "app")]
#[tauri::command]
pub fn getSettings(state: State<'_, AppState>) -> SettingsInfo {
    getSettingsImpl(&state)
}

#[cfg(feature = "app")]
#[tauri::command]
pub fn setView(state: State<'_, AppState>, view: ViewMode) -> Result<()> {
    setViewImpl(&state, view)
}

#[cfg(feature = "app")]
#[tauri::command]
pub fn takeStartupError(state: State<'_, AppState>) -> Option<String> {
    state.takeStartupError()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_info_reports_view_and_data_file() {
        let temp = TempDir::new().unwrap();
        let state = AppState::initialize(temp.path());

        setViewImpl(&state, ViewMode::Incomplete).unwrap();
        let info = getSettingsImpl(&state);
        assert_eq!(info.lastView, ViewMode::Incomplete);
        assert!(info.dataFile.ends_with("tasks.json"));

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["lastView"], "incomplete");
    }
}
